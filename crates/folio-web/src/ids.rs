// Stable target ids across rescans. Generic over the element handle so the
// assignment can be checked on the host.
use folio_core::TargetId;

/// Pair every element of `current` with an id. An element already present
/// in `previous` keeps its id; a new one takes `next_id`, which advances.
pub fn reuse_ids<T: PartialEq>(
    previous: &[(T, TargetId)],
    current: impl IntoIterator<Item = T>,
    next_id: &mut TargetId,
) -> Vec<(T, TargetId)> {
    current
        .into_iter()
        .map(|el| {
            let id = match previous.iter().find(|(old, _)| *old == el) {
                Some((_, id)) => *id,
                None => {
                    let id = *next_id;
                    *next_id = next_id.wrapping_add(1);
                    id
                }
            };
            (el, id)
        })
        .collect()
}
