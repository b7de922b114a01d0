use crate::constants::HOVER_TARGET_SELECTOR;
use crate::dom;
use crate::events::ListenerSet;
use crate::ids::reuse_ids;
use folio_core::TargetId;
use web_sys as web;

/// Enter/leave listeners on every element carrying the hover marker class.
/// Elements that survive a rescan keep their id, so an active hover on them
/// is not dropped.
#[derive(Default)]
pub struct HoverBindings {
    listeners: ListenerSet,
    bound: Vec<(web::HtmlElement, TargetId)>,
    next_id: TargetId,
}

impl HoverBindings {
    pub fn rescan(&mut self, document: &web::Document) -> Vec<TargetId> {
        self.listeners.clear();
        let previous = std::mem::take(&mut self.bound);

        let found = dom::query_all(document, HOVER_TARGET_SELECTOR);
        self.bound = reuse_ids(&previous, found, &mut self.next_id);

        for (el, id) in &self.bound {
            let id = *id;
            self.listeners.listen(el, "pointerenter", move |_| {
                crate::with_app(|app| app.hover_enter(id));
            });
            self.listeners.listen(el, "pointerleave", move |_| {
                crate::with_app(|app| app.hover_leave(id));
            });
            self.listeners.listen(el, "lostpointercapture", move |_| {
                crate::with_app(|app| app.hover_capture_lost());
            });
        }
        log::debug!("[hover] bound {} targets", self.bound.len());
        self.bound.iter().map(|(_, id)| *id).collect()
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
        self.bound.clear();
    }
}
