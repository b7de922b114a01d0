use crate::constants::{FRAME_MS, MIN_SAMPLE_INTERVAL_MS, SCROLL_VELOCITY_SCALE};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: f64,
}

impl PointerSample {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Latest-value store for raw input. Event handlers write, the frame tick reads.
///
/// No queue: a burst of moves between two frames collapses to the last one.
#[derive(Clone, Debug, Default)]
pub struct SignalSampler {
    latest: Option<PointerSample>,
    previous: Option<PointerSample>,
    scroll_baseline: Option<(f32, f64)>,
    scroll_seed: f32,
}

impl SignalSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, now_ms: f64) {
        let sample = PointerSample {
            x,
            y,
            timestamp_ms: now_ms,
        };
        self.previous = self.latest.replace(sample);
    }

    #[inline]
    pub fn latest(&self) -> Option<PointerSample> {
        self.latest
    }

    /// Movement between the last two samples, if there are two.
    pub fn delta(&self) -> Option<Vec2> {
        match (self.previous, self.latest) {
            (Some(p), Some(l)) => Some(l.position() - p.position()),
            _ => None,
        }
    }

    /// Record a scroll offset and derive a velocity seed in px per reference
    /// frame, scaled by [`SCROLL_VELOCITY_SCALE`]. The first call only sets
    /// the baseline.
    pub fn on_scroll(&mut self, scroll_y_px: f32, now_ms: f64) {
        if let Some((last_y, last_ms)) = self.scroll_baseline {
            let elapsed = ((now_ms - last_ms) as f32).max(MIN_SAMPLE_INTERVAL_MS);
            let per_ms = (scroll_y_px - last_y) / elapsed;
            self.scroll_seed = per_ms * FRAME_MS * SCROLL_VELOCITY_SCALE;
        }
        self.scroll_baseline = Some((scroll_y_px, now_ms));
    }

    /// Hand the pending scroll seed to the consumer; later calls return 0
    /// until the next scroll event.
    pub fn take_scroll_seed(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_seed)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
