//! Two-circle cursor replacement: a snappy dot and a trailing ring that both
//! chase the pointer and grow over interactive elements.

use crate::animation::Animation;
use crate::config::CursorConfig;
use crate::error::ConfigError;
use crate::follower::DampedFollower;
use crate::hover::{HoverDetector, TargetId};
use crate::sampler::SignalSampler;
use glam::Vec2;

/// Everything the render sink needs for one frame. Positions are circle
/// centers in viewport px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub dot: Vec2,
    pub ring: Vec2,
    pub dot_size: f32,
    pub ring_size: f32,
    /// False until the first pointer sample arrives.
    pub visible: bool,
}

#[derive(Clone, Debug)]
pub struct StickyCursor {
    cfg: CursorConfig,
    sampler: SignalSampler,
    dot: DampedFollower,
    ring: DampedFollower,
    hover: HoverDetector,
    primed: bool,
}

impl Default for StickyCursor {
    fn default() -> Self {
        Self::new(CursorConfig::default())
    }
}

impl StickyCursor {
    fn new(cfg: CursorConfig) -> Self {
        Self {
            cfg,
            sampler: SignalSampler::new(),
            dot: DampedFollower::new(cfg.dot_smoothing),
            ring: DampedFollower::new(cfg.ring_smoothing),
            hover: HoverDetector::new(cfg.hover),
            primed: false,
        }
    }

    pub fn with_config(cfg: CursorConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, now_ms: f64) {
        self.sampler.on_pointer_move(x, y, now_ms);
    }

    pub fn resync_targets<I: IntoIterator<Item = TargetId>>(&mut self, ids: I) {
        self.hover.resync(ids);
    }

    pub fn on_enter(&mut self, id: TargetId) {
        self.hover.enter(id);
    }

    pub fn on_leave(&mut self, id: TargetId) {
        self.hover.leave(id);
    }

    pub fn on_capture_lost(&mut self) {
        self.hover.capture_lost();
    }

    pub fn on_navigate(&mut self) {
        self.hover.navigate();
    }

    #[inline]
    pub fn hover(&self) -> &HoverDetector {
        &self.hover
    }

    fn frame(&self) -> CursorFrame {
        let blend = self.hover.blend();
        CursorFrame {
            dot: self.dot.current(),
            ring: self.ring.current(),
            dot_size: self.hover.current_scale(),
            ring_size: self.cfg.ring_rest_size
                + (self.cfg.ring_hover_size - self.cfg.ring_rest_size) * blend,
            visible: self.primed,
        }
    }
}

impl Animation for StickyCursor {
    type Frame = CursorFrame;

    fn tick(&mut self, dt_sec: f32) -> CursorFrame {
        if let Some(sample) = self.sampler.latest() {
            let target = sample.position();
            if !self.primed {
                // start on the pointer instead of sweeping in from the origin
                self.dot.snap_to(target);
                self.ring.snap_to(target);
                self.primed = true;
            }
            self.dot.tick(target, dt_sec);
            self.ring.tick(target, dt_sec);
        }
        self.hover.tick(dt_sec);
        self.frame()
    }

    fn reset(&mut self) {
        self.sampler.reset();
        self.dot.reset();
        self.ring.reset();
        self.hover.reset();
        self.primed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    const FRAME: f32 = 1.0 / REFERENCE_FPS;

    #[test]
    fn hidden_until_first_sample() {
        let mut c = StickyCursor::default();
        let f = c.tick(FRAME);
        assert!(!f.visible);
        assert_eq!(f.dot, Vec2::ZERO);
    }

    #[test]
    fn first_sample_snaps_both_circles() {
        let mut c = StickyCursor::default();
        c.on_pointer_move(300.0, 200.0, 0.0);
        let f = c.tick(FRAME);
        assert!(f.visible);
        assert_eq!(f.dot, Vec2::new(300.0, 200.0));
        assert_eq!(f.ring, Vec2::new(300.0, 200.0));
    }

    #[test]
    fn dot_leads_ring() {
        let mut c = StickyCursor::default();
        c.on_pointer_move(0.0, 0.0, 0.0);
        c.tick(FRAME);
        c.on_pointer_move(100.0, 0.0, 16.0);
        let f = c.tick(FRAME);
        assert!((f.dot.x - 100.0 * DOT_SMOOTHING).abs() < 1e-3);
        assert!((f.ring.x - 100.0 * RING_SMOOTHING).abs() < 1e-3);
        assert!(f.dot.x > f.ring.x);
    }

    #[test]
    fn hover_grows_both_sizes() {
        let mut c = StickyCursor::default();
        c.resync_targets([7]);
        c.on_enter(7);
        let mut f = c.tick(FRAME);
        for _ in 0..200 {
            f = c.tick(FRAME);
        }
        assert!((f.dot_size - DOT_HOVER_SIZE).abs() < 0.05);
        assert!((f.ring_size - RING_HOVER_SIZE).abs() < 0.05);
    }

    #[test]
    fn reset_returns_to_mount_state() {
        let mut c = StickyCursor::default();
        c.resync_targets([1]);
        c.on_enter(1);
        c.on_pointer_move(5.0, 5.0, 0.0);
        c.tick(FRAME);
        c.reset();
        let f = c.tick(FRAME);
        assert!(!f.visible);
        assert_eq!(f.dot_size, DOT_REST_SIZE);
        assert_eq!(c.hover().bound_count(), 0);
    }
}
