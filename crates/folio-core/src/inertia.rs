//! Momentum that outlives its input.
//!
//! Samples feed a blended velocity estimate; every tick the velocity is
//! applied and then decays geometrically until it drops under `epsilon`.

use crate::config::InertiaConfig;
use crate::constants::{FRAME_MS, MIN_SAMPLE_INTERVAL_MS};
use crate::error::ConfigError;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VelocityState {
    pub vx: f32,
    pub vy: f32,
}

#[derive(Clone, Debug)]
pub struct InertiaTracker {
    cfg: InertiaConfig,
    velocity: Vec2,
    last: Option<(Vec2, f64)>,
}

impl Default for InertiaTracker {
    fn default() -> Self {
        Self::new(InertiaConfig::default())
    }
}

impl InertiaTracker {
    pub(crate) fn new(cfg: InertiaConfig) -> Self {
        Self {
            cfg,
            velocity: Vec2::ZERO,
            last: None,
        }
    }

    pub fn with_config(cfg: InertiaConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn state(&self) -> VelocityState {
        VelocityState {
            vx: self.velocity.x,
            vy: self.velocity.y,
        }
    }

    pub fn set_velocity(&mut self, v: Vec2) {
        self.velocity = v.clamp_length_max(self.cfg.max_speed);
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.velocity == Vec2::ZERO
    }

    /// Feed a positional sample. The first sample after construction, `grab`
    /// or `release` only sets the baseline.
    pub fn sample(&mut self, pos: Vec2, now_ms: f64) {
        if let Some((prev, prev_ms)) = self.last {
            let elapsed = ((now_ms - prev_ms) as f32).max(MIN_SAMPLE_INTERVAL_MS);
            let instant = (pos - prev) / elapsed * FRAME_MS;
            self.blend(instant);
        }
        self.last = Some((pos, now_ms));
    }

    /// Blend a velocity estimate (units per reference frame) into the running one.
    pub fn blend(&mut self, new_v: Vec2) {
        let r = self.cfg.blend_ratio;
        let v = self.velocity * (1.0 - r) + new_v * r;
        self.velocity = v.clamp_length_max(self.cfg.max_speed);
    }

    /// A new interaction starts: soften in-flight motion without halting it.
    pub fn grab(&mut self) {
        self.velocity *= self.cfg.grab_damping;
        self.last = None;
    }

    /// The interaction ended; velocity keeps coasting.
    pub fn release(&mut self) {
        self.last = None;
    }

    /// Apply velocity for `frames` reference frames and decay it. Returns the
    /// displacement to add to the driven value.
    pub fn advance(&mut self, frames: f32) -> Vec2 {
        if self.velocity.length() < self.cfg.epsilon {
            self.velocity = Vec2::ZERO;
            return Vec2::ZERO;
        }
        let frames = frames.max(0.0);
        let displacement = self.velocity * frames;
        self.velocity *= self.cfg.damping.powf(frames);
        if self.velocity.length() < self.cfg.epsilon {
            self.velocity = Vec2::ZERO;
        }
        displacement
    }

    pub fn reset(&mut self) {
        self.velocity = Vec2::ZERO;
        self.last = None;
    }
}

/// Reference frames until `|v0| * damping^n` drops below `epsilon`, or
/// `None` when `damping >= 1` and the velocity never decays.
pub fn ticks_to_settle(v0: f32, damping: f32, epsilon: f32) -> Option<u32> {
    let v0 = v0.abs();
    if v0 < epsilon {
        return Some(0);
    }
    if damping >= 1.0 || damping.is_nan() {
        return None;
    }
    if damping <= 0.0 {
        return Some(1);
    }
    Some(((epsilon / v0).ln() / damping.ln()).ceil() as u32)
}
