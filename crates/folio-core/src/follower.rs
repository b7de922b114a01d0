//! Exponential smoothing toward a moving target.
//!
//! Each reference frame the tracked value covers a fixed fraction `k` of the
//! remaining distance. Because the step is a fraction and not a fixed length
//! it never overshoots.

use crate::config::check_smoothing;
use crate::constants::{MAX_FRAME_DT_SEC, REFERENCE_FPS};
use crate::error::ConfigError;
use glam::Vec2;

/// Convert a frame delta in seconds to reference frames, clamping stalls.
#[inline]
pub fn frames_for(dt_sec: f32) -> f32 {
    if !dt_sec.is_finite() {
        return 0.0;
    }
    dt_sec.clamp(0.0, MAX_FRAME_DT_SEC) * REFERENCE_FPS
}

/// Effective smoothing factor for `frames` reference frames.
///
/// Equals `k` for exactly one frame and stays within `[0, 1)` for any
/// non-negative frame count.
#[inline]
pub fn rate_for(k: f32, frames: f32) -> f32 {
    1.0 - (1.0 - k).powf(frames.max(0.0))
}

#[inline]
pub fn approach(current: f32, target: f32, k: f32) -> f32 {
    current + (target - current) * k
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampedFollower {
    current: Vec2,
    smoothing: f32,
}

impl DampedFollower {
    /// Panics in debug builds when `smoothing` is outside (0, 1); use
    /// [`DampedFollower::try_new`] for values that did not come from constants.
    pub fn new(smoothing: f32) -> Self {
        debug_assert!(smoothing > 0.0 && smoothing < 1.0);
        Self {
            current: Vec2::ZERO,
            smoothing,
        }
    }

    pub fn try_new(smoothing: f32) -> Result<Self, ConfigError> {
        check_smoothing("smoothing", smoothing)?;
        Ok(Self::new(smoothing))
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    pub fn snap_to(&mut self, pos: Vec2) {
        self.current = pos;
    }

    /// Advance exactly one reference frame.
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.current += (target - self.current) * self.smoothing;
        self.current
    }

    /// Advance by a real frame delta.
    pub fn tick(&mut self, target: Vec2, dt_sec: f32) -> Vec2 {
        let k = rate_for(self.smoothing, frames_for(dt_sec));
        self.current += (target - self.current) * k;
        self.current
    }

    pub fn reset(&mut self) {
        self.current = Vec2::ZERO;
    }
}
