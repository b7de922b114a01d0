//! Orientation of the 3D logo: drag inertia, scroll spin and a slow idle
//! yaw when nobody is touching it.

use crate::animation::Animation;
use crate::config::RotationConfig;
use crate::error::ConfigError;
use crate::follower::{approach, frames_for, rate_for};
use crate::inertia::InertiaTracker;
use crate::sampler::SignalSampler;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// Euler angles in radians, applied X then Y then Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub rx: f32,
    pub ry: f32,
    pub rz: f32,
}

impl RotationState {
    #[inline]
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.rx, self.ry, self.rz)
    }
}

#[derive(Clone, Debug)]
pub struct LogoRotation {
    cfg: RotationConfig,
    state: RotationState,
    drag: InertiaTracker,
    scroll: InertiaTracker,
    sampler: SignalSampler,
    dragging: bool,
}

impl Default for LogoRotation {
    fn default() -> Self {
        Self::new(RotationConfig::default())
    }
}

impl LogoRotation {
    fn new(cfg: RotationConfig) -> Self {
        Self {
            cfg,
            state: RotationState::default(),
            drag: InertiaTracker::new(cfg.inertia),
            scroll: InertiaTracker::new(cfg.inertia),
            sampler: SignalSampler::new(),
            dragging: false,
        }
    }

    pub fn with_config(cfg: RotationConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, now_ms: f64) {
        self.drag.grab();
        self.drag.sample(Vec2::new(x, y), now_ms);
        self.dragging = true;
        log::debug!("[logo] grab at ({:.0},{:.0})", x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, now_ms: f64) {
        if self.dragging {
            self.drag.sample(Vec2::new(x, y), now_ms);
        }
    }

    pub fn pointer_up(&mut self) {
        self.release();
    }

    /// Same transition as `pointer_up`; a lost capture must not leave the
    /// drag running.
    pub fn capture_lost(&mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.drag.release();
        let v = self.drag.velocity();
        log::debug!("[logo] release v=({:.2},{:.2})", v.x, v.y);
    }

    pub fn on_scroll(&mut self, scroll_y_px: f32, now_ms: f64) {
        self.sampler.on_scroll(scroll_y_px, now_ms);
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// No drag in progress and no residual momentum.
    pub fn is_idle(&self) -> bool {
        !self.dragging && self.drag.is_settled() && self.scroll.is_settled()
    }

    #[inline]
    pub fn state(&self) -> RotationState {
        self.state
    }

    #[inline]
    pub fn drag_velocity(&self) -> Vec2 {
        self.drag.velocity()
    }
}

impl Animation for LogoRotation {
    type Frame = RotationState;

    fn tick(&mut self, dt_sec: f32) -> RotationState {
        let frames = frames_for(dt_sec);

        let seed = self.sampler.take_scroll_seed();
        if seed != 0.0 {
            self.scroll.blend(Vec2::new(seed, 0.0));
        }

        let d = self.drag.advance(frames) * self.cfg.drag_sensitivity;
        self.state.ry += d.x;
        self.state.rx += d.y;

        let s = self.scroll.advance(frames).x * self.cfg.scroll_sensitivity;
        self.state.rx += s;
        self.state.rz += s * self.cfg.scroll_roll_factor;

        if self.is_idle() {
            self.state.ry += self.cfg.idle_spin_per_frame * frames;
            let k = rate_for(self.cfg.recenter_smoothing, frames);
            self.state.rx = approach(self.state.rx, 0.0, k);
            self.state.rz = approach(self.state.rz, 0.0, k);
        }
        self.state.ry = self.state.ry.rem_euclid(TAU);
        self.state
    }

    fn reset(&mut self) {
        self.state = RotationState::default();
        self.drag.reset();
        self.scroll.reset();
        self.sampler.reset();
        self.dragging = false;
    }
}
