//! Buttons that lean toward a nearby pointer and spring back when it leaves,
//! plus the background fill that slides in from the side the pointer crossed.

use crate::animation::Animation;
use crate::config::MagneticConfig;
use crate::constants::MAGNET_FILL_EDGE_PCT;
use crate::error::ConfigError;
use crate::follower::{approach, frames_for, rate_for};
use glam::Vec2;

/// Element bounds in viewport px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MagneticFrame {
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub active: bool,
}

#[derive(Clone, Debug)]
pub struct MagneticPull {
    cfg: MagneticConfig,
    active: bool,
    target: Vec2,
    target_rotation: f32,
    offset: Vec2,
    rotation: f32,
}

impl Default for MagneticPull {
    fn default() -> Self {
        Self::new(MagneticConfig::default())
    }
}

impl MagneticPull {
    fn new(cfg: MagneticConfig) -> Self {
        Self {
            cfg,
            active: false,
            target: Vec2::ZERO,
            target_rotation: 0.0,
            offset: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    pub fn with_config(cfg: MagneticConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    /// Radius around the center inside which the pull holds. It is wider
    /// once engaged so the button does not flicker at the edge.
    pub fn threshold(&self, rect: &Rect) -> f32 {
        let factor = if self.active {
            self.cfg.max_distance
        } else {
            self.cfg.min_distance
        };
        rect.width * factor
    }

    pub fn on_pointer_move(&mut self, pointer: Vec2, rect: &Rect) {
        let delta = pointer - rect.center();
        let distance = delta.length();
        let threshold = self.threshold(rect);

        if distance < threshold {
            if !self.active {
                log::debug!("[magnetic] engage d={:.1} t={:.1}", distance, threshold);
            }
            self.active = true;
            let dampening = (1.0 - distance / threshold).max(self.cfg.min_dampening);
            let max_move = rect.width * self.cfg.max_move;
            let moved = (delta * dampening * self.cfg.pull)
                .clamp(Vec2::splat(-max_move), Vec2::splat(max_move));
            self.target = moved;
            self.target_rotation = moved.x * self.cfg.rotation_deg_per_px;
        } else if self.active {
            log::debug!("[magnetic] release");
            self.active = false;
            self.target = Vec2::ZERO;
            self.target_rotation = 0.0;
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }
}

impl Animation for MagneticPull {
    type Frame = MagneticFrame;

    fn tick(&mut self, dt_sec: f32) -> MagneticFrame {
        let smoothing = if self.active {
            self.cfg.attract_smoothing
        } else {
            self.cfg.release_smoothing
        };
        let k = rate_for(smoothing, frames_for(dt_sec));
        self.offset += (self.target - self.offset) * k;
        self.rotation = approach(self.rotation, self.target_rotation, k);
        MagneticFrame {
            offset: self.offset,
            rotation_deg: self.rotation,
            active: self.active,
        }
    }

    fn reset(&mut self) {
        *self = Self::new(self.cfg);
    }
}

/// Where the fill sits on the button box the pointer crossed, as a
/// `left`/`top` offset in percent. `delta` is the pointer offset from the
/// button center; a pointer exactly on the center maps to the right edge.
pub fn approach_edge(delta: Vec2) -> Vec2 {
    let angle = delta.y.atan2(delta.x);
    Vec2::new(angle.cos(), angle.sin()) * MAGNET_FILL_EDGE_PCT
}

/// Transform origin under the pointer, in percent of the box.
pub fn pointer_origin(delta: Vec2, rect: &Rect) -> Vec2 {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Vec2::splat(50.0);
    }
    Vec2::new(
        50.0 + delta.x / rect.width * 50.0,
        50.0 + delta.y / rect.height * 50.0,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillFrame {
    pub offset_pct: Vec2,
    pub opacity: f32,
    pub scale: f32,
    pub origin_pct: Vec2,
}

impl FillFrame {
    fn hidden(at: Vec2, scale: f32, origin_pct: Vec2) -> Self {
        Self {
            offset_pct: at,
            opacity: 0.0,
            scale,
            origin_pct,
        }
    }

    fn shown() -> Self {
        Self {
            offset_pct: Vec2::ZERO,
            opacity: 1.0,
            scale: 1.0,
            origin_pct: Vec2::splat(50.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MagneticFill {
    cfg: MagneticConfig,
    inside: bool,
    target: FillFrame,
    current: FillFrame,
}

impl Default for MagneticFill {
    fn default() -> Self {
        Self::new(MagneticConfig::default())
    }
}

impl MagneticFill {
    fn new(cfg: MagneticConfig) -> Self {
        let rest = FillFrame::hidden(Vec2::ZERO, cfg.fill_hidden_scale, Vec2::splat(50.0));
        Self {
            cfg,
            inside: false,
            target: rest,
            current: rest,
        }
    }

    pub fn with_config(cfg: MagneticConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    /// Pointer crossed into the button. A fill that has fully faded out
    /// restarts from the entry edge; one still visible eases from where it is.
    pub fn on_enter(&mut self, pointer: Vec2, rect: &Rect) {
        let delta = pointer - rect.center();
        if self.current.opacity < 0.01 {
            self.current = FillFrame::hidden(
                approach_edge(delta),
                self.cfg.fill_hidden_scale,
                Vec2::splat(50.0),
            );
        }
        self.target = FillFrame::shown();
        self.inside = true;
    }

    /// Pointer left the button: fade out toward the exit edge, shrinking
    /// around the exit point.
    pub fn on_leave(&mut self, pointer: Vec2, rect: &Rect) {
        let delta = pointer - rect.center();
        self.target = FillFrame::hidden(
            approach_edge(delta),
            self.cfg.fill_hidden_scale,
            pointer_origin(delta, rect),
        );
        self.inside = false;
    }

    #[inline]
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    #[inline]
    pub fn target(&self) -> FillFrame {
        self.target
    }
}

impl Animation for MagneticFill {
    type Frame = FillFrame;

    fn tick(&mut self, dt_sec: f32) -> FillFrame {
        let k = rate_for(self.cfg.fill_smoothing, frames_for(dt_sec));
        let t = self.target;
        let c = &mut self.current;
        c.offset_pct += (t.offset_pct - c.offset_pct) * k;
        c.opacity = approach(c.opacity, t.opacity, k);
        c.scale = approach(c.scale, t.scale, k);
        c.origin_pct = t.origin_pct;
        *c
    }

    fn reset(&mut self) {
        *self = Self::new(self.cfg);
    }
}


#[cfg(test)]
mod fill_tests {
    use super::*;
    use crate::constants::*;

    const FRAME: f32 = 1.0 / REFERENCE_FPS;

    fn button() -> Rect {
        Rect::new(100.0, 100.0, 200.0, 60.0)
    }

    fn settle(fill: &mut MagneticFill) -> FillFrame {
        let mut f = fill.tick(FRAME);
        for _ in 0..400 {
            f = fill.tick(FRAME);
        }
        f
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-2
    }

    #[test]
    fn edge_follows_approach_angle() {
        assert!(close(approach_edge(Vec2::new(-40.0, 0.0)), Vec2::new(-100.0, 0.0)));
        assert!(close(approach_edge(Vec2::new(0.0, 12.0)), Vec2::new(0.0, 100.0)));
        let diag = std::f32::consts::FRAC_1_SQRT_2 * 100.0;
        assert!(close(approach_edge(Vec2::new(-5.0, -5.0)), Vec2::new(-diag, -diag)));
        // distance does not matter, only direction
        assert!(close(
            approach_edge(Vec2::new(3.0, 4.0)),
            approach_edge(Vec2::new(300.0, 400.0))
        ));
        assert!(close(approach_edge(Vec2::ZERO), Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn origin_tracks_exit_point() {
        let r = button();
        assert!(close(pointer_origin(Vec2::ZERO, &r), Vec2::splat(50.0)));
        // right edge, top edge
        assert!(close(pointer_origin(Vec2::new(100.0, -30.0), &r), Vec2::new(75.0, 25.0)));
        let empty = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert!(close(pointer_origin(Vec2::new(5.0, 5.0), &empty), Vec2::splat(50.0)));
    }

    #[test]
    fn enter_slides_in_from_entry_side() {
        let mut fill = MagneticFill::default();
        // enters through the left edge; center is (200, 130)
        fill.on_enter(Vec2::new(100.0, 130.0), &button());
        let first = fill.tick(FRAME);
        assert!(first.offset_pct.x < -80.0 && first.offset_pct.x > -100.0);
        assert!(first.opacity > 0.0 && first.opacity < 0.2);
        assert!(first.scale > MAGNET_FILL_HIDDEN_SCALE && first.scale < 1.0);

        let f = settle(&mut fill);
        assert!(close(f.offset_pct, Vec2::ZERO));
        assert!((f.opacity - 1.0).abs() < 1e-3);
        assert!((f.scale - 1.0).abs() < 1e-3);
        assert!(close(f.origin_pct, Vec2::splat(50.0)));
    }

    #[test]
    fn leave_exits_toward_exit_side() {
        let mut fill = MagneticFill::default();
        fill.on_enter(Vec2::new(100.0, 130.0), &button());
        settle(&mut fill);
        // leaves through the bottom edge
        fill.on_leave(Vec2::new(200.0, 160.0), &button());
        assert!(!fill.is_inside());
        let f = settle(&mut fill);
        assert!(close(f.offset_pct, Vec2::new(0.0, 100.0)));
        assert!(f.opacity.abs() < 1e-3);
        assert!((f.scale - MAGNET_FILL_HIDDEN_SCALE).abs() < 1e-3);
        assert!(close(f.origin_pct, Vec2::new(50.0, 75.0)));
    }

    #[test]
    fn enter_and_leave_mirror_each_other() {
        // in from the top, out through the top: the fill ends where it started
        let mut fill = MagneticFill::default();
        let top = Vec2::new(200.0, 100.0);
        fill.on_enter(top, &button());
        let start = fill.current;
        settle(&mut fill);
        fill.on_leave(top, &button());
        let end = settle(&mut fill);
        assert!(close(end.offset_pct, start.offset_pct));
        assert!((end.opacity - start.opacity).abs() < 1e-3);
        assert!((end.scale - start.scale).abs() < 1e-3);
    }

    #[test]
    fn reentry_while_visible_does_not_jump() {
        let mut fill = MagneticFill::default();
        fill.on_enter(Vec2::new(100.0, 130.0), &button());
        settle(&mut fill);
        fill.on_leave(Vec2::new(300.0, 130.0), &button());
        let mid = fill.tick(FRAME);
        fill.on_enter(Vec2::new(300.0, 130.0), &button());
        let next = fill.tick(FRAME);
        assert!((next.offset_pct - mid.offset_pct).length() < 20.0);
        assert!(next.opacity >= mid.opacity - 1e-3);
    }

    #[test]
    fn reset_hides_fill() {
        let mut fill = MagneticFill::default();
        fill.on_enter(Vec2::new(100.0, 130.0), &button());
        settle(&mut fill);
        fill.reset();
        assert!(!fill.is_inside());
        assert_eq!(fill.current.opacity, 0.0);
    }
}
