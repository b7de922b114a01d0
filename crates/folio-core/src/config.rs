//! Tuning bundles for each component.
//!
//! Every struct defaults to the values in [`crate::constants`]. Custom values
//! go through `validate()` before a component accepts them.

use crate::constants::*;
use crate::error::ConfigError;

pub(crate) fn check_smoothing(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::SmoothingOutOfRange { name, value })
    }
}

fn check_damping(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.85..0.98).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::DampingOutOfRange { name, value })
    }
}

fn check_ratio(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RatioOutOfRange { name, value })
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn check_order(
    low_name: &'static str,
    low: f32,
    high_name: &'static str,
    high: f32,
) -> Result<(), ConfigError> {
    if low <= high {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange {
            low_name,
            low,
            high_name,
            high,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaConfig {
    pub blend_ratio: f32,
    pub damping: f32,
    pub epsilon: f32,
    pub grab_damping: f32,
    pub max_speed: f32,
}

impl Default for InertiaConfig {
    fn default() -> Self {
        Self {
            blend_ratio: VELOCITY_BLEND_RATIO,
            damping: INERTIA_DAMPING,
            epsilon: VELOCITY_EPSILON,
            grab_damping: GRAB_DAMPING,
            max_speed: MAX_SPEED_PX_PER_FRAME,
        }
    }
}

impl InertiaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ratio("blend_ratio", self.blend_ratio)?;
        check_damping("damping", self.damping)?;
        check_positive("epsilon", self.epsilon)?;
        check_ratio("grab_damping", self.grab_damping)?;
        check_positive("max_speed", self.max_speed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverConfig {
    pub rest_size: f32,
    pub hover_size: f32,
    pub smoothing: f32,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            rest_size: DOT_REST_SIZE,
            hover_size: DOT_HOVER_SIZE,
            smoothing: HOVER_SMOOTHING,
        }
    }
}

impl HoverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("rest_size", self.rest_size)?;
        check_positive("hover_size", self.hover_size)?;
        check_smoothing("hover smoothing", self.smoothing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorConfig {
    pub dot_smoothing: f32,
    pub ring_smoothing: f32,
    pub hover: HoverConfig,
    pub ring_rest_size: f32,
    pub ring_hover_size: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            dot_smoothing: DOT_SMOOTHING,
            ring_smoothing: RING_SMOOTHING,
            hover: HoverConfig::default(),
            ring_rest_size: RING_REST_SIZE,
            ring_hover_size: RING_HOVER_SIZE,
        }
    }
}

impl CursorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_smoothing("dot_smoothing", self.dot_smoothing)?;
        check_smoothing("ring_smoothing", self.ring_smoothing)?;
        self.hover.validate()?;
        check_positive("ring_rest_size", self.ring_rest_size)?;
        check_positive("ring_hover_size", self.ring_hover_size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationConfig {
    pub inertia: InertiaConfig,
    pub drag_sensitivity: f32,
    pub scroll_sensitivity: f32,
    pub scroll_roll_factor: f32,
    pub idle_spin_per_frame: f32,
    pub recenter_smoothing: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            inertia: InertiaConfig::default(),
            drag_sensitivity: DRAG_SENSITIVITY,
            scroll_sensitivity: SCROLL_SENSITIVITY,
            scroll_roll_factor: SCROLL_ROLL_FACTOR,
            idle_spin_per_frame: IDLE_SPIN_PER_FRAME,
            recenter_smoothing: RECENTER_SMOOTHING,
        }
    }
}

impl RotationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.inertia.validate()?;
        check_positive("drag_sensitivity", self.drag_sensitivity)?;
        check_positive("scroll_sensitivity", self.scroll_sensitivity)?;
        check_ratio("scroll_roll_factor", self.scroll_roll_factor)?;
        // zero spin is allowed: a logo that rests when idle
        if !self.idle_spin_per_frame.is_finite() {
            return Err(ConfigError::NotPositive {
                name: "idle_spin_per_frame",
                value: self.idle_spin_per_frame,
            });
        }
        check_smoothing("recenter_smoothing", self.recenter_smoothing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_dampening: f32,
    pub pull: f32,
    pub max_move: f32,
    pub rotation_deg_per_px: f32,
    pub attract_smoothing: f32,
    pub release_smoothing: f32,
    pub fill_smoothing: f32,
    pub fill_hidden_scale: f32,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            min_distance: MAGNET_MIN_DISTANCE,
            max_distance: MAGNET_MAX_DISTANCE,
            min_dampening: MAGNET_MIN_DAMPENING,
            pull: MAGNET_PULL,
            max_move: MAGNET_MAX_MOVE,
            rotation_deg_per_px: MAGNET_ROTATION_DEG_PER_PX,
            attract_smoothing: MAGNET_ATTRACT_SMOOTHING,
            release_smoothing: MAGNET_RELEASE_SMOOTHING,
            fill_smoothing: MAGNET_FILL_SMOOTHING,
            fill_hidden_scale: MAGNET_FILL_HIDDEN_SCALE,
        }
    }
}

impl MagneticConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("min_distance", self.min_distance)?;
        check_positive("max_distance", self.max_distance)?;
        check_order(
            "min_distance",
            self.min_distance,
            "max_distance",
            self.max_distance,
        )?;
        check_ratio("min_dampening", self.min_dampening)?;
        check_positive("pull", self.pull)?;
        check_positive("max_move", self.max_move)?;
        check_smoothing("attract_smoothing", self.attract_smoothing)?;
        check_smoothing("release_smoothing", self.release_smoothing)?;
        check_smoothing("fill_smoothing", self.fill_smoothing)?;
        check_ratio("fill_hidden_scale", self.fill_hidden_scale)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoaderConfig {
    pub step_per_frame: f32,
    pub hold_ms: f32,
    pub pause_chance: f64,
    pub pause_min_ms: f32,
    pub pause_max_ms: f32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            step_per_frame: LOADER_STEP_PER_FRAME,
            hold_ms: LOADER_HOLD_MS,
            pause_chance: LOADER_PAUSE_CHANCE,
            pause_min_ms: LOADER_PAUSE_MIN_MS,
            pause_max_ms: LOADER_PAUSE_MAX_MS,
        }
    }
}

impl LoaderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("step_per_frame", self.step_per_frame)?;
        if !(self.hold_ms.is_finite() && self.hold_ms >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "hold_ms",
                value: self.hold_ms,
            });
        }
        check_ratio("pause_chance", self.pause_chance as f32)?;
        check_positive("pause_min_ms", self.pause_min_ms)?;
        check_order(
            "pause_min_ms",
            self.pause_min_ms,
            "pause_max_ms",
            self.pause_max_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(InertiaConfig::default().validate().is_ok());
        assert!(CursorConfig::default().validate().is_ok());
        assert!(RotationConfig::default().validate().is_ok());
        assert!(MagneticConfig::default().validate().is_ok());
        assert!(LoaderConfig::default().validate().is_ok());
    }

    #[test]
    fn smoothing_bounds_are_exclusive() {
        let mut cfg = CursorConfig::default();
        cfg.dot_smoothing = 1.0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::SmoothingOutOfRange {
                name: "dot_smoothing",
                value: 1.0
            })
        );
        cfg.dot_smoothing = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn damping_must_stay_in_band() {
        let cfg = InertiaConfig {
            damping: 0.99,
            ..InertiaConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DampingOutOfRange { .. })
        ));
    }

    #[test]
    fn magnet_radii_must_be_ordered() {
        let cfg = MagneticConfig {
            min_distance: 0.6,
            ..MagneticConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvertedRange { .. })
        ));
    }
}
