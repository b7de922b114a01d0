//! Two-state hover tracking for elements tagged as interactive, plus the
//! eased size that the cursor renders from it.
//!
//! Targets may nest (a marked link inside a marked card). The browser only
//! sends a leave for the element actually left, so the detector keeps every
//! entered target and stays hovering until all of them are left.

use crate::config::HoverConfig;
use crate::error::ConfigError;
use crate::follower::{approach, frames_for, rate_for};
use fnv::FnvHashSet;

/// Host-assigned handle for one bound element.
pub type TargetId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HoverPhase {
    #[default]
    Idle,
    Hovering(TargetId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverState {
    pub is_hovering: bool,
    pub current_scale: f32,
}

#[derive(Clone, Debug)]
pub struct HoverDetector {
    cfg: HoverConfig,
    bound: FnvHashSet<TargetId>,
    // entered and not yet left, innermost last
    entered: Vec<TargetId>,
    scale: f32,
}

impl Default for HoverDetector {
    fn default() -> Self {
        Self::new(HoverConfig::default())
    }
}

impl HoverDetector {
    pub(crate) fn new(cfg: HoverConfig) -> Self {
        Self {
            cfg,
            bound: FnvHashSet::default(),
            entered: Vec::new(),
            scale: cfg.rest_size,
        }
    }

    pub fn with_config(cfg: HoverConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    /// Replace the bound set after the interactive elements changed. Hovers
    /// on elements that are gone are dropped.
    pub fn resync<I: IntoIterator<Item = TargetId>>(&mut self, ids: I) {
        self.bound = ids.into_iter().collect();
        let bound = &self.bound;
        let before = self.entered.len();
        self.entered.retain(|id| bound.contains(id));
        if self.entered.len() != before {
            log::debug!(
                "[hover] {} hovered targets unbound",
                before - self.entered.len()
            );
        }
    }

    #[inline]
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    #[inline]
    pub fn is_bound(&self, id: TargetId) -> bool {
        self.bound.contains(&id)
    }

    /// Returns `true` when the phase changed.
    pub fn enter(&mut self, id: TargetId) -> bool {
        if !self.bound.contains(&id) {
            return false;
        }
        let before = self.phase();
        self.entered.retain(|&e| e != id);
        self.entered.push(id);
        log::debug!("[hover] enter {} (depth {})", id, self.entered.len());
        self.phase() != before
    }

    /// Leaving an inner target falls back to the enclosing one, if any.
    pub fn leave(&mut self, id: TargetId) -> bool {
        if !self.bound.contains(&id) {
            return false;
        }
        let before = self.phase();
        self.entered.retain(|&e| e != id);
        let after = self.phase();
        if after == HoverPhase::Idle && before != after {
            log::debug!("[hover] idle");
        }
        after != before
    }

    /// Losing pointer capture counts as leaving everything.
    pub fn capture_lost(&mut self) -> bool {
        self.to_idle()
    }

    /// Route change: nothing from the previous page may stay hovered.
    pub fn navigate(&mut self) -> bool {
        self.to_idle()
    }

    fn to_idle(&mut self) -> bool {
        if self.entered.is_empty() {
            return false;
        }
        log::debug!("[hover] idle");
        self.entered.clear();
        true
    }

    #[inline]
    pub fn phase(&self) -> HoverPhase {
        match self.entered.last() {
            Some(&id) => HoverPhase::Hovering(id),
            None => HoverPhase::Idle,
        }
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        !self.entered.is_empty()
    }

    pub fn target_size(&self) -> f32 {
        if self.is_hovering() {
            self.cfg.hover_size
        } else {
            self.cfg.rest_size
        }
    }

    pub fn tick(&mut self, dt_sec: f32) -> f32 {
        let k = rate_for(self.cfg.smoothing, frames_for(dt_sec));
        self.scale = approach(self.scale, self.target_size(), k);
        self.scale
    }

    #[inline]
    pub fn current_scale(&self) -> f32 {
        self.scale
    }

    /// Position of the scale between rest (0) and hover (1).
    pub fn blend(&self) -> f32 {
        let span = self.cfg.hover_size - self.cfg.rest_size;
        if span.abs() < f32::EPSILON {
            return 0.0;
        }
        ((self.scale - self.cfg.rest_size) / span).clamp(0.0, 1.0)
    }

    pub fn state(&self) -> HoverState {
        HoverState {
            is_hovering: self.is_hovering(),
            current_scale: self.scale,
        }
    }

    pub fn reset(&mut self) {
        self.bound.clear();
        self.entered.clear();
        self.scale = self.cfg.rest_size;
    }
}
