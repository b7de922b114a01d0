//! Loading-screen counter: eased progress to 100 with the odd random stall,
//! a short hold, then the screen slides away.

use crate::animation::Animation;
use crate::config::LoaderConfig;
use crate::constants::{FRAME_MS, LOADER_TARGET};
use crate::error::ConfigError;
use crate::follower::frames_for;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Loading,
    /// Reached 100; waiting before the exit slide.
    Holding,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderFrame {
    pub percent: u8,
    pub phase: LoaderPhase,
    pub paused: bool,
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Debug)]
pub struct LoadingProgress {
    cfg: LoaderConfig,
    seed: u64,
    rng: StdRng,
    raw: f32,
    pause_left_ms: f32,
    held_ms: f32,
    percent: u8,
    phase: LoaderPhase,
}

impl LoadingProgress {
    pub fn new(seed: u64) -> Self {
        Self::build(LoaderConfig::default(), seed)
    }

    pub fn with_config(cfg: LoaderConfig, seed: u64) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self::build(cfg, seed))
    }

    fn build(cfg: LoaderConfig, seed: u64) -> Self {
        Self {
            cfg,
            seed,
            rng: StdRng::seed_from_u64(seed),
            raw: 0.0,
            pause_left_ms: 0.0,
            held_ms: 0.0,
            percent: 0,
            phase: LoaderPhase::Loading,
        }
    }

    #[inline]
    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    #[inline]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    fn frame(&self) -> LoaderFrame {
        LoaderFrame {
            percent: self.percent,
            phase: self.phase,
            paused: self.pause_left_ms > 0.0,
        }
    }

    fn advance_loading(&mut self, frames: f32) {
        if self.pause_left_ms > 0.0 {
            self.pause_left_ms = (self.pause_left_ms - frames * FRAME_MS).max(0.0);
            return;
        }
        let chance = (self.cfg.pause_chance * frames as f64).clamp(0.0, 1.0);
        if chance > 0.0 && self.rng.gen_bool(chance) {
            self.pause_left_ms = self
                .rng
                .gen_range(self.cfg.pause_min_ms..=self.cfg.pause_max_ms);
            log::debug!("[loader] stall {:.0}ms at {}%", self.pause_left_ms, self.percent);
            return;
        }

        self.raw += self.cfg.step_per_frame * frames;
        let t = (self.raw / LOADER_TARGET).min(1.0);
        if t >= 1.0 - 1e-5 {
            self.percent = LOADER_TARGET as u8;
            self.phase = LoaderPhase::Holding;
            self.held_ms = 0.0;
            log::debug!("[loader] complete");
        } else {
            let eased = LOADER_TARGET * ease_out_cubic(t);
            self.percent = (eased.floor() as u8).min(LOADER_TARGET as u8);
        }
    }
}

impl Animation for LoadingProgress {
    type Frame = LoaderFrame;

    fn tick(&mut self, dt_sec: f32) -> LoaderFrame {
        let frames = frames_for(dt_sec);
        match self.phase {
            LoaderPhase::Loading => self.advance_loading(frames),
            LoaderPhase::Holding => {
                self.held_ms += frames * FRAME_MS;
                if self.held_ms >= self.cfg.hold_ms {
                    self.phase = LoaderPhase::Hidden;
                    log::debug!("[loader] hidden");
                }
            }
            LoaderPhase::Hidden => {}
        }
        self.frame()
    }

    fn reset(&mut self) {
        *self = Self::build(self.cfg, self.seed);
    }
}
