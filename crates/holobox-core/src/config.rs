//! Runtime configuration for the perspective controller.
//!
//! Defaults come from [`crate::constants`]; the web front-end may override
//! individual fields before handing the config to the controller.

use crate::constants::*;
use crate::error::{HoloboxError, Result};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct HoloboxConfig {
    /// Per-tick smoothing factor in (0, 1].
    pub smoothing: f64,
    pub tick_rate_hz: f64,
    pub left_threshold: f64,
    pub right_threshold: f64,
    /// Magnitude of gravity that maps to a full sweep across the box.
    pub gravity_span: f64,
}

impl Default for HoloboxConfig {
    fn default() -> Self {
        Self {
            smoothing: SMOOTHING_FACTOR,
            tick_rate_hz: TICK_RATE_HZ,
            left_threshold: LEFT_WALL_THRESHOLD,
            right_threshold: RIGHT_WALL_THRESHOLD,
            gravity_span: GRAVITY_SPAN,
        }
    }
}

impl HoloboxConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(HoloboxError::InvalidConfig(format!(
                "smoothing must be in (0, 1], got {}",
                self.smoothing
            )));
        }
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            return Err(HoloboxError::InvalidConfig(format!(
                "tick rate must be positive, got {}",
                self.tick_rate_hz
            )));
        }
        if !(self.left_threshold.is_finite() && self.right_threshold.is_finite())
            || self.left_threshold > self.right_threshold
        {
            return Err(HoloboxError::InvalidConfig(format!(
                "wall thresholds out of order: left {} right {}",
                self.left_threshold, self.right_threshold
            )));
        }
        if !(self.gravity_span.is_finite() && self.gravity_span > 0.0) {
            return Err(HoloboxError::InvalidConfig(format!(
                "gravity span must be positive, got {}",
                self.gravity_span
            )));
        }
        Ok(())
    }

    /// Interval between ticks, 1000/30 ms at the default rate.
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate_hz)
    }

    /// Defaults overlaid with `(key, value)` pairs, keys as in [`CONFIG_KEYS`].
    ///
    /// Unknown keys and unparsable values are skipped. A combination that
    /// fails validation falls back to the defaults as a whole.
    pub fn with_overrides<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut cfg = Self::default();
        for (key, raw) in pairs {
            let slot = match key {
                "smoothing" => &mut cfg.smoothing,
                "tick-hz" => &mut cfg.tick_rate_hz,
                "left-threshold" => &mut cfg.left_threshold,
                "right-threshold" => &mut cfg.right_threshold,
                "gravity-span" => &mut cfg.gravity_span,
                _ => {
                    log::warn!("[config] unknown key {:?}", key);
                    continue;
                }
            };
            match raw.trim().parse::<f64>() {
                Ok(v) => *slot = v,
                Err(e) => log::warn!("[config] ignoring {}={:?}: {}", key, raw, e),
            }
        }
        if let Err(e) = cfg.validate() {
            log::warn!("[config] {}; using defaults", e);
            return Self::default();
        }
        cfg
    }

    pub fn thresholds(&self) -> WallThresholds {
        WallThresholds {
            left: self.left_threshold,
            right: self.right_threshold,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallThresholds {
    pub left: f64,
    pub right: f64,
}

impl Default for WallThresholds {
    fn default() -> Self {
        Self {
            left: LEFT_WALL_THRESHOLD,
            right: RIGHT_WALL_THRESHOLD,
        }
    }
}
