//! Perspective-origin state and the input mappings that feed it.
//!
//! All positions are percentages across the viewport. Targets are written by
//! the input mappings, the current value only by [`PerspectiveState::step`].

use crate::constants::{INITIAL_PERSPECTIVE, TRACKED_POINTER_TYPE};
use crate::orientation::OrientationMode;
use glam::{DVec2, DVec3};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveState {
    pub current: DVec2,
    pub target: DVec2,
}

impl Default for PerspectiveState {
    fn default() -> Self {
        let centre = DVec2::from_array(INITIAL_PERSPECTIVE);
        Self {
            current: centre,
            target: centre,
        }
    }
}

impl PerspectiveState {
    pub fn new(current: DVec2, target: DVec2) -> Self {
        Self { current, target }
    }

    /// First-order low-pass: move `current` by `alpha` of the remaining distance.
    #[inline]
    pub fn step(&mut self, alpha: f64) {
        self.current += (self.target - self.current) * alpha;
    }

    #[inline]
    pub fn set_target(&mut self, target: DVec2) {
        self.target = target;
    }

    #[inline]
    pub fn origin(&self) -> PerspectiveOrigin {
        PerspectiveOrigin {
            x: self.current.x,
            y: self.current.y,
        }
    }
}

/// Value published to the render surface each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerspectiveOrigin {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for PerspectiveOrigin {
    // CSS `perspective-origin` form, e.g. "63% 41%"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}%", self.x, self.y)
    }
}

// Half-up rounding, so 49.5 -> 50 and -0.5 -> 0
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Whether pointer events of this `pointerType` should move the target.
#[inline]
pub fn tracks_pointer(pointer_type: &str) -> bool {
    pointer_type == TRACKED_POINTER_TYPE
}

/// Target for a pointer at (`x`, `y`) in a viewport of the given size.
///
/// Returns `None` when the viewport has no area; the caller keeps its
/// previous target in that case. No clamping is applied.
pub fn pointer_target(x: f64, y: f64, viewport_w: f64, viewport_h: f64) -> Option<DVec2> {
    let valid = |d: f64| d.is_finite() && d > 0.0;
    if !valid(viewport_w) || !valid(viewport_h) || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(DVec2::new(
        round_half_up(100.0 * x / viewport_w),
        round_half_up(100.0 * y / viewport_h),
    ))
}

/// Target for a gravity-inclusive acceleration sample.
///
/// `gravity_span` is the magnitude that sweeps the full box (5 by default).
/// The vertical axis reads `-z` in both modes; only the horizontal axis
/// follows the orientation. Results are not clamped to [0, 100].
pub fn motion_target(accel: DVec3, mode: OrientationMode, gravity_span: f64) -> Option<DVec2> {
    if !accel.is_finite() {
        return None;
    }
    // TODO: confirm whether beta should read -y/-x by mode like gamma does
    let beta = -accel.z;
    let gamma = if mode.is_landscape() {
        -accel.y
    } else {
        -accel.x
    };
    Some(DVec2::new(
        ((gamma / gravity_span) + 0.5) * 100.0,
        ((beta / gravity_span) - 0.5) * 100.0,
    ))
}

/// Assemble a gravity vector from a sensor reading whose axes may be absent.
pub fn gravity_vector(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Option<DVec3> {
    Some(DVec3::new(x?, y?, z?))
}
