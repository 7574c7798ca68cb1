use crate::constants::SCREEN_ANGLE_COUNTER_CLOCKWISE;

/// Which way up the device is held.
///
/// Only used to pick which accelerometer axis drives the horizontal target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrientationMode {
    #[default]
    Portrait,
    Landscape,
}

impl OrientationMode {
    /// Map a reported rotation angle in degrees (0, 90, -90, 180) to a mode.
    pub fn from_rotation(angle_deg: f64) -> Self {
        if angle_deg == 90.0 || angle_deg == -90.0 {
            OrientationMode::Landscape
        } else {
            OrientationMode::Portrait
        }
    }

    /// Mode for a `screen.orientation.angle` reading (0, 90, 180, 270).
    pub fn from_screen_angle(angle: u16) -> Self {
        Self::from_rotation(rotation_from_screen_angle(angle))
    }

    #[inline]
    pub fn is_landscape(self) -> bool {
        matches!(self, OrientationMode::Landscape)
    }
}

/// Fold a `screen.orientation.angle` reading into the -90..180 range that
/// `window.orientation` reports.
pub fn rotation_from_screen_angle(angle: u16) -> f64 {
    if angle == SCREEN_ANGLE_COUNTER_CLOCKWISE {
        -90.0
    } else {
        angle as f64
    }
}
