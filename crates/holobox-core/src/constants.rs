// Tuning constants for the perspective filter and stacking rule.

// Smoothing
pub const SMOOTHING_FACTOR: f64 = 0.1; // fraction of the remaining distance covered per tick
pub const TICK_RATE_HZ: f64 = 30.0;

// Stacking thresholds (percent of viewport width)
pub const LEFT_WALL_THRESHOLD: f64 = 25.0; // below this the left wall is lifted
pub const RIGHT_WALL_THRESHOLD: f64 = 75.0; // above this the right wall is lifted

// Accelerometer mapping: gravity components are expected in [-GRAVITY_SPAN, GRAVITY_SPAN]
pub const GRAVITY_SPAN: f64 = 5.0;

// screen.orientation.angle reports a counter-clockwise quarter turn as 270
pub const SCREEN_ANGLE_COUNTER_CLOCKWISE: u16 = 270;

// Only a real mouse steers the box; touch drags would fight the accelerometer
pub const TRACKED_POINTER_TYPE: &str = "mouse";

// Keys accepted by `HoloboxConfig::with_overrides`
pub const CONFIG_KEYS: [&str; 5] = [
    "smoothing",
    "tick-hz",
    "left-threshold",
    "right-threshold",
    "gravity-span",
];

// Resting perspective origin, centre of the box
pub const INITIAL_PERSPECTIVE: [f64; 2] = [50.0, 50.0];

// Emit a tick-rate debug line every this many ticks
pub const STATS_LOG_EVERY_TICKS: u64 = 300;
