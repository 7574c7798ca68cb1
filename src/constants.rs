// Page wiring shared by the web front-end.

// Element carrying `perspective-origin`; surfaces use `Surface::element_id`
pub const WORLD_ELEMENT_ID: &str = "world";

// Style properties written every tick
pub const PERSPECTIVE_ORIGIN_PROPS: [&str; 2] =
    ["perspective-origin", "-webkit-perspective-origin"];
pub const Z_INDEX_PROP: &str = "z-index";

// Input events
pub const POINTER_MOVE_EVENT: &str = "pointermove";
pub const ORIENTATION_CHANGE_EVENT: &str = "orientationchange";
pub const DEVICE_MOTION_EVENT: &str = "devicemotion";

// Config overrides read from `#world`, e.g. data-holobox-smoothing="0.2"
pub const DATA_ATTR_PREFIX: &str = "data-holobox-";
