// DOM element ids the front-end binds to. The host page provides them.

pub const CANVAS_ID: &str = "heart-canvas";
pub const FATAL_ID: &str = "fatal-error";

// Overlay
pub const OVERLAY_ID: &str = "sorry-overlay";
pub const OVERLAY_FORGIVE_ID: &str = "overlay-forgive";
pub const OVERLAY_CLOSE_ID: &str = "overlay-close";

// Control surface
pub const PLAY_PAUSE_ID: &str = "play-pause";
pub const SPEED_SLIDER_ID: &str = "speed-slider";
pub const SPEED_VALUE_ID: &str = "speed-value";

pub const LABEL_PAUSE: &str = "Pause";
pub const LABEL_PLAY: &str = "Play";
