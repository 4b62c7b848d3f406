// Front-end constants: element ids, event names and the built-in palettes.
// Motion and layout tuning lives in `core/constants.rs`.
pub const DEFAULT_CANVAS_ID: &str = "wave-canvas";

// Largest device pixel ratio the backing store is sized for
pub const MAX_DEVICE_SCALE: f64 = 3.0;

// Window events
pub const EV_RESIZE: &str = "resize";
pub const EV_POINTER_MOVE: &str = "pointermove";
pub const EV_TOUCH_MOVE: &str = "touchmove";
pub const EV_TOUCH_END: &str = "touchend";
pub const EV_TOUCH_CANCEL: &str = "touchcancel";
pub const EV_CLICK: &str = "click";

// Fires on the document element when the pointer leaves the page
pub const EV_MOUSE_LEAVE: &str = "mouseleave";

/// Built-in catalog: background first, then the row colors back to front.
pub const DEFAULT_PALETTES: [[&str; 5]; 8] = [
    ["#f7f3e3", "#e8c547", "#e07a5f", "#3d405b", "#81b29a"],
    ["#0b132b", "#1c2541", "#3a506b", "#5bc0be", "#6fffe9"],
    ["#fff8f0", "#ffd166", "#ef476f", "#118ab2", "#073b4c"],
    ["#edf2f4", "#8d99ae", "#2b2d42", "#ef233c", "#d90429"],
    ["#fefae0", "#dda15e", "#bc6c25", "#606c38", "#283618"],
    ["#f1faee", "#a8dadc", "#457b9d", "#1d3557", "#e63946"],
    ["#fdf0d5", "#c1121f", "#780000", "#003049", "#669bbc"],
    ["#f8f9fa", "#ced4da", "#6c757d", "#343a40", "#212529"],
];
