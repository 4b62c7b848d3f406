// Shared layout and motion tuning constants for the wave field.

// Row layout: baseline fractions of the surface height, first row lowest on screen.
pub const ROW_BASELINES: [f64; 4] = [4.0 / 5.0, 3.0 / 5.0, 2.0 / 5.0, 1.0 / 5.0];

// Point density
pub const MIN_TOTAL_POINTS: usize = 16;
pub const POINT_SPACING_PX: f64 = 35.0; // widest allowed gap between points, logical px
pub const POINT_SAMPLE_SPAN: f64 = 8.0; // total = (rand * span)^2 before clamping

// Interaction radius
pub const DIST_WIDTH_DIVISOR: f64 = 4.0;
pub const DIST_MIN: f64 = 150.0;
pub const DIST_MAX: f64 = 200.0;

// Wobble impulse: (rand - 0.5) * dist * WOBBLE_SPAN, i.e. within +-0.3 * dist
pub const WOBBLE_SPAN: f64 = 0.6;

// Point motion, per frame, logical px
pub const SPRING_STIFFNESS: f64 = 0.1; // pull back toward the baseline
pub const VELOCITY_DAMPING: f64 = 0.95; // multiplier applied to vy each frame
pub const VELOCITY_SCALE: f64 = 0.1; // px of travel per unit of vy
pub const POINTER_PUSH: f64 = 2.0; // peak push at zero distance from the pointer
pub const REST_VELOCITY: f64 = 0.01; // below this every point counts as settled

// Resize debounce quiet period
pub const RESIZE_QUIET_MS: u32 = 300;

// Palette tuples: background + one color per row
pub const PALETTE_LEN: usize = 5;
