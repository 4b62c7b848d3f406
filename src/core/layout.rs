use super::constants::{
    DIST_MAX, DIST_MIN, DIST_WIDTH_DIVISOR, MIN_TOTAL_POINTS, POINT_SAMPLE_SPAN, POINT_SPACING_PX,
};
use glam::DVec2;
use rand::Rng;

/// Logical (CSS px) viewport size plus the device pixel scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width: sanitize_len(width),
            height: sanitize_len(height),
            scale: pick_scale(scale),
        }
    }
}

/// Derived layout: recomputed as a whole whenever the viewport changes, so
/// `total_points` and `dist` always match `viewport.width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub viewport: Viewport,
    pub total_points: usize,
    pub dist: f64,
}

impl Layout {
    pub fn compute<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            viewport,
            total_points: total_points_for(viewport.width, rng.gen::<f64>()),
            dist: dist_for(viewport.width),
        }
    }

    /// Pixel-buffer size: logical size times device scale, at least 1x1.
    pub fn buffer_size(&self) -> (u32, u32) {
        let v = &self.viewport;
        let w = (v.width * v.scale).round().max(1.0) as u32;
        let h = (v.height * v.scale).round().max(1.0) as u32;
        (w, h)
    }

    pub fn extent(&self) -> DVec2 {
        let (w, h) = self.buffer_size();
        DVec2::new(w as f64, h as f64)
    }
}

/// Row point count for a logical `width`, from a uniform `sample` in `[0, 1)`.
///
/// Always at least 16. Also at most `width / 35` once the viewport is wide
/// enough for that bound to exceed 16; narrower viewports stay at 16.
pub fn total_points_for(width: f64, sample: f64) -> usize {
    let upper = (sanitize_len(width) / POINT_SPACING_PX)
        .floor()
        .max(MIN_TOTAL_POINTS as f64);
    let raw = (sample.clamp(0.0, 1.0) * POINT_SAMPLE_SPAN).powi(2);
    raw.round().clamp(MIN_TOTAL_POINTS as f64, upper) as usize
}

/// Interaction radius for a logical `width`, clamped to `[150, 200]`.
pub fn dist_for(width: f64) -> f64 {
    (sanitize_len(width) / DIST_WIDTH_DIVISOR).clamp(DIST_MIN, DIST_MAX)
}

/// Device pixel scale, falling back to 1 for missing or nonsense ratios.
pub fn pick_scale(device_ratio: f64) -> f64 {
    if device_ratio.is_finite() && device_ratio > 0.0 {
        device_ratio
    } else {
        1.0
    }
}

#[inline]
fn sanitize_len(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}
