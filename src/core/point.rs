use super::constants::{
    POINTER_PUSH, REST_VELOCITY, SPRING_STIFFNESS, VELOCITY_DAMPING, VELOCITY_SCALE,
};
use glam::DVec2;

/// Inputs for one motion step, shared by every point in a row.
#[derive(Clone, Copy, Debug)]
pub struct Motion {
    /// Pixel-buffer size of the drawing surface.
    pub extent: DVec2,
    /// Row baseline as a fraction of the surface height.
    pub baseline: f64,
    /// Interaction radius in logical px.
    pub dist: f64,
    /// Device pixel scale; converts pixel-buffer distances back to logical px.
    pub scale: f64,
    /// Pointer in pixel-buffer coordinates, `None` when it is off the surface.
    pub pointer: Option<DVec2>,
}

/// A single vertex of a row, in row-normalized coordinates.
///
/// `x` spans the surface width on `[0, 1]`, `y` is a fraction of the surface
/// height that starts on the row baseline. `vy` is a velocity accumulator in
/// logical px per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub vy: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, vy: 0.0 }
    }

    /// Position in pixel-buffer coordinates for a surface of size `extent`.
    #[inline]
    pub fn to_pixels(&self, extent: DVec2) -> DVec2 {
        DVec2::new(self.x * extent.x, self.y * extent.y)
    }

    /// Advance one frame and return the new pixel-buffer position.
    ///
    /// Points within `dist` of the pointer are pushed away from it vertically,
    /// harder the closer they are. Every point is pulled back toward the
    /// baseline, and its velocity decays so the row relaxes once the pointer
    /// leaves. `x` is never touched.
    pub fn advance(&mut self, m: &Motion) -> DVec2 {
        let height = m.extent.y;
        if !(height > 0.0 && m.scale > 0.0) {
            return self.to_pixels(m.extent);
        }
        let pos = self.to_pixels(m.extent);

        if let Some(pointer) = m.pointer.filter(|p| p.is_finite()) {
            let delta = pos - pointer;
            let distance = delta.length() / m.scale;
            if distance < m.dist {
                let falloff = 1.0 - distance / m.dist;
                let away = if delta.y >= 0.0 { 1.0 } else { -1.0 };
                self.vy += away * falloff * POINTER_PUSH;
            }
        }

        let offset = (self.y - m.baseline) * height / m.scale;
        self.vy -= offset * SPRING_STIFFNESS;
        self.vy *= VELOCITY_DAMPING;
        self.y += self.vy * VELOCITY_SCALE * m.scale / height;

        self.to_pixels(m.extent)
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.vy.abs() > REST_VELOCITY
    }
}
