use super::constants::WOBBLE_SPAN;
use super::point::{Motion, Point};
use super::surface::Surface;
use glam::DVec2;
use rand::Rng;
use smallvec::SmallVec;

/// Per-frame inputs for drawing a row.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Interaction radius in logical px.
    pub dist: f64,
    /// Pointer in pixel-buffer coordinates, `None` when off the surface.
    pub pointer: Option<DVec2>,
    /// Point count the layout currently expects every row to have.
    pub expected_points: usize,
}

/// One horizontal band: a chain of points drawn as a filled wave.
#[derive(Clone, Debug)]
pub struct Row {
    pub baseline: f64,
    pub scale: f64,
    pub point_count: usize,
    pub points: SmallVec<[Point; 32]>,
    pub color: String,
}

impl Row {
    pub fn new(baseline: f64, scale: f64, point_count: usize) -> Self {
        let mut row = Self {
            baseline,
            scale,
            point_count: 0,
            points: SmallVec::new(),
            color: String::new(),
        };
        row.resize(point_count);
        row
    }

    /// Replace the whole chain with `point_count` fresh points on the baseline.
    ///
    /// Points are spaced by `index / (point_count - 3)`, so the last points sit
    /// past the right edge; `draw` pins the curve back to the edge itself.
    /// Chains shorter than four points space by 1 instead.
    pub fn resize(&mut self, point_count: usize) {
        let divisor = point_count.saturating_sub(3).max(1) as f64;
        self.points = (0..point_count)
            .map(|i| Point::new(i as f64 / divisor, self.baseline))
            .collect();
        self.point_count = point_count;
    }

    /// Kick every point except the left anchor with a random vertical impulse
    /// in `[-0.3 * dist, 0.3 * dist)`.
    pub fn wobble<R: Rng + ?Sized>(&mut self, dist: f64, point_count: usize, rng: &mut R) {
        let n = point_count.min(self.points.len());
        for p in self.points.iter_mut().take(n).skip(1) {
            p.vy += (rng.gen::<f64>() - 0.5) * dist * WOBBLE_SPAN;
        }
    }

    pub fn is_moving(&self) -> bool {
        self.points.iter().any(Point::is_moving)
    }

    /// Advance every point one frame and paint the band onto `surface`.
    ///
    /// The path runs right to left: it starts on the right edge, passes
    /// through each point with a smoothing curve, lands on the left edge, then
    /// closes along the bottom of the surface. Returns `false` without touching
    /// the surface when there is nothing consistent to draw.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S, frame: &FrameInput) -> bool {
        let n = self.points.len();
        if n == 0 || !surface.is_drawable() || n != frame.expected_points {
            return false;
        }
        let extent = surface.extent();
        let motion = Motion {
            extent,
            baseline: self.baseline,
            dist: frame.dist,
            scale: self.scale,
            pointer: frame.pointer,
        };

        surface.begin_path();

        let mut prev = if n > 1 {
            self.points[n - 1].advance(&motion)
        } else {
            self.points[0].to_pixels(extent)
        };
        prev.x = extent.x;
        surface.move_to(prev);

        for i in (1..n.saturating_sub(1)).rev() {
            let cur = self.points[i].advance(&motion);
            let next = self.points[i - 1].to_pixels(extent);
            let end = (cur + next) * 0.5;
            quad_to(surface, prev, cur, end);
            prev = end;
        }

        self.points[0].x = 0.0;
        let left = self.points[0].to_pixels(extent);
        quad_to(surface, prev, (prev + left) * 0.5, left);

        surface.line_to(DVec2::new(0.0, extent.y));
        surface.line_to(DVec2::new(extent.x, extent.y));
        surface.close_path();
        surface.fill(&self.color);
        true
    }
}

// Quadratic segment expressed as the equivalent cubic.
#[inline]
fn quad_to<S: Surface + ?Sized>(surface: &mut S, from: DVec2, ctrl: DVec2, to: DVec2) {
    let c1 = from + (ctrl - from) * (2.0 / 3.0);
    let c2 = to + (ctrl - to) * (2.0 / 3.0);
    surface.bezier_curve_to(c1, c2, to);
}
