use glam::DVec2;

/// A raster target rows paint onto. All coordinates are pixel-buffer space.
///
/// The browser implements this over a Canvas 2D context; tests record the
/// calls instead.
pub trait Surface {
    /// Pixel-buffer size. Zero in either axis means there is nothing to draw on.
    fn extent(&self) -> DVec2;

    fn clear(&mut self);

    fn begin_path(&mut self);

    fn move_to(&mut self, p: DVec2);

    fn line_to(&mut self, p: DVec2);

    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, p: DVec2);

    fn close_path(&mut self);

    fn fill(&mut self, color: &str);

    #[inline]
    fn is_drawable(&self) -> bool {
        let e = self.extent();
        e.x > 0.0 && e.y > 0.0 && e.is_finite()
    }
}
