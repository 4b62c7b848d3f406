use crate::core::Surface;
use glam::DVec2;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Canvas 2D backend for a single frame.
///
/// Sized from the canvas backing store at construction; a missing context
/// reports a zero extent so rows skip drawing instead of failing.
pub struct CanvasSurface<'a> {
    ctx: Option<&'a web::CanvasRenderingContext2d>,
    extent: DVec2,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(
        canvas: &web::HtmlCanvasElement,
        ctx: Option<&'a web::CanvasRenderingContext2d>,
    ) -> Self {
        let extent = match ctx {
            Some(_) => DVec2::new(canvas.width() as f64, canvas.height() as f64),
            None => DVec2::ZERO,
        };
        Self { ctx, extent }
    }
}

impl Surface for CanvasSurface<'_> {
    fn extent(&self) -> DVec2 {
        self.extent
    }

    fn clear(&mut self) {
        if let Some(ctx) = self.ctx {
            ctx.clear_rect(0.0, 0.0, self.extent.x, self.extent.y);
        }
    }

    fn begin_path(&mut self) {
        if let Some(ctx) = self.ctx {
            ctx.begin_path();
        }
    }

    fn move_to(&mut self, p: DVec2) {
        if let Some(ctx) = self.ctx {
            ctx.move_to(p.x, p.y);
        }
    }

    fn line_to(&mut self, p: DVec2) {
        if let Some(ctx) = self.ctx {
            ctx.line_to(p.x, p.y);
        }
    }

    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, p: DVec2) {
        if let Some(ctx) = self.ctx {
            ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
        }
    }

    fn close_path(&mut self) {
        if let Some(ctx) = self.ctx {
            ctx.close_path();
        }
    }

    fn fill(&mut self, color: &str) {
        if let Some(ctx) = self.ctx {
            #[allow(deprecated)]
            ctx.set_fill_style(&JsValue::from_str(color));
            ctx.fill();
        }
    }
}
