use crate::constants::MAX_DEVICE_SCALE;
use crate::core::{pick_scale, Layout, Viewport};
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(canvas_id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", canvas_id, e))
}

/// 2D context, or `None` (with a warning) when the browser will not give one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<web::CanvasRenderingContext2d>().ok(),
        Ok(None) => {
            log::warn!("[canvas] no 2d context; drawing disabled");
            None
        }
        Err(e) => {
            log::warn!("[canvas] get_context failed: {:?}", e);
            None
        }
    }
}

#[inline]
pub fn device_scale() -> f64 {
    web::window()
        .map(|w| pick_scale(w.device_pixel_ratio()).min(MAX_DEVICE_SCALE))
        .unwrap_or(1.0)
}

/// Current logical viewport from the window's inner size.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(0.0, 0.0, 1.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height, device_scale())
}

/// Backing store at logical size times scale, CSS size at logical size.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, layout: &Layout) {
    let (w_px, h_px) = layout.buffer_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", layout.viewport.width));
    _ = style.set_property("height", &format!("{}px", layout.viewport.height));
}

pub fn set_background(canvas: &web::HtmlCanvasElement, color: &str) {
    _ = canvas.style().set_property("background-color", color);
}

/// Top-left corner of the canvas in page coordinates.
pub fn page_origin(canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    let (sx, sy) = web::window()
        .map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
        .unwrap_or((0.0, 0.0));
    DVec2::new(rect.left() + sx, rect.top() + sy)
}
