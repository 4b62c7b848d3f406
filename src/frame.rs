use crate::core::WaveField;
use crate::render::CanvasSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` driver for a `WaveField`.
///
/// Frames are requested on demand rather than every vsync: the field decides
/// through its scheduler when one is needed. The outstanding request can be
/// cancelled, and `cancel` also drops the tick closure.
pub struct FrameLoop {
    field: Rc<RefCell<WaveField>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    handle: Cell<Option<i32>>,
}

impl FrameLoop {
    pub fn new(
        field: Rc<RefCell<WaveField>>,
        canvas: web::HtmlCanvasElement,
        ctx: Option<web::CanvasRenderingContext2d>,
    ) -> Rc<Self> {
        let frames = Rc::new(Self {
            field: field.clone(),
            tick: RefCell::new(None),
            handle: Cell::new(None),
        });
        let weak = Rc::downgrade(&frames);
        let tick = Closure::wrap(Box::new(move || {
            let Some(frames) = weak.upgrade() else {
                return;
            };
            frames.handle.set(None);
            let again = {
                let mut surface = CanvasSurface::new(&canvas, ctx.as_ref());
                field.borrow_mut().tick(&mut surface)
            };
            if again {
                frames.request();
            }
        }) as Box<dyn FnMut()>);
        *frames.tick.borrow_mut() = Some(tick);
        frames
    }

    /// Ask the browser for the next frame. Callers go through the field's
    /// scheduler first, so at most one request is outstanding.
    pub fn request(&self) {
        let Some(w) = web::window() else {
            self.failed();
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.handle.set(Some(id)),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                self.failed();
            }
        }
    }

    // A request that never reached the browser must not stay outstanding.
    fn failed(&self) {
        match self.field.try_borrow_mut() {
            Ok(mut field) => field.frame_failed(),
            Err(_) => log::warn!("[frame] field busy; pending frame not cleared"),
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}
