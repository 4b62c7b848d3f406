use super::Listeners;
use crate::constants::EV_RESIZE;
use crate::core::WaveField;
use crate::dom;
use crate::frame::FrameLoop;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The pending quiet-period timer. Replacing or clearing it cancels the
/// previous timeout.
pub type ResizeTimer = Rc<RefCell<Option<Timeout>>>;

/// Debounced window resize: each event restarts the quiet period, and only
/// the last viewport of a burst is laid out.
pub fn wire_resize(
    listeners: &mut Listeners,
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<WaveField>>,
    frames: &Rc<FrameLoop>,
) -> ResizeTimer {
    let timer: ResizeTimer = Rc::new(RefCell::new(None));
    let Some(window) = web::window() else {
        return timer;
    };
    let quiet_ms = field.borrow().config().resize_quiet_ms;

    let canvas = canvas.clone();
    let field = field.clone();
    let frames = frames.clone();
    let pending = timer.clone();
    listeners.listen(&window, EV_RESIZE, move |_ev: web::Event| {
        let ticket = field.borrow_mut().schedule_resize(dom::viewport());
        let canvas = canvas.clone();
        let field = field.clone();
        let frames = frames.clone();
        let timeout = Timeout::new(quiet_ms, move || {
            let Some(layout) = field.borrow_mut().apply_resize(ticket) else {
                return;
            };
            dom::size_canvas(&canvas, &layout);
            let wants_frame = field.borrow_mut().request_redraw();
            if wants_frame {
                frames.request();
            }
        });
        *pending.borrow_mut() = Some(timeout);
    });
    timer
}
