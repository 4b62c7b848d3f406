use super::Listeners;
use crate::constants::{
    EV_CLICK, EV_MOUSE_LEAVE, EV_POINTER_MOVE, EV_TOUCH_CANCEL, EV_TOUCH_END, EV_TOUCH_MOVE,
};
use crate::core::WaveField;
use crate::dom;
use crate::frame::FrameLoop;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub field: Rc<RefCell<WaveField>>,
    pub frames: Rc<FrameLoop>,
}

impl InputWiring {
    fn moved(&self, page: DVec2) {
        let origin = dom::page_origin(&self.canvas);
        let wants_frame = self.field.borrow_mut().pointer_moved(page, origin);
        if wants_frame {
            self.frames.request();
        }
    }

    fn left(&self) {
        let wants_frame = self.field.borrow_mut().pointer_left();
        if wants_frame {
            self.frames.request();
        }
    }
}

pub fn wire_input_handlers(listeners: &mut Listeners, w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    wire_pointermove(listeners, &window, w);
    wire_touch(listeners, &window, w);
    wire_leave(listeners, w);
    wire_press(listeners, &window, w);
}

fn wire_pointermove(listeners: &mut Listeners, window: &web::Window, w: &InputWiring) {
    let w = w.clone();
    listeners.listen(window, EV_POINTER_MOVE, move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            w.moved(DVec2::new(ev.page_x() as f64, ev.page_y() as f64));
        }
    });
}

fn wire_touch(listeners: &mut Listeners, window: &web::Window, w: &InputWiring) {
    let w_move = w.clone();
    listeners.listen(window, EV_TOUCH_MOVE, move |ev: web::Event| {
        let Some(touch) = ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(|t| t.touches().get(0))
        else {
            return;
        };
        w_move.moved(DVec2::new(touch.page_x() as f64, touch.page_y() as f64));
    });

    for kind in [EV_TOUCH_END, EV_TOUCH_CANCEL] {
        let w_end = w.clone();
        listeners.listen(window, kind, move |ev: web::Event| {
            let remaining = ev
                .dyn_ref::<web::TouchEvent>()
                .map(|t| t.touches().length())
                .unwrap_or(0);
            if remaining == 0 {
                w_end.left();
            }
        });
    }
}

fn wire_leave(listeners: &mut Listeners, w: &InputWiring) {
    let Some(root) = dom::window_document().and_then(|d| d.document_element()) else {
        return;
    };
    let w = w.clone();
    listeners.listen(&root, EV_MOUSE_LEAVE, move |_ev: web::Event| {
        w.left();
    });
}

fn wire_press(listeners: &mut Listeners, window: &web::Window, w: &InputWiring) {
    let w = w.clone();
    listeners.listen(window, EV_CLICK, move |ev: web::Event| {
        let primary = ev
            .dyn_ref::<web::MouseEvent>()
            .map(|m| m.button() == 0)
            .unwrap_or(true);
        if !primary {
            return;
        }
        let wants_frame = w.field.borrow_mut().press();
        log::info!("[click] wobble");
        if wants_frame {
            w.frames.request();
        }
    });
}
