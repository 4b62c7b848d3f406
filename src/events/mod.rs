use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod pointer;
mod resize;

pub use pointer::{wire_input_handlers, InputWiring};
pub use resize::{wire_resize, ResizeTimer};

struct Attached {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners added through `listen`, kept so they can all be removed
/// again on unmount.
#[derive(Default)]
pub struct Listeners {
    attached: Vec<Attached>,
}

impl Listeners {
    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] could not listen for {}: {:?}", kind, e);
            return;
        }
        self.attached.push(Attached {
            target: target.clone(),
            kind,
            closure,
        });
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    pub fn detach_all(&mut self) {
        for a in self.attached.drain(..) {
            _ = a
                .target
                .remove_event_listener_with_callback(a.kind, a.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach_all();
    }
}
