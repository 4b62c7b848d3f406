#![cfg(target_arch = "wasm32")]
use crate::core::{FieldEvent, ObserverId, PaletteSet, WaveConfig, WaveField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wave-field starting");
    Ok(())
}

struct Mounted {
    field: Rc<RefCell<WaveField>>,
    frames: Rc<frame::FrameLoop>,
    listeners: events::Listeners,
    resize_timer: events::ResizeTimer,
    observer: ObserverId,
}

/// A mounted wave background. Call `unmount` before discarding it.
#[wasm_bindgen]
pub struct WaveHandle {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl WaveHandle {
    /// Same as a click: ripple every row and, if configured, recolor.
    pub fn wobble(&self) {
        if let Some(m) = &self.mounted {
            let wants_frame = m.field.borrow_mut().press();
            if wants_frame {
                m.frames.request();
            }
        }
    }

    pub fn next_palette(&self) {
        if let Some(m) = &self.mounted {
            let wants_frame = m.field.borrow_mut().next_palette();
            if wants_frame {
                m.frames.request();
            }
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Detach listeners, cancel the pending resize and frame. Idempotent.
    pub fn unmount(&mut self) {
        let Some(mut m) = self.mounted.take() else {
            return;
        };
        let detached = m.listeners.len();
        m.listeners.detach_all();
        m.resize_timer.borrow_mut().take();
        {
            let mut field = m.field.borrow_mut();
            field.unsubscribe(m.observer);
            field.teardown();
        }
        m.frames.cancel();
        log::info!("[unmount] detached {} listener(s)", detached);
    }
}

impl Drop for WaveHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount on `canvas_id` (empty for `#wave-canvas`) with the built-in palettes.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Result<WaveHandle, JsValue> {
    mount_inner(canvas_id, builtin_palettes(), WaveConfig::default())
}

/// Mount with caller-supplied palettes: an array of five-color string arrays.
/// Malformed entries are skipped; with none left the built-ins are used.
#[wasm_bindgen]
pub fn mount_with(
    canvas_id: &str,
    palettes: js_sys::Array,
    cycle_palette_on_press: bool,
) -> Result<WaveHandle, JsValue> {
    let config = WaveConfig {
        cycle_palette_on_press,
        ..WaveConfig::default()
    };
    mount_inner(canvas_id, palettes_from_js(&palettes), config)
}

fn mount_inner(
    canvas_id: &str,
    palettes: anyhow::Result<PaletteSet>,
    config: WaveConfig,
) -> Result<WaveHandle, JsValue> {
    let canvas_id = if canvas_id.is_empty() {
        constants::DEFAULT_CANVAS_ID
    } else {
        canvas_id
    };
    init(canvas_id, palettes, config)
        .map(|mounted| WaveHandle {
            mounted: Some(mounted),
        })
        .map_err(|e| {
            log::error!("mount error: {:?}", e);
            JsValue::from_str(&format!("{e:#}"))
        })
}

fn init(
    canvas_id: &str,
    palettes: anyhow::Result<PaletteSet>,
    config: WaveConfig,
) -> anyhow::Result<Mounted> {
    let canvas = dom::canvas_by_id(canvas_id)?;
    let ctx = dom::context_2d(&canvas);
    let palettes = palettes?;
    let palette_count = palettes.len();

    let field = WaveField::new(config, dom::viewport(), palettes);
    {
        let layout = field.layout();
        log::info!(
            "[mount] viewport={}x{} scale={:.2} points={} dist={:.0} palettes={}",
            layout.viewport.width,
            layout.viewport.height,
            layout.viewport.scale,
            layout.total_points,
            layout.dist,
            palette_count
        );
        dom::size_canvas(&canvas, layout);
        dom::set_background(&canvas, field.background());
    }
    let field = Rc::new(RefCell::new(field));

    let observer = {
        let canvas = canvas.clone();
        field.borrow_mut().subscribe(move |ev| match ev {
            FieldEvent::PaletteActivated { background, .. } => {
                dom::set_background(&canvas, background);
            }
            FieldEvent::Relayout { layout } => {
                log::debug!(
                    "[resize] {}x{} points={}",
                    layout.viewport.width,
                    layout.viewport.height,
                    layout.total_points
                );
            }
        })
    };

    let frames = frame::FrameLoop::new(field.clone(), canvas.clone(), ctx);
    let mut listeners = events::Listeners::default();
    events::wire_input_handlers(
        &mut listeners,
        &events::InputWiring {
            canvas: canvas.clone(),
            field: field.clone(),
            frames: frames.clone(),
        },
    );
    let resize_timer = events::wire_resize(&mut listeners, &canvas, &field, &frames);

    // The field was marked for its first draw on construction.
    frames.request();

    Ok(Mounted {
        field,
        frames,
        listeners,
        resize_timer,
        observer,
    })
}

fn builtin_palettes() -> anyhow::Result<PaletteSet> {
    PaletteSet::from_static(&constants::DEFAULT_PALETTES)
        .map_err(|e| anyhow::anyhow!("built-in palettes: {}", e))
}

fn palettes_from_js(palettes: &js_sys::Array) -> anyhow::Result<PaletteSet> {
    // Non-array entries read as empty tuples and are rejected with the rest.
    let tuples = palettes.iter().map(|entry| {
        entry
            .dyn_ref::<js_sys::Array>()
            .map(|arr| arr.iter().filter_map(|c| c.as_string()).collect::<Vec<String>>())
            .unwrap_or_default()
    });
    let loaded = PaletteSet::load(tuples, &constants::DEFAULT_PALETTES)
        .map_err(|e| anyhow::anyhow!("palettes: {}", e))?;
    for err in &loaded.rejected {
        log::warn!("[palette] skipping {}", err);
    }
    if loaded.fell_back {
        log::warn!("[palette] no usable palettes supplied; using built-ins");
    }
    Ok(loaded.set)
}
