use super::constants::{RESIZE_QUIET_MS, ROW_BASELINES};
use super::layout::{Layout, Viewport};
use super::palette::PaletteSet;
use super::row::{FrameInput, Row};
use super::schedule::{Debouncer, FrameScheduler, Settled, Ticket};
use super::surface::Surface;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Tunables for a mounted wave field.
#[derive(Clone, Debug)]
pub struct WaveConfig {
    /// Baseline fraction of each row, first row lowest on screen.
    pub baselines: Vec<f64>,
    pub resize_quiet_ms: u32,
    /// Whether a press also moves to the next palette.
    pub cycle_palette_on_press: bool,
    /// Fixed RNG seed; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            baselines: ROW_BASELINES.to_vec(),
            resize_quiet_ms: RESIZE_QUIET_MS,
            cycle_palette_on_press: true,
            seed: None,
        }
    }
}

/// Change notifications delivered to subscribers.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEvent {
    PaletteActivated { index: usize, background: String },
    Relayout { layout: Layout },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&FieldEvent)>;

/// Everything the animation needs, owned in one place.
///
/// Input handlers call the mutating methods and request a frame whenever one
/// of them returns `true`; the frame tick calls `tick`, which is the only
/// place rows are advanced and painted.
pub struct WaveField {
    config: WaveConfig,
    layout: Layout,
    pointer: Option<DVec2>,
    surface_origin: DVec2,
    rows: Vec<Row>,
    palettes: PaletteSet,
    scheduler: FrameScheduler,
    resize: Debouncer<Viewport>,
    rng: StdRng,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl WaveField {
    /// Lay out, shuffle and activate the first palette, build the rows, and
    /// mark the field for its first draw.
    pub fn new(config: WaveConfig, viewport: Viewport, mut palettes: PaletteSet) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let layout = Layout::compute(viewport, &mut rng);
        let rows = config
            .baselines
            .iter()
            .map(|&b| Row::new(b, viewport.scale, layout.total_points))
            .collect();
        palettes.shuffle(&mut rng);

        let mut field = Self {
            config,
            layout,
            pointer: None,
            surface_origin: DVec2::ZERO,
            rows,
            palettes,
            scheduler: FrameScheduler::new(),
            resize: Debouncer::new(),
            rng,
            observers: Vec::new(),
            next_observer: 0,
        };
        field.activate_palette(0);
        field.scheduler.request_redraw();
        field
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn palettes(&self) -> &PaletteSet {
        &self.palettes
    }

    pub fn background(&self) -> &str {
        self.palettes.active().background()
    }

    pub fn pointer(&self) -> Option<DVec2> {
        self.pointer
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&FieldEvent) + 'static) -> ObserverId {
        self.next_observer += 1;
        let id = ObserverId(self.next_observer);
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: &FieldEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(event);
        }
    }

    /// Activate palette `index`: background from its first color, rows from
    /// the rest in reverse.
    pub fn activate_palette(&mut self, index: usize) {
        let background = {
            let palette = self.palettes.activate(index);
            for (i, row) in self.rows.iter_mut().enumerate() {
                if let Some(color) = palette.row_color(i) {
                    row.color = color.to_owned();
                }
            }
            palette.background().to_owned()
        };
        let index = self.palettes.cursor();
        log::debug!("[palette] active {} background {}", index, background);
        self.notify(&FieldEvent::PaletteActivated { index, background });
    }

    /// Move to the next palette and ask for a redraw.
    pub fn next_palette(&mut self) -> bool {
        self.activate_palette(self.palettes.cursor() + 1);
        self.scheduler.request_redraw()
    }

    /// Record a pointer position. `page` is in page coordinates and `origin`
    /// is the surface's top-left corner in the same space.
    pub fn pointer_moved(&mut self, page: DVec2, origin: DVec2) -> bool {
        if !page.is_finite() {
            return self.pointer_left();
        }
        self.pointer = Some(page);
        self.surface_origin = if origin.is_finite() { origin } else { DVec2::ZERO };
        self.scheduler.request_redraw()
    }

    pub fn pointer_left(&mut self) -> bool {
        self.pointer = None;
        self.scheduler.request_redraw()
    }

    /// Pointer in pixel-buffer coordinates.
    pub fn pointer_on_surface(&self) -> Option<DVec2> {
        self.pointer
            .map(|page| (page - self.surface_origin) * self.layout.viewport.scale)
    }

    /// Discrete user action: ripple every row, optionally recolor.
    pub fn press(&mut self) -> bool {
        let dist = self.layout.dist;
        let count = self.layout.total_points;
        for row in self.rows.iter_mut() {
            row.wobble(dist, count, &mut self.rng);
        }
        if self.config.cycle_palette_on_press {
            self.activate_palette(self.palettes.cursor() + 1);
        }
        self.scheduler.request_redraw()
    }

    pub fn schedule_resize(&mut self, viewport: Viewport) -> Ticket {
        self.resize.schedule(viewport)
    }

    /// Apply the trailing viewport of a settled resize burst. Stale tickets
    /// return `None`.
    pub fn apply_resize(&mut self, ticket: Ticket) -> Option<Layout> {
        let Settled {
            value,
            coalesced,
            burst,
        } = self.resize.fire(ticket)?;
        log::debug!(
            "[resize] relayout after {} event(s) over {:?}",
            coalesced,
            burst
        );
        Some(self.relayout(value))
    }

    /// Recompute layout for `viewport` and regenerate every row's points.
    pub fn relayout(&mut self, viewport: Viewport) -> Layout {
        self.layout = Layout::compute(viewport, &mut self.rng);
        for row in self.rows.iter_mut() {
            row.scale = viewport.scale;
            row.resize(self.layout.total_points);
        }
        let event = FieldEvent::Relayout {
            layout: self.layout,
        };
        self.notify(&event);
        self.layout
    }

    pub fn request_redraw(&mut self) -> bool {
        self.scheduler.request_redraw()
    }

    /// Forget a frame request the host failed to place.
    pub fn frame_failed(&mut self) {
        self.scheduler.frame_failed();
    }

    /// One frame-synchronized tick. Draws only when a redraw was requested.
    /// Returns `true` while the rows are still in motion and another frame
    /// should be requested.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.scheduler.begin_frame() {
            return false;
        }
        surface.clear();
        let frame = FrameInput {
            dist: self.layout.dist,
            pointer: self.pointer_on_surface(),
            expected_points: self.layout.total_points,
        };
        // Last row first: the tallest band sits at the back.
        let drew = self
            .rows
            .iter_mut()
            .rev()
            .fold(false, |drew, row| row.draw(surface, &frame) | drew);
        // Rows that were skipped did not advance; keep idle until something can draw.
        if drew && self.rows.iter().any(Row::is_moving) {
            self.scheduler.request_redraw()
        } else {
            false
        }
    }

    /// Stop scheduling, drop any pending resize and all subscribers.
    pub fn teardown(&mut self) {
        self.scheduler.stop();
        self.resize.cancel();
        self.observers.clear();
        self.pointer = None;
    }
}
