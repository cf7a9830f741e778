//! The gallery engine: one owned value holding the artwork store, the
//! cell surface and every interaction mode.
//!
//! # Driving the gallery
//!
//! The host feeds input through [`Gallery::handle_input`] and
//! [`Gallery::handle_key`] (or issues [`GalleryCommand`]s directly), calls
//! [`Gallery::tick`] once per frame and draws the returned [`Frame`]:
//!
//! ```ignore
//! let mut gallery = Gallery::load_or_empty("artworks.json", viewport, Options::default(), now);
//! loop {
//!     for event in events() {
//!         let _ = gallery.handle_input(event, now);
//!     }
//!     gallery.tick(now);
//!     draw(&gallery.frame(now));
//! }
//! ```
//!
//! # Modes
//!
//! Panning, the focus view and the scatter layout are mutually exclusive:
//! panning is disabled while either mode is not Closed, the focus view
//! cannot open unless the scatter layout is Closed, and vice versa. Filter
//! changes are only accepted while both modes are Closed.

mod accessors;
/// Discrete operations on the gallery.
pub mod command;
/// Per-frame output for the host renderer.
pub mod frame;
mod input;
mod options;

use glam::Vec2;
use web_time::Instant;

pub use self::command::GalleryCommand;
pub use self::frame::{CellFrame, Cursor, Frame};
use crate::chrome::Chrome;
use crate::focus::{FocusPhase, FocusTransition};
use crate::input::InputProcessor;
use crate::layout::GridLayout;
use crate::options::{ms, Options};
use crate::pan::PanController;
use crate::parallax::ParallaxAnimator;
use crate::scatter::{ScatterController, ScatterPhase};
use crate::store::ArtworkStore;
use crate::surface::Surface;

/// Borrow the shared state as a [`Stage`](crate::stage::Stage) while
/// leaving the mode controllers free for mutable use.
macro_rules! stage {
    ($gallery:expr) => {
        $crate::stage::Stage {
            store: &$gallery.store,
            layout: &$gallery.layout,
            surface: &mut $gallery.surface,
            chrome: &mut $gallery.chrome,
            viewport: $gallery.viewport,
            pan_offset: $gallery.pan.offset(),
        }
    };
}
pub(crate) use stage;

/// The gallery engine.
#[derive(Debug, Clone)]
pub struct Gallery {
    /// Every tweakable setting.
    options: Options,
    /// Artworks and the active filter.
    store: ArtworkStore,
    /// Grid geometry.
    layout: GridLayout,
    /// Per-cell visuals.
    surface: Surface,
    /// Filter bar, caption and about panel.
    chrome: Chrome,
    /// Viewport size in pixels.
    viewport: Vec2,
    /// Viewport offset and pan gestures.
    pan: PanController,
    /// Pointer-driven tilt and depth offsets.
    parallax: ParallaxAnimator,
    /// Focus view state machine.
    focus: FocusTransition,
    /// Scatter layout state machine.
    scatter: ScatterController,
    /// Raw input to command translation.
    input: InputProcessor,
    /// Name of the last preset loaded or saved.
    active_preset: Option<String>,
    /// A layout change arrived while a mode was active.
    layout_pending: bool,
}

impl Gallery {
    /// Build a gallery over `store` for a viewport of `viewport` pixels,
    /// scrolled to the configured anchor.
    #[must_use]
    pub fn new(
        store: ArtworkStore,
        viewport: Vec2,
        options: Options,
        now: Instant,
    ) -> Self {
        let layout = GridLayout::new(store.len(), &options.layout);
        let pan = PanController::new(
            layout.surface_size(),
            viewport,
            options.pan.clone(),
        );
        log::info!(
            "gallery: {} artworks in {}x{} grid, surface {:?}",
            store.len(),
            layout.dims().columns,
            layout.dims().rows,
            layout.surface_size()
        );
        Self {
            surface: Surface::new(store.len()),
            chrome: Chrome::new(now, ms(options.focus.caption_fade_ms)),
            focus: FocusTransition::new(now),
            scatter: ScatterController::new(options.scatter.seed),
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            parallax: ParallaxAnimator::new(),
            active_preset: None,
            layout_pending: false,
            viewport,
            pan,
            layout,
            store,
            options,
        }
    }

    /// Load artworks from a path or URL; any failure is logged and yields
    /// an empty gallery.
    #[must_use]
    pub fn load_or_empty(
        source: &str,
        viewport: Vec2,
        options: Options,
        now: Instant,
    ) -> Self {
        Self::new(ArtworkStore::load_or_empty(source), viewport, options, now)
    }

    /// Whether no mode is active and panning is allowed.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.focus.is_closed() && self.scatter.is_closed()
    }

    /// Advance every animation to `now` and run the completion actions of
    /// those that finished.
    pub fn tick(&mut self, now: Instant) {
        let _ = self.pan.tick(now);
        let _ = self.surface.tick(now);
        self.chrome.tick(now);
        {
            let stage = stage!(self);
            self.focus.tick(&stage, now);
            self.scatter.tick(&stage, now);
        }
        self.sync_interaction();
        if self.layout_pending && self.is_interactive() {
            self.apply_layout();
        }
        self.apply_parallax();
    }

    /// Whether a glide, a cell tween or a mode transition is still in
    /// flight at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.pan.is_settling()
            || !self.surface.is_settled(now)
            || matches!(
                self.focus.phase(),
                FocusPhase::Opening | FocusPhase::Closing
            )
            || self.scatter.phase() == ScatterPhase::Closing
    }

    /// Panning follows the modes: enabled only while both are Closed.
    fn sync_interaction(&mut self) {
        self.pan.set_enabled(self.is_interactive());
    }

    /// One parallax step, written to visible cells that are not animating.
    fn apply_parallax(&mut self) {
        let options = &self.options.parallax;
        if !options.enabled || !self.is_interactive() {
            return;
        }
        self.parallax.step(options.smoothing);
        for cell in self.store.visible() {
            self.surface
                .set_offset(cell, self.parallax.cell_offset(cell, options));
        }
    }
}
