//! Focus transition: zoom a grid cell into a centered presentation.
//!
//! Instead of moving the cell, the whole surface is scaled and translated
//! (see [`geometry`]) so the chosen cell fills the center of the viewport
//! while its siblings fade away.
//!
//! # Phases
//!
//! ```text
//! Closed ──open──▶ Opening ──transform done──▶ Open ──close──▶ Closing
//!   ▲                 │                         │ ▲              │
//!   │                 └──────────close──────────┼─┼──────────────┤
//!   │                                    navigate └─┘            │
//!   └───────────────── transform and cells done ─────────────────┘
//! ```
//!
//! Every phase change that depends on an animation finishing happens in
//! [`FocusTransition::tick`], never in the operation that started it.

pub mod geometry;

use web_time::{Duration, Instant};

pub use self::geometry::{focus_scale, focus_transform, ViewportTransform};
use crate::animation::tween::Tween;
use crate::options::{ms, FilterOptions, FocusOptions};
use crate::stage::Stage;
use crate::store::{CellId, Step};
use crate::surface::{CellMotion, CellVisual};
use crate::util::easing::EasingFunction;
use crate::util::rect::Rect;

/// Lifecycle of the focus view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPhase {
    /// Grid view; the surface transform is identity.
    Closed,
    /// Zooming in toward the focused cell.
    Opening,
    /// Zoomed in and settled (neighbour re-targeting may be in flight).
    Open,
    /// Zooming back out to identity.
    Closing,
}

/// The artwork currently presented. At most one exists at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusSession {
    /// Focused cell.
    pub cell: CellId,
}

/// Focus state machine and the surface transform it owns.
#[derive(Debug, Clone)]
pub struct FocusTransition {
    phase: FocusPhase,
    session: Option<FocusSession>,
    transform: Tween<ViewportTransform>,
}

impl FocusTransition {
    /// A closed transition with an identity transform.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            phase: FocusPhase::Closed,
            session: None,
            transform: Tween::settled(ViewportTransform::IDENTITY, now),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    /// Whether no focus session exists.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.phase == FocusPhase::Closed
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<FocusSession> {
        self.session
    }

    /// Surface transform at `now`.
    #[must_use]
    pub fn transform(&self, now: Instant) -> ViewportTransform {
        self.transform.sample(now)
    }

    /// Zoom into `cell`.
    ///
    /// Rejected unless Closed, and for cells the active filter hides.
    /// Returns whether the session started.
    pub fn open(
        &mut self,
        stage: &mut Stage<'_>,
        cell: CellId,
        now: Instant,
        options: &FocusOptions,
    ) -> bool {
        if self.phase != FocusPhase::Closed {
            log::debug!("focus open ignored in {:?}", self.phase);
            return false;
        }
        if !stage.store.is_visible(cell) {
            log::debug!("focus open ignored for hidden cell {cell}");
            return false;
        }
        let Some(source) =
            stage.surface.screen_rect(stage.layout, cell, stage.pan_offset)
        else {
            return false;
        };

        let target =
            focus_transform(source, stage.viewport, stage.pan_offset, options);
        self.transform = Tween::new(
            ViewportTransform::identity_at(target.origin),
            target,
            now,
            ms(options.open_duration_ms),
            EasingFunction::CubicInOut,
        );
        self.session = Some(FocusSession { cell });
        self.phase = FocusPhase::Opening;

        fade_siblings(stage, cell, source, now, options);
        stage.chrome.hide_filter_bar(now, ms(options.chrome_fade_ms));
        if let Some(artwork) = stage.store.get(cell) {
            stage.chrome.queue_caption(now, artwork.caption());
        }
        log::debug!(
            "focus open cell {cell} scale {:.3} translate {:?}",
            target.scale,
            target.translate
        );
        true
    }

    /// Zoom back out to the grid.
    ///
    /// Rejected unless Opening or Open. Every cell returns to what the
    /// active filter dictates; the phase reaches Closed in
    /// [`tick`](Self::tick) once all of that has finished.
    pub fn close(
        &mut self,
        stage: &mut Stage<'_>,
        now: Instant,
        options: &FocusOptions,
        filter: &FilterOptions,
    ) -> bool {
        if !matches!(self.phase, FocusPhase::Opening | FocusPhase::Open) {
            log::debug!("focus close ignored in {:?}", self.phase);
            return false;
        }
        let origin = self.transform.target().origin;
        self.transform = self.transform.retarget(
            now,
            ViewportTransform::identity_at(origin),
            ms(options.close_duration_ms),
            EasingFunction::CubicInOut,
        );
        self.phase = FocusPhase::Closing;

        stage.restore_to_filter(
            now,
            ms(options.restore_duration_ms),
            ms(options.restore_stagger_ms),
            filter.hidden_scale,
            |_| None,
        );
        stage.chrome.hide_caption(now);
        stage
            .chrome
            .show_filter_bar(now, ms(options.chrome_fade_ms), ms(0));
        log::debug!("focus close");
        true
    }

    /// Move the focus to the visible neighbour in `step` direction,
    /// wrapping at both ends.
    ///
    /// Only while Open. A no-op when the current cell is no longer visible
    /// or is the only visible one.
    pub fn navigate(
        &mut self,
        stage: &mut Stage<'_>,
        step: Step,
        now: Instant,
        options: &FocusOptions,
    ) -> bool {
        if self.phase != FocusPhase::Open {
            return false;
        }
        let Some(FocusSession { cell: current }) = self.session else {
            return false;
        };
        let Some(next) = stage.store.step_visible(current, step) else {
            log::debug!("focus navigate: cell {current} is not visible");
            return false;
        };
        if next == current {
            return false;
        }
        let Some(source) =
            stage.surface.screen_rect(stage.layout, next, stage.pan_offset)
        else {
            return false;
        };

        let target =
            focus_transform(source, stage.viewport, stage.pan_offset, options);
        self.transform = self.transform.retarget(
            now,
            target,
            ms(options.navigate_duration_ms),
            EasingFunction::CubicInOut,
        );
        self.session = Some(FocusSession { cell: next });

        let motion = CellMotion::new(ms(options.navigate_duration_ms), ms(0));
        if let Some(old) = stage.surface.visual_at(current, now) {
            stage
                .surface
                .animate(current, now, sibling_visual(old, options), motion);
        }
        if let Some(new) = stage.surface.visual_at(next, now) {
            stage
                .surface
                .animate(next, now, new.with_opacity(1.0).with_scale(1.0), motion);
        }
        if let Some(artwork) = stage.store.get(next) {
            stage.chrome.queue_caption(now, artwork.caption());
        }
        log::debug!("focus navigate {current} -> {next}");
        true
    }

    /// Advance phase changes whose animations have completed.
    pub fn tick(&mut self, stage: &Stage<'_>, now: Instant) {
        match self.phase {
            FocusPhase::Opening if self.transform.is_complete(now) => {
                self.phase = FocusPhase::Open;
            }
            FocusPhase::Closing
                if self.transform.is_complete(now)
                    && stage.surface.is_settled(now) =>
            {
                self.phase = FocusPhase::Closed;
                self.session = None;
                self.transform =
                    Tween::settled(ViewportTransform::IDENTITY, now);
                log::debug!("focus closed");
            }
            _ => {}
        }
    }
}

/// Dimmed, slightly shrunk version of a cell's visual.
fn sibling_visual(current: CellVisual, options: &FocusOptions) -> CellVisual {
    CellVisual {
        opacity: current.opacity.min(options.sibling_opacity),
        scale: current.scale.min(options.sibling_scale),
        ..current
    }
}

/// Fade every cell but `source_cell`, farther cells starting later.
fn fade_siblings(
    stage: &mut Stage<'_>,
    source_cell: CellId,
    source: Rect,
    now: Instant,
    options: &FocusOptions,
) {
    let max_delay = ms(options.max_sibling_delay_ms).as_secs_f32();
    let duration = ms(options.sibling_fade_ms);
    for cell in 0..stage.surface.len() {
        let Some(current) = stage.surface.visual_at(cell, now) else {
            continue;
        };
        if cell == source_cell {
            let full = current.with_opacity(1.0).with_scale(1.0);
            stage.surface.animate(cell, now, full, CellMotion::new(duration, ms(0)));
            continue;
        }
        let Some(rect) =
            stage.surface.screen_rect(stage.layout, cell, stage.pan_offset)
        else {
            continue;
        };
        let distance = (rect.min - source.min).length();
        let delay = if options.sibling_delay_divisor > 0.0 {
            (distance / options.sibling_delay_divisor).min(max_delay)
        } else {
            0.0
        };
        let motion =
            CellMotion::new(duration, Duration::from_secs_f32(delay.max(0.0)));
        stage
            .surface
            .animate(cell, now, sibling_visual(current, options), motion);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::chrome::Chrome;
    use crate::layout::GridLayout;
    use crate::options::{LayoutMode, LayoutOptions};
    use crate::store::tests::record;
    use crate::store::{ArtworkStore, Filter};
    use crate::surface::Surface;

    struct Fixture {
        store: ArtworkStore,
        layout: GridLayout,
        surface: Surface,
        chrome: Chrome,
        t0: Instant,
    }

    impl Fixture {
        fn new() -> Self {
            let t0 = Instant::now();
            let store = ArtworkStore::new(vec![
                record("a", "painting"),
                record("x", "drawing"),
                record("b", "painting"),
                record("c", "painting"),
            ]);
            let layout_options = LayoutOptions {
                mode: LayoutMode::Fixed { columns: 2 },
                ..LayoutOptions::default()
            };
            let layout = GridLayout::new(store.len(), &layout_options);
            Self {
                surface: Surface::new(store.len()),
                chrome: Chrome::new(t0, Duration::from_millis(200)),
                store,
                layout,
                t0,
            }
        }

        fn stage(&mut self) -> Stage<'_> {
            Stage {
                store: &self.store,
                layout: &self.layout,
                surface: &mut self.surface,
                chrome: &mut self.chrome,
                viewport: Vec2::new(1280.0, 800.0),
                pan_offset: Vec2::new(200.0, 150.0),
            }
        }

        fn settle(&mut self, focus: &mut FocusTransition, at: Instant) {
            let _ = self.surface.tick(at);
            self.chrome.tick(at);
            let stage = self.stage();
            focus.tick(&stage, at);
        }
    }

    fn after(t0: Instant, millis: u64) -> Instant {
        t0 + Duration::from_millis(millis)
    }

    #[test]
    fn open_close_restores_filter_opacity() {
        let mut fx = Fixture::new();
        let t0 = fx.t0;
        let options = FocusOptions::default();
        let filter = FilterOptions::default();
        assert!(fx.store.set_filter(Filter::from_value("painting")));
        fx.stage().restore_to_filter(t0, Duration::ZERO, Duration::ZERO, 0.9, |_| None);
        fx.settle(&mut FocusTransition::new(t0), t0);

        let mut focus = FocusTransition::new(t0);
        assert!(focus.open(&mut fx.stage(), 0, t0, &options));
        assert!(focus.close(&mut fx.stage(), after(t0, 10), &options, &filter));

        let done = after(t0, 5_000);
        fx.settle(&mut focus, done);
        assert_eq!(focus.phase(), FocusPhase::Closed);
        assert!(focus.transform(done).is_identity());
        for cell in 0..fx.store.len() {
            let visual = fx.surface.visual(cell).unwrap();
            let visible = fx.store.is_visible(cell);
            assert_eq!(visual.opacity, if visible { 1.0 } else { 0.0 });
            assert_eq!(fx.surface.is_filtered_out(cell), !visible);
        }
    }

    #[test]
    fn open_is_rejected_unless_closed() {
        let mut fx = Fixture::new();
        let t0 = fx.t0;
        let options = FocusOptions::default();
        let mut focus = FocusTransition::new(t0);
        assert!(focus.open(&mut fx.stage(), 0, t0, &options));
        let before = focus.transform(after(t0, 100));

        assert!(!focus.open(&mut fx.stage(), 2, after(t0, 50), &options));
        assert_eq!(focus.session(), Some(FocusSession { cell: 0 }));
        assert_eq!(focus.transform(after(t0, 100)), before);
    }

    #[test]
    fn close_is_rejected_when_closed() {
        let mut fx = Fixture::new();
        let t0 = fx.t0;
        let mut focus = FocusTransition::new(t0);
        assert!(!focus.close(
            &mut fx.stage(),
            t0,
            &FocusOptions::default(),
            &FilterOptions::default()
        ));
        assert_eq!(focus.phase(), FocusPhase::Closed);
        assert!(!fx.surface.is_animating(0));
    }

    #[test]
    fn opening_becomes_open_after_transform() {
        let mut fx = Fixture::new();
        let t0 = fx.t0;
        let options = FocusOptions::default();
        let mut focus = FocusTransition::new(t0);
        assert!(focus.open(&mut fx.stage(), 1, t0, &options));

        fx.settle(&mut focus, after(t0, 300));
        assert_eq!(focus.phase(), FocusPhase::Opening);
        assert!(!focus.navigate(&mut fx.stage(), Step::Next, after(t0, 300), &options));

        fx.settle(&mut focus, after(t0, options.open_duration_ms));
        assert_eq!(focus.phase(), FocusPhase::Open);
        assert_eq!(fx.chrome.caption().map(|c| c.title.as_str()), Some("Untitled x"));
    }

    #[test]
    fn navigation_wraps_over_visible_cells() {
        let mut fx = Fixture::new();
        let t0 = fx.t0;
        let options = FocusOptions::default();
        let _ = fx.store.set_filter(Filter::from_value("painting"));
        let (a, b, c) = (0, 2, 3);

        let mut focus = FocusTransition::new(t0);
        assert!(focus.open(&mut fx.stage(), b, t0, &options));
        let mut now = after(t0, 1_000);
        fx.settle(&mut focus, now);

        for expected in [c, a] {
            assert!(focus.navigate(&mut fx.stage(), Step::Next, now, &options));
            assert_eq!(focus.session().unwrap().cell, expected);
            now += Duration::from_millis(1_000);
            fx.settle(&mut focus, now);
        }
        assert!(focus.navigate(&mut fx.stage(), Step::Previous, now, &options));
        assert_eq!(focus.session().unwrap().cell, c);
        assert_eq!(focus.phase(), FocusPhase::Open);
    }

    #[test]
    fn navigate_retargets_to_new_cell() {
        let mut fx = Fixture::new();
        let t0 = fx.t0;
        let options = FocusOptions::default();
        let mut focus = FocusTransition::new(t0);
        assert!(focus.open(&mut fx.stage(), 0, t0, &options));
        let now = after(t0, 1_000);
        fx.settle(&mut focus, now);
        assert!(focus.navigate(&mut fx.stage(), Step::Next, now, &options));

        let done = after(t0, 3_000);
        fx.settle(&mut focus, done);
        let stage = fx.stage();
        let source = stage
            .surface
            .screen_rect(stage.layout, 1, stage.pan_offset)
            .unwrap();
        let expected =
            focus_transform(source, stage.viewport, stage.pan_offset, &options);
        assert_eq!(focus.transform(done), expected);
        assert_eq!(fx.surface.visual(1).unwrap().opacity, 1.0);
        assert_eq!(fx.surface.visual(0).unwrap().opacity, options.sibling_opacity);
    }

    #[test]
    fn single_visible_cell_navigation_is_noop() {
        let mut fx = Fixture::new();
        let t0 = fx.t0;
        let options = FocusOptions::default();
        let _ = fx.store.set_filter(Filter::from_value("drawing"));
        let mut focus = FocusTransition::new(t0);
        assert!(focus.open(&mut fx.stage(), 1, t0, &options));
        let now = after(t0, 1_000);
        fx.settle(&mut focus, now);

        assert!(!focus.navigate(&mut fx.stage(), Step::Next, now, &options));
        assert_eq!(focus.session().unwrap().cell, 1);
    }

    #[test]
    fn hidden_cell_cannot_be_opened() {
        let mut fx = Fixture::new();
        let t0 = fx.t0;
        let _ = fx.store.set_filter(Filter::from_value("painting"));
        let mut focus = FocusTransition::new(t0);
        assert!(!focus.open(&mut fx.stage(), 1, t0, &FocusOptions::default()));
        assert!(focus.is_closed());
    }
}
