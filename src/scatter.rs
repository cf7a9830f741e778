//! Scatter mode: cells fly apart behind the about panel and later return
//! to exactly where they were.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use web_time::Instant;

use crate::options::{ms, FilterOptions, ScatterOptions};
use crate::stage::Stage;
use crate::store::CellId;
use crate::surface::{CellMotion, CellVisual};

/// Lifecycle of the scatter layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterPhase {
    /// Grid layout.
    Closed,
    /// Cells scattered (or scattering), about panel shown.
    Open,
    /// Cells returning to their snapshot.
    Closing,
}

/// A cell's offset captured when the scatter opened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterEntry {
    /// The cell.
    pub cell: CellId,
    /// Offset to restore on close.
    pub original_offset: Vec2,
}

/// Random displacement of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    /// Added to the cell's original offset.
    pub offset: Vec2,
    /// Rotation in degrees.
    pub rotation: f32,
}

/// Displacement for a cell centered at `cell_center` (viewport
/// coordinates).
///
/// Cells on the right half are pushed right, the others left. Cells close
/// to the viewport center travel farther; the push never exceeds
/// `max_push`.
pub fn displacement<R: Rng>(
    cell_center: Vec2,
    viewport: Vec2,
    options: &ScatterOptions,
    rng: &mut R,
) -> Displacement {
    let center = viewport * 0.5;
    let half_diagonal = viewport.length() * 0.5;
    let distance = cell_center.distance(center);
    let ratio = if half_diagonal > 0.0 {
        (distance / half_diagonal).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let closeness = 1.0 - ratio;

    let jitter = if options.jitter > 0.0 {
        rng.random_range(0.0..options.jitter)
    } else {
        0.0
    };
    let magnitude = (options.min_push
        + closeness * (options.max_push - options.min_push)
        + jitter)
        .min(options.max_push);
    let direction = if cell_center.x >= center.x { 1.0 } else { -1.0 };

    Displacement {
        offset: Vec2::new(
            direction * magnitude,
            spread(rng, options.vertical_jitter),
        ),
        rotation: spread(rng, options.max_rotation),
    }
}

/// Uniform sample in `[-bound, bound]`.
fn spread<R: Rng>(rng: &mut R, bound: f32) -> f32 {
    let bound = bound.abs();
    if bound > 0.0 {
        rng.random_range(-bound..=bound)
    } else {
        0.0
    }
}

/// Scatter state machine and the offsets it must restore.
#[derive(Debug, Clone)]
pub struct ScatterController {
    phase: ScatterPhase,
    snapshot: Vec<ScatterEntry>,
    rng: StdRng,
}

impl ScatterController {
    /// A closed controller, seeded from `seed` or from the OS.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            phase: ScatterPhase::Closed,
            snapshot: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ScatterPhase {
        self.phase
    }

    /// Whether the grid layout is fully restored.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.phase == ScatterPhase::Closed
    }

    /// Offsets captured by the last open; empty once Closed.
    #[must_use]
    pub fn snapshot(&self) -> &[ScatterEntry] {
        &self.snapshot
    }

    /// Scatter every cell and show the about panel.
    ///
    /// Rejected unless Closed. Mutual exclusion with the focus view is the
    /// caller's concern.
    pub fn open(
        &mut self,
        stage: &mut Stage<'_>,
        now: Instant,
        options: &ScatterOptions,
    ) -> bool {
        if self.phase != ScatterPhase::Closed {
            log::debug!("scatter open ignored in {:?}", self.phase);
            return false;
        }

        self.snapshot = (0..stage.surface.len())
            .filter_map(|cell| {
                let visual = stage.surface.visual_at(cell, now)?;
                Some(ScatterEntry {
                    cell,
                    original_offset: visual.offset,
                })
            })
            .collect();

        for (i, entry) in self.snapshot.iter().enumerate() {
            let Some(current) = stage.surface.visual_at(entry.cell, now) else {
                continue;
            };
            let Some(rect) = stage.surface.screen_rect(
                stage.layout,
                entry.cell,
                stage.pan_offset,
            ) else {
                continue;
            };
            let d = displacement(rect.center(), stage.viewport, options, &mut self.rng);
            let to = CellVisual {
                offset: entry.original_offset + d.offset,
                scale: options.scattered_scale,
                rotation: d.rotation,
                opacity: current.opacity.min(options.scattered_opacity),
            };
            let motion =
                CellMotion::new(ms(options.duration_ms), ms(options.stagger_ms) * i as u32);
            stage.surface.animate(entry.cell, now, to, motion);
        }

        let fade = ms(options.panel_fade_ms);
        stage.chrome.hide_filter_bar(now, fade);
        stage.chrome.set_about_panel(now, true, fade);
        self.phase = ScatterPhase::Open;
        log::debug!("scatter open, {} cells", self.snapshot.len());
        true
    }

    /// Send every cell back to its snapshot offset and hide the about
    /// panel. Rejected unless Open.
    pub fn close(
        &mut self,
        stage: &mut Stage<'_>,
        now: Instant,
        options: &ScatterOptions,
        filter: &FilterOptions,
    ) -> bool {
        if self.phase != ScatterPhase::Open {
            log::debug!("scatter close ignored in {:?}", self.phase);
            return false;
        }
        let snapshot = &self.snapshot;
        stage.restore_to_filter(
            now,
            ms(options.restore_duration_ms),
            ms(options.stagger_ms),
            filter.hidden_scale,
            |cell| {
                snapshot
                    .iter()
                    .find(|entry| entry.cell == cell)
                    .map(|entry| entry.original_offset)
            },
        );

        let fade = ms(options.panel_fade_ms);
        stage.chrome.set_about_panel(now, false, fade);
        stage
            .chrome
            .show_filter_bar(now, fade, ms(options.chrome_delay_ms));
        self.phase = ScatterPhase::Closing;
        log::debug!("scatter close");
        true
    }

    /// Finish the restore once every cell has landed.
    pub fn tick(&mut self, stage: &Stage<'_>, now: Instant) {
        if self.phase == ScatterPhase::Closing && stage.surface.is_settled(now) {
            self.phase = ScatterPhase::Closed;
            self.snapshot.clear();
            log::debug!("scatter closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::chrome::Chrome;
    use crate::layout::GridLayout;
    use crate::options::{LayoutMode, LayoutOptions};
    use crate::store::tests::record;
    use crate::store::{ArtworkStore, Filter};
    use crate::surface::Surface;

    fn store(n: usize) -> ArtworkStore {
        ArtworkStore::new(
            (0..n)
                .map(|i| {
                    let medium = if i % 3 == 0 { "drawing" } else { "painting" };
                    record(&format!("art-{i}"), medium)
                })
                .collect(),
        )
    }

    #[test]
    fn pushes_away_from_center_within_bounds() {
        let options = ScatterOptions::default();
        let viewport = Vec2::new(1200.0, 800.0);
        let mut rng = StdRng::seed_from_u64(7);
        for x in [0.0, 300.0, 599.0, 600.0, 900.0, 1200.0] {
            for y in [0.0, 400.0, 800.0] {
                let d = displacement(Vec2::new(x, y), viewport, &options, &mut rng);
                if x >= 600.0 {
                    assert!(d.offset.x > 0.0);
                } else {
                    assert!(d.offset.x < 0.0);
                }
                assert!(d.offset.x.abs() >= options.min_push);
                assert!(d.offset.x.abs() <= options.max_push);
                assert!(d.offset.y.abs() <= options.vertical_jitter);
                assert!(d.rotation.abs() <= options.max_rotation);
            }
        }
    }

    #[test]
    fn zero_jitter_and_degenerate_viewport() {
        let options = ScatterOptions {
            jitter: 0.0,
            vertical_jitter: 0.0,
            max_rotation: 0.0,
            ..ScatterOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let d = displacement(Vec2::new(-5.0, 3.0), Vec2::ZERO, &options, &mut rng);
        assert_eq!(d.offset, Vec2::new(-options.min_push, 0.0));
        assert_eq!(d.rotation, 0.0);
    }

    #[test]
    fn restore_is_bit_identical() {
        let t0 = Instant::now();
        let store = store(12);
        let layout = GridLayout::new(
            store.len(),
            &LayoutOptions {
                mode: LayoutMode::Fixed { columns: 4 },
                ..LayoutOptions::default()
            },
        );
        let mut surface = Surface::new(store.len());
        let mut chrome = Chrome::new(t0, Duration::from_millis(200));
        for cell in 0..store.len() {
            let offset = Vec2::new(cell as f32 * 0.1 + 0.3, -(cell as f32) / 7.0);
            surface.set_offset(cell, offset);
        }
        let before: Vec<_> = (0..store.len())
            .map(|cell| surface.visual(cell).unwrap().offset)
            .collect();

        let options = ScatterOptions {
            seed: Some(42),
            ..ScatterOptions::default()
        };
        let mut scatter = ScatterController::new(options.seed);
        let mut stage = Stage {
            store: &store,
            layout: &layout,
            surface: &mut surface,
            chrome: &mut chrome,
            viewport: Vec2::new(1280.0, 800.0),
            pan_offset: Vec2::new(100.0, 50.0),
        };
        assert!(scatter.open(&mut stage, t0, &options));
        assert_eq!(scatter.snapshot().len(), store.len());
        assert!(!scatter.open(&mut stage, t0, &options));

        let mid = t0 + Duration::from_millis(2_000);
        let _ = stage.surface.tick(mid);
        assert!(stage.surface.visual(0).unwrap().offset != before[0]);
        assert!(scatter.close(&mut stage, mid, &options, &FilterOptions::default()));

        let done = mid + Duration::from_millis(5_000);
        let _ = stage.surface.tick(done);
        scatter.tick(&stage, done);
        assert_eq!(scatter.phase(), ScatterPhase::Closed);
        assert!(scatter.snapshot().is_empty());
        for (cell, offset) in before.iter().enumerate() {
            let visual = stage.surface.visual(cell).unwrap();
            assert_eq!(visual.offset, *offset);
            assert_eq!(visual.rotation, 0.0);
            assert_eq!(visual.scale, 1.0);
            assert_eq!(visual.opacity, 1.0);
        }
        assert_eq!(stage.chrome.about_panel_opacity(done), 0.0);
    }

    #[test]
    fn closing_respects_active_filter() {
        let t0 = Instant::now();
        let mut store = store(6);
        let _ = store.set_filter(Filter::from_value("painting"));
        let layout = GridLayout::new(store.len(), &LayoutOptions::default());
        let mut surface = Surface::new(store.len());
        let mut chrome = Chrome::new(t0, Duration::from_millis(200));
        let options = ScatterOptions::default();
        let mut scatter = ScatterController::new(Some(3));
        let mut stage = Stage {
            store: &store,
            layout: &layout,
            surface: &mut surface,
            chrome: &mut chrome,
            viewport: Vec2::new(1000.0, 700.0),
            pan_offset: Vec2::ZERO,
        };

        assert!(scatter.open(&mut stage, t0, &options));
        let visual = stage.surface.visual_at(1, t0 + Duration::from_secs(5)).unwrap();
        assert_eq!(visual.opacity, options.scattered_opacity);

        let t1 = t0 + Duration::from_millis(100);
        assert!(scatter.close(&mut stage, t1, &options, &FilterOptions::default()));
        scatter.tick(&stage, t1);
        assert_eq!(scatter.phase(), ScatterPhase::Closing);

        let done = t1 + Duration::from_secs(5);
        let _ = stage.surface.tick(done);
        scatter.tick(&stage, done);
        assert!(scatter.is_closed());
        assert!(stage.surface.is_filtered_out(0));
        assert_eq!(stage.surface.visual(0).unwrap().opacity, 0.0);
        assert_eq!(stage.surface.visual(0).unwrap().scale, 0.9);
        assert!(!stage.surface.is_filtered_out(1));
    }

    #[test]
    fn close_without_open_is_ignored() {
        let t0 = Instant::now();
        let store = store(2);
        let layout = GridLayout::new(store.len(), &LayoutOptions::default());
        let mut surface = Surface::new(store.len());
        let mut chrome = Chrome::new(t0, Duration::from_millis(200));
        let mut scatter = ScatterController::new(None);
        let mut stage = Stage {
            store: &store,
            layout: &layout,
            surface: &mut surface,
            chrome: &mut chrome,
            viewport: Vec2::new(1000.0, 700.0),
            pan_offset: Vec2::ZERO,
        };
        assert!(!scatter.close(
            &mut stage,
            t0,
            &ScatterOptions::default(),
            &FilterOptions::default()
        ));
        assert!(scatter.is_closed());
    }
}
