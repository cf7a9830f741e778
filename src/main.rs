//! Headless demo: loads an artwork collection and replays a scripted
//! session against the gallery engine, logging the state after each step.
//!
//! ```text
//! RUST_LOG=info atelier <artworks.json | https://…> [options.toml]
//! ```

use std::path::Path;

use atelier::gallery::{Gallery, GalleryCommand};
use atelier::options::Options;
use atelier::store::{Filter, Step};
use glam::Vec2;
use web_time::{Duration, Instant};

/// Synthetic frame interval (60 Hz).
const FRAME: Duration = Duration::from_micros(16_667);

/// Viewport the session is replayed in.
const VIEWPORT: Vec2 = Vec2::new(1440.0, 900.0);

/// Host clock stepped in whole frames.
struct Clock {
    now: Instant,
}

impl Clock {
    /// Tick the gallery for `frames` frames.
    fn run(&mut self, gallery: &mut Gallery, frames: u32) {
        for _ in 0..frames {
            self.now += FRAME;
            gallery.tick(self.now);
        }
    }

    /// Tick until nothing is animating, at most ten seconds.
    fn settle(&mut self, gallery: &mut Gallery) {
        for _ in 0..600 {
            if !gallery.is_animating(self.now) {
                break;
            }
            self.run(gallery, 1);
        }
    }
}

fn report(step: &str, gallery: &Gallery, now: Instant) {
    let frame = gallery.frame(now);
    let shown = frame.cells.iter().filter(|c| !c.filtered_out).count();
    log::info!(
        "{step}: focus {:?}, scatter {:?}, pan {:?}, zoom {:.3}, {shown}/{} cells shown, caption {:?}",
        frame.focus_phase,
        frame.scatter_phase,
        frame.pan_offset,
        frame.surface_transform.scale,
        frame.cells.len(),
        frame.caption.map(|c| c.title),
    );
}

fn load_options(path: Option<&str>) -> Options {
    let Some(path) = path else {
        return Options::default();
    };
    match Options::load(Path::new(path)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(source) = args.next() else {
        log::error!("Usage: atelier <artworks.json | URL> [options.toml]");
        std::process::exit(1);
    };
    let options_path = args.next();
    let options = load_options(options_path.as_deref());

    let mut clock = Clock {
        now: Instant::now(),
    };
    let mut gallery =
        Gallery::load_or_empty(&source, VIEWPORT, options, clock.now);
    report("loaded", &gallery, clock.now);

    let _ = gallery.execute(GalleryCommand::CenterView, clock.now);
    clock.settle(&mut gallery);
    report("centered", &gallery, clock.now);

    // Drag left across the surface and let the momentum settle.
    let start = VIEWPORT * 0.5;
    let _ = gallery
        .execute(GalleryCommand::BeginDrag { position: start }, clock.now);
    for i in 1..=10 {
        clock.run(&mut gallery, 1);
        let position = start - Vec2::new(i as f32 * 24.0, 0.0);
        let _ = gallery.execute(GalleryCommand::DragTo { position }, clock.now);
    }
    let _ = gallery.execute(GalleryCommand::EndDrag, clock.now);
    clock.settle(&mut gallery);
    report("dragged", &gallery, clock.now);

    // Focus the first visible artwork, step through two neighbours, close.
    let first = gallery.store().visible().next();
    if let Some(cell) = first {
        let _ = gallery.execute(GalleryCommand::OpenFocus { cell }, clock.now);
        clock.settle(&mut gallery);
        clock.run(&mut gallery, 30);
        report("focused", &gallery, clock.now);

        for _ in 0..2 {
            let _ = gallery.execute(
                GalleryCommand::Navigate { step: Step::Next },
                clock.now,
            );
            clock.run(&mut gallery, 45);
            report("navigated", &gallery, clock.now);
        }

        let _ = gallery.handle_key("Escape", clock.now);
        clock.settle(&mut gallery);
        report("closed", &gallery, clock.now);
    }

    // Filter to the first medium, then back to everything.
    if let Some(filter) = gallery.filter_options().into_iter().nth(1) {
        let _ = gallery.execute(GalleryCommand::SetFilter { filter }, clock.now);
        clock.settle(&mut gallery);
        report("filtered", &gallery, clock.now);
        let _ = gallery.execute(
            GalleryCommand::SetFilter {
                filter: Filter::All,
            },
            clock.now,
        );
        clock.settle(&mut gallery);
        report("unfiltered", &gallery, clock.now);
    }

    // About: scatter and restore.
    let _ = gallery.execute(GalleryCommand::OpenAbout, clock.now);
    clock.run(&mut gallery, 90);
    report("about", &gallery, clock.now);
    let _ = gallery.execute(GalleryCommand::CloseAbout, clock.now);
    clock.settle(&mut gallery);
    report("restored", &gallery, clock.now);
}
