//! Command dispatch and raw input handling for [`Gallery`].

use glam::Vec2;
use web_time::Instant;

use super::{stage, Gallery, GalleryCommand};
use crate::focus::FocusPhase;
use crate::input::InputEvent;
use crate::options::ms;
use crate::pan::PointerKind;
use crate::store::{CellId, Filter, Step};

impl Gallery {
    /// Translate a raw input event and execute the resulting command.
    ///
    /// Returns whether the command changed anything.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) -> bool {
        let position = self.input.event_position(&event);
        let hovered = self.hit_test(position, now);
        match self.input.handle_event(event, hovered) {
            Some(command) => self.execute(command, now),
            None => false,
        }
    }

    /// Execute the command bound to `key`, if any.
    pub fn handle_key(&mut self, key: &str, now: Instant) -> bool {
        match self.input.handle_key_press(key) {
            Some(command) => self.execute(command, now),
            None => false,
        }
    }

    /// Execute one command. Commands that do not apply in the current
    /// mode are ignored.
    ///
    /// Returns whether the command changed anything.
    pub fn execute(&mut self, command: GalleryCommand, now: Instant) -> bool {
        log::trace!("execute {command:?}");
        let changed = match command {
            GalleryCommand::BeginDrag { position } => {
                let _ = self.pointer_moved(position);
                self.pan.begin_drag(PointerKind::Mouse, position, now)
            }
            GalleryCommand::BeginTouch { position } => {
                self.pan.begin_drag(PointerKind::Touch, position, now)
            }
            GalleryCommand::DragTo { position } => {
                let _ = self.pointer_moved(position);
                self.drag_to(position, now)
            }
            GalleryCommand::TouchTo { position } => self.drag_to(position, now),
            GalleryCommand::EndDrag | GalleryCommand::EndTouch => {
                self.end_drag(now)
            }
            GalleryCommand::Wheel { delta, shift } => self.pan.wheel(delta, shift),
            GalleryCommand::CenterView => self.center_view(),
            GalleryCommand::Hover { position } => self.pointer_moved(position),
            GalleryCommand::PointerLeft => self.pointer_left(),
            GalleryCommand::Click { target } => self.click(target, now),
            GalleryCommand::OpenFocus { cell } => self.open_focus(cell, now),
            GalleryCommand::CloseFocus => self.close_focus(now),
            GalleryCommand::Navigate { step } => self.navigate(step, now),
            GalleryCommand::SetFilter { filter } => self.set_filter(filter, now),
            GalleryCommand::OpenAbout => self.open_about(now),
            GalleryCommand::CloseAbout => self.close_about(now),
            GalleryCommand::Dismiss => self.dismiss(now),
            GalleryCommand::Resize { size } => self.resize(size),
        };
        self.sync_interaction();
        changed
    }

    /// Zoom into `cell`. Ignored unless both modes are Closed and the cell
    /// passes the filter.
    pub fn open_focus(&mut self, cell: CellId, now: Instant) -> bool {
        if !self.scatter.is_closed() {
            log::debug!("focus open ignored while scattered");
            return false;
        }
        let opened = self.focus.open(
            &mut stage!(self),
            cell,
            now,
            &self.options.focus,
        );
        self.sync_interaction();
        opened
    }

    /// Zoom back out to the grid.
    pub fn close_focus(&mut self, now: Instant) -> bool {
        self.focus.close(
            &mut stage!(self),
            now,
            &self.options.focus,
            &self.options.filter,
        )
    }

    /// Present the neighbouring visible artwork.
    pub fn navigate(&mut self, step: Step, now: Instant) -> bool {
        self.focus
            .navigate(&mut stage!(self), step, now, &self.options.focus)
    }

    /// Change the medium filter and animate every cell to its new
    /// visibility. Ignored while a mode is active or when unchanged.
    pub fn set_filter(&mut self, filter: Filter, now: Instant) -> bool {
        if !self.is_interactive() {
            log::debug!("filter change ignored while a mode is active");
            return false;
        }
        if !self.store.set_filter(filter) {
            return false;
        }
        log::debug!(
            "filter {}: {} visible",
            self.store.filter(),
            self.store.visible().count()
        );
        let options = &self.options.filter;
        stage!(self).restore_to_filter(
            now,
            ms(options.duration_ms),
            ms(options.stagger_ms),
            options.hidden_scale,
            |_| None,
        );
        true
    }

    /// Scatter the grid and show the about panel. Ignored unless both
    /// modes are Closed.
    pub fn open_about(&mut self, now: Instant) -> bool {
        if !self.focus.is_closed() {
            log::debug!("about open ignored while focused");
            return false;
        }
        let opened =
            self.scatter
                .open(&mut stage!(self), now, &self.options.scatter);
        self.sync_interaction();
        opened
    }

    /// Hide the about panel and restore the grid.
    pub fn close_about(&mut self, now: Instant) -> bool {
        self.scatter.close(
            &mut stage!(self),
            now,
            &self.options.scatter,
            &self.options.filter,
        )
    }

    /// Close the focus view if it is open, otherwise the about panel.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if matches!(self.focus.phase(), FocusPhase::Opening | FocusPhase::Open) {
            return self.close_focus(now);
        }
        self.close_about(now)
    }

    /// Click classification: open a cell from the grid, close the focus
    /// view from anywhere but the focused cell.
    fn click(&mut self, target: Option<CellId>, now: Instant) -> bool {
        let _ = self.end_drag(now);
        if !self.scatter.is_closed() {
            return false;
        }
        match self.focus.phase() {
            FocusPhase::Closed => {
                target.is_some_and(|cell| self.open_focus(cell, now))
            }
            FocusPhase::Opening | FocusPhase::Open => {
                let focused = self.focus.session().map(|s| s.cell);
                if target.is_some() && target == focused {
                    return false;
                }
                self.close_focus(now)
            }
            FocusPhase::Closing => false,
        }
    }

    fn drag_to(&mut self, position: Vec2, now: Instant) -> bool {
        if !self.pan.is_dragging() {
            return false;
        }
        self.pan.drag_to(position, now);
        true
    }

    fn end_drag(&mut self, now: Instant) -> bool {
        if !self.pan.is_dragging() {
            return false;
        }
        self.pan.end_drag(now);
        true
    }

    fn center_view(&mut self) -> bool {
        if !self.pan.is_enabled() {
            return false;
        }
        self.pan.center();
        true
    }

    /// Parallax target follows the pointer unless a mode froze it.
    fn pointer_moved(&mut self, position: Vec2) -> bool {
        if !self.is_interactive() {
            return false;
        }
        self.parallax.pointer_moved(position, self.viewport);
        true
    }

    fn pointer_left(&mut self) -> bool {
        if !self.is_interactive() {
            return false;
        }
        self.parallax.pointer_left();
        true
    }

    fn resize(&mut self, size: Vec2) -> bool {
        if size == self.viewport {
            return false;
        }
        self.viewport = size;
        self.pan.set_bounds(self.layout.surface_size(), size);
        log::debug!("viewport resized to {size:?}");
        true
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::gallery::Cursor;
    use crate::options::Options;
    use crate::scatter::ScatterPhase;
    use crate::store::tests::record;
    use crate::store::ArtworkStore;

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 800.0);

    /// 27 artworks, 10 of them paintings.
    fn collection() -> ArtworkStore {
        ArtworkStore::new(
            (0..27)
                .map(|i| {
                    let medium = match i {
                        i if i % 2 == 0 && i < 20 => "painting",
                        i if i % 2 == 1 => "drawing",
                        _ => "photograph",
                    };
                    record(&format!("work-{i:02}"), medium)
                })
                .collect(),
        )
    }

    fn gallery(options: Options) -> (Gallery, Instant) {
        let t0 = Instant::now();
        (Gallery::new(collection(), VIEWPORT, options, t0), t0)
    }

    fn still_options() -> Options {
        let mut options = Options::default();
        options.parallax.enabled = false;
        options.scatter.seed = Some(11);
        options
    }

    fn later(now: Instant) -> Instant {
        now + Duration::from_secs(10)
    }

    /// Viewport position of a cell's center in the grid view.
    fn on_screen(gallery: &Gallery, cell: CellId) -> Vec2 {
        gallery.layout().cell_rect(cell).unwrap().center() - gallery.pan_offset()
    }

    #[test]
    fn painting_filter_hides_seventeen() {
        let (mut g, t0) = gallery(still_options());
        assert_eq!(g.filter_options().len(), 4);

        assert!(g.execute(
            GalleryCommand::SetFilter {
                filter: Filter::from_value("painting")
            },
            t0
        ));
        // Flags commit only once each cell's tween completes.
        g.tick(t0 + Duration::from_millis(100));
        assert!(!g.surface().is_filtered_out(1));

        let done = later(t0);
        g.tick(done);
        let frame = g.frame(done);
        let shown: Vec<_> =
            frame.cells.iter().filter(|c| c.visual.opacity == 1.0).collect();
        let hidden: Vec<_> = frame.cells.iter().filter(|c| c.filtered_out).collect();
        assert_eq!(shown.len(), 10);
        assert_eq!(hidden.len(), 17);
        assert!(hidden
            .iter()
            .all(|c| c.visual.opacity == 0.0 && c.visual.scale == 0.9));

        // Back to all: nothing stays hidden.
        assert!(g.set_filter(Filter::All, done));
        let done = later(done);
        g.tick(done);
        assert!((0..27).all(|cell| !g.surface().is_filtered_out(cell)));
        assert!(!g.set_filter(Filter::All, done));
    }

    #[test]
    fn click_opens_and_backdrop_closes() {
        let (mut g, t0) = gallery(still_options());
        let target = on_screen(&g, 4);
        let down = InputEvent::PointerDown {
            x: target.x,
            y: target.y,
        };
        let up = InputEvent::PointerUp {
            x: target.x,
            y: target.y,
        };
        assert!(!g.handle_input(down, t0));
        assert!(g.handle_input(up, t0));
        assert_eq!(g.focused_cell(), Some(4));
        assert_eq!(g.focus_phase(), FocusPhase::Opening);
        assert!(!g.pan_enabled());

        let open = later(t0);
        g.tick(open);
        assert_eq!(g.focus_phase(), FocusPhase::Open);
        let frame = g.frame(open);
        assert_eq!(frame.caption.as_ref().map(|c| c.title.as_str()), Some("Untitled work-04"));
        assert_eq!(frame.cursor, Cursor::Default);

        // The focused cell is hit through the zoom and does not close.
        let center = VIEWPORT * 0.5 + Vec2::new(0.0, g.options().focus.caption_offset);
        assert_eq!(g.hit_test(center, open), Some(4));
        let _ = g.handle_input(InputEvent::PointerDown { x: center.x, y: center.y }, open);
        assert!(!g.handle_input(InputEvent::PointerUp { x: center.x, y: center.y }, open));
        assert_eq!(g.focus_phase(), FocusPhase::Open);

        // A corner of the viewport is backdrop.
        let _ = g.handle_input(InputEvent::PointerDown { x: 2.0, y: 2.0 }, open);
        assert!(g.handle_input(InputEvent::PointerUp { x: 2.0, y: 2.0 }, open));
        assert_eq!(g.focus_phase(), FocusPhase::Closing);
        assert!(!g.pan_enabled());

        let closed = later(open);
        g.tick(closed);
        assert_eq!(g.focus_phase(), FocusPhase::Closed);
        assert!(g.pan_enabled());
        assert!(g.frame(closed).surface_transform.is_identity());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let (mut g, t0) = gallery(still_options());
        assert!(g.open_focus(2, t0));
        assert!(!g.open_focus(3, t0));
        assert!(g.close_focus(t0 + Duration::from_millis(100)));
        assert!(!g.close_focus(t0 + Duration::from_millis(120)));

        let done = later(t0);
        g.tick(done);
        assert!(!g.close_focus(done));
        assert!((0..27).all(|cell| g.surface().visual(cell).unwrap().opacity == 1.0));
    }

    #[test]
    fn keys_navigate_and_close() {
        let (mut g, t0) = gallery(still_options());
        let _ = g.set_filter(Filter::from_value("painting"), t0);
        let t1 = later(t0);
        g.tick(t1);

        assert!(g.open_focus(18, t1));
        let t2 = later(t1);
        g.tick(t2);
        assert!(g.handle_key("ArrowRight", t2));
        assert_eq!(g.focused_cell(), Some(0));
        assert!(g.handle_key("ArrowUp", t2));
        assert_eq!(g.focused_cell(), Some(18));
        assert!(!g.handle_key("KeyQ", t2));

        assert!(g.handle_key("Escape", t2));
        g.tick(later(t2));
        assert_eq!(g.focus_phase(), FocusPhase::Closed);
        assert!(g.surface().is_filtered_out(1));
    }

    #[test]
    fn modes_exclude_each_other() {
        let (mut g, t0) = gallery(still_options());
        assert!(g.open_focus(0, t0));
        assert!(!g.open_about(t0));
        assert!(!g.set_filter(Filter::from_value("drawing"), t0));
        assert!(!g.execute(GalleryCommand::Wheel { delta: Vec2::new(0.0, 40.0), shift: false }, t0));

        let _ = g.close_focus(t0);
        g.tick(later(t0));
        let t1 = later(t0);
        assert!(g.open_about(t1));
        assert_eq!(g.scatter_phase(), ScatterPhase::Open);
        assert!(!g.open_focus(0, t1));
        assert!(!g.set_filter(Filter::from_value("drawing"), t1));
        assert!(!g.execute(GalleryCommand::BeginDrag { position: Vec2::ZERO }, t1));
        assert_eq!(g.frame(t1).cursor, Cursor::Default);
    }

    #[test]
    fn escape_restores_scatter_exactly() {
        let (mut g, t0) = gallery(still_options());
        let before: Vec<_> = (0..27).map(|c| g.surface().visual(c).unwrap()).collect();

        assert!(g.execute(GalleryCommand::OpenAbout, t0));
        let t1 = later(t0);
        g.tick(t1);
        assert!(g.frame(t1).about_opacity > 0.99);
        assert_ne!(g.surface().visual(0).unwrap(), before[0]);

        assert!(g.handle_key("Escape", t1));
        assert_eq!(g.scatter_phase(), ScatterPhase::Closing);
        assert!(!g.pan_enabled());

        let t2 = later(t1);
        g.tick(t2);
        assert_eq!(g.scatter_phase(), ScatterPhase::Closed);
        assert!(g.pan_enabled());
        let after: Vec<_> = (0..27).map(|c| g.surface().visual(c).unwrap()).collect();
        assert_eq!(before, after);
        assert_eq!(g.frame(t2).filter_bar_opacity, 1.0);
    }

    #[test]
    fn parallax_freezes_while_focused() {
        let (mut g, t0) = gallery(Options::default());
        assert!(g.execute(GalleryCommand::Hover { position: Vec2::new(1280.0, 800.0) }, t0));
        g.tick(t0);
        let moved = g.surface().visual(2).unwrap().offset;
        assert!(moved.x < 0.0 && moved.y < 0.0);
        assert_ne!(g.frame(t0).grid_tilt, Vec2::ZERO);

        assert!(g.open_focus(5, t0));
        let tilt = g.frame(t0).grid_tilt;
        assert!(!g.execute(GalleryCommand::Hover { position: Vec2::ZERO }, t0));
        g.tick(t0 + Duration::from_millis(16));
        assert_eq!(g.frame(t0).grid_tilt, tilt);
    }

    #[test]
    fn drag_pans_and_hides_hint() {
        let (mut g, t0) = gallery(still_options());
        let start = g.pan_offset();
        // Gap between the first two columns, far from any cell edge.
        let gap = g.layout().cell_rect(0).unwrap().max() + Vec2::new(10.0, -100.0)
            - start;
        assert_eq!(g.hit_test(gap, t0), None);

        assert!(g.handle_input(InputEvent::PointerDown { x: gap.x, y: gap.y }, t0));
        assert_eq!(g.frame(t0).cursor, Cursor::Grabbing);
        assert!(g.handle_input(
            InputEvent::PointerMoved { x: gap.x - 100.0, y: gap.y },
            t0 + Duration::from_millis(500)
        ));
        assert!(g.handle_input(
            InputEvent::PointerUp { x: gap.x - 100.0, y: gap.y },
            t0 + Duration::from_millis(900)
        ));
        assert_eq!(g.pan_offset(), start + Vec2::new(150.0, 0.0));
        assert!(!g.frame(t0).scroll_hint_visible);
    }

    #[test]
    fn empty_gallery_is_inert() {
        let t0 = Instant::now();
        let mut g = Gallery::load_or_empty(
            "/nonexistent/artworks.json",
            VIEWPORT,
            Options::default(),
            t0,
        );
        assert!(g.store().is_empty());
        assert!(!g.open_focus(0, t0));
        assert!(g.open_about(t0));
        g.tick(later(t0));
        assert!(g.close_about(later(t0)));
        g.tick(later(later(t0)));
        assert_eq!(g.scatter_phase(), ScatterPhase::Closed);
        assert!(g.frame(t0).cells.is_empty());
    }
}
