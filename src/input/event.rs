/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`GalleryCommand`](crate::gallery::GalleryCommand)
/// values. Positions are viewport pixels.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(
///     InputEvent::PointerMoved { x: 100.0, y: 200.0 },
///     gallery.hit_test(Vec2::new(100.0, 200.0), now),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary mouse button pressed.
    PointerDown {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Mouse moved, pressed or not.
    PointerMoved {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Primary mouse button released.
    PointerUp {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// Mouse left the viewport.
    PointerLeft,
    /// A finger touched down.
    TouchStart {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// The tracked finger moved.
    TouchMoved {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// The tracked finger lifted.
    TouchEnd,
    /// Wheel or trackpad scroll, in pixels.
    Wheel {
        /// Horizontal delta.
        dx: f32,
        /// Vertical delta.
        dy: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
    /// The viewport was resized.
    Resized {
        /// New width in pixels.
        width: f32,
        /// New height in pixels.
        height: f32,
    },
}
