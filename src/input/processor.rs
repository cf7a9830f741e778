//! Converts raw platform events into gallery commands.
//!
//! The `InputProcessor` owns all transient input state (pointer tracking,
//! click-versus-drag detection, modifier keys) and the key-binding map.
//! It is the only thing that sits between raw window events and the
//! gallery's [`execute`](crate::gallery::Gallery::execute) method.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use super::press::{PressTracker, Release};
use crate::gallery::GalleryCommand;
use crate::options::KeybindingOptions;
use crate::pan::PointerKind;
use crate::store::{CellId, Step};

/// Serializable tag for the key-bound subset of [`GalleryCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Close the focus view, or the about panel.
    Close,
    /// Focus the next visible artwork.
    Next,
    /// Focus the previous visible artwork.
    Previous,
}

impl KeyAction {
    /// Convert to the corresponding [`GalleryCommand`].
    fn to_command(self) -> GalleryCommand {
        match self {
            Self::Close => GalleryCommand::Dismiss,
            Self::Next => GalleryCommand::Navigate { step: Step::Next },
            Self::Previous => GalleryCommand::Navigate {
                step: Step::Previous,
            },
        }
    }
}

/// Converts raw input events into [`GalleryCommand`]s.
///
/// # Usage
///
/// ```ignore
/// let hovered = gallery.hit_test(position, now);
/// if let Some(cmd) = input_processor.handle_event(event, hovered) {
///     let _ = gallery.execute(cmd, now);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Pointer position and press classification.
    press: PressTracker,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Last known pointer position in viewport pixels.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.press.pointer
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<GalleryCommand> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Where `event` happens: its own position, or the last known pointer
    /// position for events that carry none.
    #[must_use]
    pub fn event_position(&self, event: &InputEvent) -> Vec2 {
        match *event {
            InputEvent::PointerDown { x, y }
            | InputEvent::PointerMoved { x, y }
            | InputEvent::PointerUp { x, y }
            | InputEvent::TouchStart { x, y }
            | InputEvent::TouchMoved { x, y } => Vec2::new(x, y),
            _ => self.press.pointer,
        }
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// `hovered` is the cell under the event position (from
    /// [`Gallery::hit_test`](crate::gallery::Gallery::hit_test)).
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        hovered: Option<CellId>,
    ) -> Option<GalleryCommand> {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.press_down(PointerKind::Mouse, Vec2::new(x, y), hovered)
            }
            InputEvent::TouchStart { x, y } => {
                self.press_down(PointerKind::Touch, Vec2::new(x, y), hovered)
            }
            InputEvent::PointerMoved { x, y } => {
                let position = Vec2::new(x, y);
                self.press.moved(position);
                if self.press.is_background_press(PointerKind::Mouse) {
                    Some(GalleryCommand::DragTo { position })
                } else {
                    Some(GalleryCommand::Hover { position })
                }
            }
            InputEvent::TouchMoved { x, y } => {
                let position = Vec2::new(x, y);
                self.press.moved(position);
                self.press
                    .is_background_press(PointerKind::Touch)
                    .then_some(GalleryCommand::TouchTo { position })
            }
            InputEvent::PointerUp { x, y } => {
                self.press.pointer = Vec2::new(x, y);
                Self::release_command(self.press.release(hovered))
            }
            InputEvent::TouchEnd => {
                Self::release_command(self.press.release(hovered))
            }
            InputEvent::PointerLeft => {
                if self.press.is_background_press(PointerKind::Mouse) {
                    self.press.cancel();
                    return Some(GalleryCommand::EndDrag);
                }
                self.press.cancel();
                Some(GalleryCommand::PointerLeft)
            }
            InputEvent::Wheel { dx, dy } => Some(GalleryCommand::Wheel {
                delta: Vec2::new(dx, dy),
                shift: self.shift_pressed,
            }),
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
                None
            }
            InputEvent::Resized { width, height } => {
                Some(GalleryCommand::Resize {
                    size: Vec2::new(width, height),
                })
            }
        }
    }

    /// Press down: background presses start a pan immediately; cell
    /// presses wait for the release.
    fn press_down(
        &mut self,
        kind: PointerKind,
        position: Vec2,
        hovered: Option<CellId>,
    ) -> Option<GalleryCommand> {
        self.press.begin(kind, position, hovered);
        if hovered.is_some() {
            return None;
        }
        Some(match kind {
            PointerKind::Mouse => GalleryCommand::BeginDrag { position },
            PointerKind::Touch => GalleryCommand::BeginTouch { position },
        })
    }

    /// Convert a classified release into a command (if any).
    fn release_command(release: Release) -> Option<GalleryCommand> {
        match release {
            Release::NoAction => None,
            Release::Background { kind, moved: true } => Some(match kind {
                PointerKind::Mouse => GalleryCommand::EndDrag,
                PointerKind::Touch => GalleryCommand::EndTouch,
            }),
            Release::Background { moved: false, .. } => {
                Some(GalleryCommand::Click { target: None })
            }
            Release::Cell(cell) => {
                Some(GalleryCommand::Click { target: Some(cell) })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_drag_produces_pan_commands() {
        let mut input = InputProcessor::new();
        let down = input.handle_event(InputEvent::PointerDown { x: 10.0, y: 10.0 }, None);
        assert_eq!(
            down,
            Some(GalleryCommand::BeginDrag {
                position: Vec2::new(10.0, 10.0)
            })
        );
        let moved =
            input.handle_event(InputEvent::PointerMoved { x: 60.0, y: 10.0 }, None);
        assert_eq!(
            moved,
            Some(GalleryCommand::DragTo {
                position: Vec2::new(60.0, 10.0)
            })
        );
        let up = input.handle_event(InputEvent::PointerUp { x: 60.0, y: 10.0 }, None);
        assert_eq!(up, Some(GalleryCommand::EndDrag));
    }

    #[test]
    fn still_background_press_is_a_click() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::PointerDown { x: 10.0, y: 10.0 }, None);
        let _ = input.handle_event(InputEvent::PointerMoved { x: 11.0, y: 11.0 }, None);
        let up = input.handle_event(InputEvent::PointerUp { x: 11.0, y: 11.0 }, None);
        assert_eq!(up, Some(GalleryCommand::Click { target: None }));
    }

    #[test]
    fn cell_click_requires_same_cell_and_no_drag() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::PointerDown { x: 5.0, y: 5.0 }, Some(3)),
            None
        );
        let up = input.handle_event(InputEvent::PointerUp { x: 5.0, y: 5.0 }, Some(3));
        assert_eq!(up, Some(GalleryCommand::Click { target: Some(3) }));

        let _ = input.handle_event(InputEvent::PointerDown { x: 5.0, y: 5.0 }, Some(3));
        let up = input.handle_event(InputEvent::PointerUp { x: 5.0, y: 5.0 }, Some(4));
        assert_eq!(up, None);

        let _ = input.handle_event(InputEvent::PointerDown { x: 5.0, y: 5.0 }, Some(3));
        let _ = input.handle_event(InputEvent::PointerMoved { x: 50.0, y: 5.0 }, Some(3));
        let up = input.handle_event(InputEvent::PointerUp { x: 5.0, y: 5.0 }, Some(3));
        assert_eq!(up, None);
    }

    #[test]
    fn touch_on_cell_does_not_pan() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::TouchStart { x: 5.0, y: 5.0 }, Some(0)),
            None
        );
        assert_eq!(
            input.handle_event(InputEvent::TouchMoved { x: 80.0, y: 5.0 }, Some(0)),
            None
        );
        assert_eq!(input.handle_event(InputEvent::TouchEnd, Some(0)), None);

        let _ = input.handle_event(InputEvent::TouchStart { x: 5.0, y: 5.0 }, None);
        let _ = input.handle_event(InputEvent::TouchMoved { x: 80.0, y: 5.0 }, None);
        assert_eq!(
            input.handle_event(InputEvent::TouchEnd, None),
            Some(GalleryCommand::EndTouch)
        );
    }

    #[test]
    fn wheel_carries_shift_state() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::ModifiersChanged { shift: true }, None);
        assert_eq!(
            input.handle_event(InputEvent::Wheel { dx: 0.0, dy: 12.0 }, None),
            Some(GalleryCommand::Wheel {
                delta: Vec2::new(0.0, 12.0),
                shift: true
            })
        );
    }

    #[test]
    fn leaving_mid_drag_ends_it() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::PointerDown { x: 1.0, y: 1.0 }, None);
        assert_eq!(
            input.handle_event(InputEvent::PointerLeft, None),
            Some(GalleryCommand::EndDrag)
        );
        assert_eq!(
            input.handle_event(InputEvent::PointerLeft, None),
            Some(GalleryCommand::PointerLeft)
        );
    }

    #[test]
    fn keys_map_to_commands() {
        let input = InputProcessor::new();
        assert_eq!(input.handle_key_press("Escape"), Some(GalleryCommand::Dismiss));
        assert_eq!(
            input.handle_key_press("ArrowLeft"),
            Some(GalleryCommand::Navigate {
                step: Step::Previous
            })
        );
        assert_eq!(input.handle_key_press("Enter"), None);
    }
}
