//! Input handling: event types, press tracking, and the input processor
//! that converts raw events into gallery commands.

/// Platform-agnostic input events.
pub mod event;
/// Press tracking and click-versus-drag detection.
pub(crate) mod press;
/// Converts raw events into gallery commands.
pub mod processor;

pub use event::InputEvent;
pub use processor::{InputProcessor, KeyAction};
