//! Time-based animation primitives: tweens and opacity fades.

pub mod fade;
pub mod tween;

pub use fade::Fade;
pub use tween::{Lerp, Tween};
