//! Shared utilities: easing curves and rectangle geometry.

pub mod easing;
pub mod rect;
