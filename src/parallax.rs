//! Pointer-driven parallax: a slight grid tilt and per-cell depth offsets
//! that follow the pointer with exponential smoothing.

use glam::Vec2;

use crate::options::ParallaxOptions;

/// Depth factor of the cell at render index `index`: 0.5, 1.0 or 1.5.
#[must_use]
pub fn depth(index: usize) -> f32 {
    (index % 3) as f32 * 0.5 + 0.5
}

/// Smoothed pointer position in `[-1, 1]` per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxAnimator {
    target: Vec2,
    current: Vec2,
}

impl ParallaxAnimator {
    /// Centered and at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target position.
    #[must_use]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Smoothed position.
    #[must_use]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// Aim at the pointer, given in viewport pixels.
    pub fn pointer_moved(&mut self, pointer: Vec2, viewport: Vec2) {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return;
        }
        self.target = ((pointer / viewport) * 2.0 - Vec2::ONE)
            .clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    /// Drift back toward the center.
    pub fn pointer_left(&mut self) {
        self.target = Vec2::ZERO;
    }

    /// One smoothing step toward the target.
    pub fn step(&mut self, smoothing: f32) {
        self.current += (self.target - self.current) * smoothing.clamp(0.0, 1.0);
    }

    /// Grid rotation `(x, y)` in degrees.
    #[must_use]
    pub fn tilt(&self, options: &ParallaxOptions) -> Vec2 {
        Vec2::new(
            -self.current.y * options.tilt_degrees,
            self.current.x * options.tilt_degrees,
        )
    }

    /// Offset of the cell at render index `index`, moving against the
    /// pointer.
    #[must_use]
    pub fn cell_offset(&self, index: usize, options: &ParallaxOptions) -> Vec2 {
        -self.current * options.offset_strength * depth(index)
    }
}
