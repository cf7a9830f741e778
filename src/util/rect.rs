//! Axis-aligned rectangle in pixels.

use glam::Vec2;

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub min: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Rectangle from corner and size.
    #[must_use]
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rectangle of `size` centered on `center`.
    #[must_use]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    /// Width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// The same rectangle moved by `delta`.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            size: self.size,
        }
    }

    /// The rectangle scaled by `factor` about its own center.
    #[must_use]
    pub fn scaled_about_center(&self, factor: f32) -> Self {
        Self::from_center(self.center(), self.size * factor)
    }

    /// Whether `point` lies inside (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x
            && point.y >= self.min.y
            && point.x <= max.x
            && point.y <= max.y
    }
}
