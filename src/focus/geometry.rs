//! Surface transform math for the focus zoom.
//!
//! The whole surface is scaled about `origin` (surface coordinates) and
//! then translated. A surface point `p` lands at
//! `origin + (p − origin) × scale + translate − pan_offset` in the
//! viewport.

use glam::Vec2;

use crate::animation::tween::Lerp;
use crate::options::FocusOptions;
use crate::util::rect::Rect;

/// Scale/translate applied to the entire pannable surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    /// Uniform scale about `origin`.
    pub scale: f32,
    /// Translation applied after scaling, in viewport pixels.
    pub translate: Vec2,
    /// Fixed point of the scale, in surface coordinates.
    pub origin: Vec2,
}

impl ViewportTransform {
    /// No scale, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
        origin: Vec2::ZERO,
    };

    /// Identity anchored at `origin`, so a tween toward a transform with
    /// the same origin only interpolates scale and translation.
    #[must_use]
    pub fn identity_at(origin: Vec2) -> Self {
        Self {
            origin,
            ..Self::IDENTITY
        }
    }

    /// Whether the transform leaves every point in place.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.translate == Vec2::ZERO
    }

    /// Map a surface point through the transform.
    #[must_use]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.origin + (point - self.origin) * self.scale + self.translate
    }

    /// Inverse of [`apply`](Self::apply); `None` for a degenerate scale.
    #[must_use]
    pub fn invert(&self, point: Vec2) -> Option<Vec2> {
        if self.scale.abs() <= f32::EPSILON || !self.scale.is_finite() {
            return None;
        }
        Some(self.origin + (point - self.translate - self.origin) / self.scale)
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Lerp for ViewportTransform {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            scale: Lerp::lerp(&self.scale, &other.scale, t),
            translate: Lerp::lerp(&self.translate, &other.translate, t),
            origin: Lerp::lerp(&self.origin, &other.origin, t),
        }
    }
}

/// Uniform zoom that makes `size` fill at most the configured share of the
/// viewport on both axes.
///
/// The smaller of the two axis scales wins so the focused cell never
/// overflows either axis. An axis with no extent is ignored; with neither
/// usable the zoom is 1.
#[must_use]
pub fn focus_scale(size: Vec2, viewport: Vec2, options: &FocusOptions) -> f32 {
    let axis = |limit: f32, extent: f32| {
        let scale = limit / extent;
        (extent > 0.0 && scale.is_finite() && scale > 0.0).then_some(scale)
    };
    let by_height = axis(viewport.y * options.max_height_fraction, size.y);
    let by_width = axis(viewport.x * options.max_width_fraction, size.x);
    match (by_height, by_width) {
        (Some(h), Some(w)) => h.min(w),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => 1.0,
    }
}

/// Transform that brings the cell at `source` (viewport coordinates,
/// surface untransformed) to the viewport center, shifted vertically by the
/// caption offset, at [`focus_scale`].
#[must_use]
pub fn focus_transform(
    source: Rect,
    viewport: Vec2,
    pan_offset: Vec2,
    options: &FocusOptions,
) -> ViewportTransform {
    let center = source.center();
    let target = viewport * 0.5 + Vec2::new(0.0, options.caption_offset);
    ViewportTransform {
        scale: focus_scale(source.size, viewport, options),
        translate: target - center,
        origin: center + pan_offset,
    }
}
