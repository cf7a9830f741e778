use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Parallax", inline)]
#[serde(default)]
/// Pointer-driven depth illusion parameters.
pub struct ParallaxOptions {
    /// Whether the parallax loop writes anything at all.
    pub enabled: bool,
    /// Fraction of the remaining distance to the pointer covered per frame.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing: f32,
    /// Grid tilt in degrees at the viewport edge.
    #[schemars(title = "Tilt", range(min = 0.0, max = 15.0), extend("step" = 0.5))]
    pub tilt_degrees: f32,
    /// Per-cell offset in pixels at the viewport edge (before depth).
    #[schemars(title = "Depth Offset", range(min = 0.0, max = 60.0))]
    pub offset_strength: f32,
    /// CSS-style perspective distance for the tilt.
    #[schemars(skip)]
    pub perspective: f32,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            smoothing: 0.08,
            tilt_degrees: 2.0,
            offset_strength: 10.0,
            perspective: 1000.0,
        }
    }
}
