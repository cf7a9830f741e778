use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pan", inline)]
#[serde(default)]
/// Drag, wheel and momentum parameters for panning the surface.
pub struct PanOptions {
    /// Offset change per pixel of mouse drag.
    #[schemars(title = "Drag Sensitivity", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub mouse_sensitivity: f32,
    /// Offset change per pixel of touch drag.
    #[schemars(title = "Touch Sensitivity", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub touch_sensitivity: f32,
    /// Minimum release speed (px/ms) that starts a momentum glide.
    #[schemars(title = "Momentum Threshold", range(min = 0.0, max = 5.0))]
    pub momentum_threshold: f32,
    /// How far ahead (ms) the release velocity is extrapolated.
    #[schemars(title = "Momentum Reach", range(min = 0.0, max = 2000.0))]
    pub momentum_extrapolation_ms: f32,
    /// Duration of the momentum glide.
    #[schemars(skip)]
    pub momentum_duration_ms: u64,
    /// Fraction of the scrollable range to start at, per axis.
    #[schemars(skip)]
    pub initial_anchor: [f32; 2],
}

impl Default for PanOptions {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 1.5,
            touch_sensitivity: 1.0,
            momentum_threshold: 0.5,
            momentum_extrapolation_ms: 320.0,
            momentum_duration_ms: 800,
            initial_anchor: [0.5, 0.5],
        }
    }
}
