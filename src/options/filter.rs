use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Filter", inline)]
#[serde(default)]
/// Timing of the show/hide animation when the medium filter changes.
pub struct FilterOptions {
    /// Duration of each cell's fade.
    pub duration_ms: u64,
    /// Per-index start delay.
    pub stagger_ms: u64,
    /// Scale of hidden cells.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub hidden_scale: f32,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            duration_ms: 400,
            stagger_ms: 20,
            hidden_scale: 0.9,
        }
    }
}
