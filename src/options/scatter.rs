use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "About", inline)]
#[serde(default)]
/// Displacement and timing of the scatter layout behind the about panel.
pub struct ScatterOptions {
    /// Horizontal push of the cells farthest from the viewport center.
    #[schemars(title = "Min Push", range(min = 0.0, max = 4000.0))]
    pub min_push: f32,
    /// Horizontal push of the most central cells, and the overall cap.
    #[schemars(title = "Max Push", range(min = 0.0, max = 4000.0))]
    pub max_push: f32,
    /// Upper bound of the random extra horizontal push.
    pub jitter: f32,
    /// Upper bound of the random vertical displacement (either sign).
    pub vertical_jitter: f32,
    /// Upper bound of the random rotation in degrees (either sign).
    pub max_rotation: f32,
    /// Opacity of scattered cells.
    #[schemars(title = "Scattered Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub scattered_opacity: f32,
    /// Scale of scattered cells.
    #[schemars(skip)]
    pub scattered_scale: f32,
    /// Per-index start delay of the scatter animation.
    #[schemars(skip)]
    pub stagger_ms: u64,
    /// Duration of each cell's scatter motion.
    #[schemars(skip)]
    pub duration_ms: u64,
    /// Duration of each cell's restore motion.
    #[schemars(skip)]
    pub restore_duration_ms: u64,
    /// Fade duration of the about panel and the filter bar.
    #[schemars(skip)]
    pub panel_fade_ms: u64,
    /// Extra delay before the filter bar returns after a restore.
    #[schemars(skip)]
    pub chrome_delay_ms: u64,
    /// Fixed RNG seed; random each session when absent.
    #[schemars(skip)]
    pub seed: Option<u64>,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            min_push: 300.0,
            max_push: 900.0,
            jitter: 150.0,
            vertical_jitter: 120.0,
            max_rotation: 12.0,
            scattered_opacity: 0.15,
            scattered_scale: 0.95,
            stagger_ms: 15,
            duration_ms: 900,
            restore_duration_ms: 700,
            panel_fade_ms: 400,
            chrome_delay_ms: 200,
            seed: None,
        }
    }
}
