use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Focus", inline)]
#[serde(default)]
/// Geometry and timing of the zoom into a single artwork.
pub struct FocusOptions {
    /// Largest share of the viewport height the focused cell may fill.
    #[schemars(title = "Max Height", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub max_height_fraction: f32,
    /// Largest share of the viewport width the focused cell may fill.
    #[schemars(title = "Max Width", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub max_width_fraction: f32,
    /// Vertical shift of the focused cell, leaving room for the caption.
    #[schemars(title = "Caption Offset", range(min = -200.0, max = 200.0))]
    pub caption_offset: f32,
    /// Zoom-in duration.
    pub open_duration_ms: u64,
    /// Zoom-out duration.
    pub close_duration_ms: u64,
    /// Duration of the re-targeting pan between neighbours.
    pub navigate_duration_ms: u64,
    /// Opacity of the non-focused cells.
    #[schemars(title = "Sibling Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub sibling_opacity: f32,
    /// Scale of the non-focused cells.
    #[schemars(skip)]
    pub sibling_scale: f32,
    /// Duration of the sibling fade.
    #[schemars(skip)]
    pub sibling_fade_ms: u64,
    /// Distance (px) a sibling must be from the source for one second of
    /// fade delay.
    #[schemars(skip)]
    pub sibling_delay_divisor: f32,
    /// Upper bound of the distance-based sibling delay.
    #[schemars(skip)]
    pub max_sibling_delay_ms: u64,
    /// Duration of each cell's restore on close.
    #[schemars(skip)]
    pub restore_duration_ms: u64,
    /// Per-index stagger of the restore on close.
    #[schemars(skip)]
    pub restore_stagger_ms: u64,
    /// Filter bar fade duration.
    #[schemars(skip)]
    pub chrome_fade_ms: u64,
    /// Caption fade duration.
    #[schemars(skip)]
    pub caption_fade_ms: u64,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            max_height_fraction: 0.55,
            max_width_fraction: 0.7,
            caption_offset: -30.0,
            open_duration_ms: 750,
            close_duration_ms: 650,
            navigate_duration_ms: 500,
            sibling_opacity: 0.05,
            sibling_scale: 0.92,
            sibling_fade_ms: 500,
            sibling_delay_divisor: 3000.0,
            max_sibling_delay_ms: 150,
            restore_duration_ms: 400,
            restore_stagger_ms: 10,
            chrome_fade_ms: 300,
            caption_fade_ms: 200,
        }
    }
}
