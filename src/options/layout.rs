use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the number of grid columns is chosen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutMode {
    /// Roughly square grid biased toward width: `ceil(sqrt(count * 1.5))`.
    Adaptive,
    /// A fixed number of columns regardless of the artwork count.
    Fixed {
        /// Number of columns.
        columns: u32,
    },
}

impl Default for LayoutMode {
    fn default() -> Self {
        Self::Fixed { columns: 9 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Grid geometry constants.
pub struct LayoutOptions {
    /// Column selection strategy.
    pub mode: LayoutMode,
    /// Width of one grid cell in pixels.
    #[schemars(title = "Cell Width", range(min = 40.0, max = 800.0))]
    pub cell_width: f32,
    /// Height of one grid cell in pixels.
    #[schemars(title = "Cell Height", range(min = 40.0, max = 800.0))]
    pub cell_height: f32,
    /// Gap between neighbouring cells in pixels.
    #[schemars(title = "Gap", range(min = 0.0, max = 200.0))]
    pub gap: f32,
    /// Empty margin around the grid so it can be panned past its edges.
    #[schemars(title = "Surface Padding", range(min = 0.0, max = 4000.0))]
    pub surface_padding: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            mode: LayoutMode::default(),
            cell_width: 240.0,
            cell_height: 300.0,
            gap: 48.0,
            surface_padding: 600.0,
        }
    }
}
