//! Centralized gallery options with TOML preset support.
//!
//! All tweakable settings (layout, panning, focus zoom, scatter, parallax,
//! filter animation, keybindings) are consolidated here. Options serialize
//! to/from TOML for presets stored in `assets/presets/`.

mod filter;
mod focus;
mod keybindings;
mod layout;
mod pan;
mod parallax;
mod scatter;

use std::path::Path;

pub use filter::FilterOptions;
pub use focus::FocusOptions;
pub use keybindings::KeybindingOptions;
pub use layout::{LayoutMode, LayoutOptions};
pub use pan::PanOptions;
pub use parallax::ParallaxOptions;
pub use scatter::ScatterOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::error::GalleryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[focus]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Grid geometry.
    pub layout: LayoutOptions,
    /// Drag, wheel and momentum parameters.
    pub pan: PanOptions,
    /// Focus zoom geometry and timing.
    pub focus: FocusOptions,
    /// Scatter layout behind the about panel.
    pub scatter: ScatterOptions,
    /// Pointer parallax.
    pub parallax: ParallaxOptions,
    /// Filter show/hide animation.
    pub filter: FilterOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GalleryError> {
        let content = std::fs::read_to_string(path).map_err(GalleryError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, GalleryError> {
        toml::from_str(content)
            .map_err(|e| GalleryError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GalleryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GalleryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GalleryError::Io)?;
        }
        std::fs::write(path, content).map_err(GalleryError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

/// Milliseconds from an options field as a [`Duration`].
#[inline]
#[must_use]
pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
