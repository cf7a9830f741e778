//! Options methods for [`Gallery`].

use std::path::Path;

use super::Gallery;
use crate::layout::GridLayout;
use crate::options::{ms, Options};

impl Gallery {
    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    /// Push current option values to the layout, pan controller, caption
    /// fade and key bindings.
    ///
    /// Timing and geometry used by the modes are read on every operation
    /// and need no push. The scatter seed only applies to new galleries.
    pub fn apply_options(&mut self) {
        self.apply_layout();
        self.pan.set_options(self.options.pan.clone());
        self.chrome
            .set_caption_duration(ms(self.options.focus.caption_fade_ms));
        self.input
            .set_key_bindings(self.options.keybindings.clone());
    }

    /// Rebuild the grid geometry and clamp the scroll range to it. While
    /// a mode is active the rebuild waits for the next tick that finds
    /// both modes Closed.
    pub(super) fn apply_layout(&mut self) {
        if !self.is_interactive() {
            log::debug!("layout change deferred while a mode is active");
            self.layout_pending = true;
            return;
        }
        self.layout_pending = false;
        let layout = GridLayout::new(self.store.len(), &self.options.layout);
        if layout == self.layout {
            return;
        }
        self.layout = layout;
        self.pan
            .set_bounds(self.layout.surface_size(), self.viewport);
        log::debug!(
            "layout now {}x{}",
            self.layout.dims().columns,
            self.layout.dims().rows
        );
    }

    /// Load a named preset from `presets_dir` and apply it.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded preset '{name}'");
                self.set_options(opts);
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save preset '{name}': {e}");
                false
            }
        }
    }

    /// Name of the last preset loaded or saved.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }
}
