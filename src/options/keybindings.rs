use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping key strings to actions.
///
/// Key strings use the DOM `KeyboardEvent.key` names: `"Escape"`,
/// `"ArrowRight"`, and so on. Several keys may map to one action.
pub struct KeybindingOptions {
    /// Maps key string → action (e.g. `"ArrowDown"` → `Next`).
    pub bindings: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Escape".into(), KeyAction::Close),
            ("ArrowRight".into(), KeyAction::Next),
            ("ArrowDown".into(), KeyAction::Next),
            ("ArrowLeft".into(), KeyAction::Previous),
            ("ArrowUp".into(), KeyAction::Previous),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }
}
