//! Key Bindings Panel View Model
//!
//! Pre-computes presentation data for the key bindings help panel.

use crate::command_id::CommandId;
use crate::keybindings::Keymap;
use crate::state::AppState;

/// Category order in the panel
const CATEGORY_ORDER: [&str; 3] = ["Search", "Navigation", "General"];

/// A single binding row in the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRow {
    /// Key hint (e.g., "j/↓", "Ctrl+C")
    pub keys: String,
    /// Description of what the binding does
    pub description: String,
}

/// A section grouping related bindings
#[derive(Debug, Clone)]
pub struct BindingSection {
    pub category: String,
    pub bindings: Vec<BindingRow>,
}

/// View model for the key bindings help panel
#[derive(Debug, Clone)]
pub struct KeyBindingsPanelViewModel {
    pub title: String,
    pub sections: Vec<BindingSection>,
    /// Close hint (e.g., "?/Esc")
    pub close_hint: String,
}

impl KeyBindingsPanelViewModel {
    /// Create a view model from app state
    pub fn from_state(state: &AppState) -> Self {
        let keymap = &state.keymap;

        let close_hint = keymap
            .compact_hint_for_command(CommandId::KeyBindingsToggleView)
            .map(|h| format!("{}/Esc", h))
            .unwrap_or_else(|| "Esc".to_string());

        Self {
            title: " Keyboard Bindings ".to_string(),
            sections: Self::build_sections(keymap),
            close_hint,
        }
    }

    /// Group bindings by category, one row per command
    fn build_sections(keymap: &Keymap) -> Vec<BindingSection> {
        let mut commands: Vec<CommandId> = Vec::new();
        for binding in keymap.bindings() {
            if !commands.contains(&binding.command) {
                commands.push(binding.command);
            }
        }

        CATEGORY_ORDER
            .iter()
            .filter_map(|category| {
                let bindings: Vec<BindingRow> = commands
                    .iter()
                    .filter(|cmd| cmd.category() == *category)
                    .filter_map(|cmd| {
                        Some(BindingRow {
                            keys: keymap.compact_hint_for_command(*cmd)?,
                            description: cmd.title().to_string(),
                        })
                    })
                    .collect();

                (!bindings.is_empty()).then(|| BindingSection {
                    category: category.to_string(),
                    bindings,
                })
            })
            .collect()
    }
}
