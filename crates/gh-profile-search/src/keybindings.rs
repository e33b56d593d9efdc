//! Keybinding system
//!
//! Maps keyboard input to commands. Supports single keys, modifier
//! combinations and two-key sequences such as "g g".
//!
//! - `KeyBinding`: A mapping from a key pattern to a command ID
//! - `ParsedKeyPattern`: Matchable form of a textual pattern ("ctrl+c", "g g")
//! - `Keymap`: Collection of bindings with matching logic

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::command_id::CommandId;

/// Seconds a pending first key of a sequence stays valid
const SEQUENCE_TIMEOUT_SECS: u64 = 2;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key(s) - e.g., "ctrl+c", "g g", "down"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+C", "gg", "↓"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKeyPattern {
    /// Single key with optional modifiers
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Two-key sequence (e.g., "g g" -> press 'g', then 'g')
    Sequence { first: char, second: char },
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "m", "G" (uppercase implies SHIFT)
/// - With modifiers: "ctrl+c", "shift+tab"
/// - Special keys: "tab", "enter", "esc", "up", "down"
/// - Two-key sequence: "g g" (space-separated)
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let parts: Vec<&str> = pattern.split_whitespace().collect();
        if let [first, second] = parts.as_slice() {
            if first.chars().count() == 1 && second.chars().count() == 1 {
                return Some(ParsedKeyPattern::Sequence {
                    first: first.chars().next()?,
                    second: second.chars().next()?,
                });
            }
        }
        return None;
    }

    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(ParsedKeyPattern::Single { code, modifiers })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "space" => Some(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// State for tracking pending keys in two-key sequences
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a new keymap, dropping bindings whose pattern does not parse
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern '{}'", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// Try to match a key event against the keymap
    ///
    /// Returns (matched_commands, should_clear_pending, new_pending_key)
    pub fn match_key(
        &self,
        key: &KeyEvent,
        pending: Option<&PendingKey>,
    ) -> (Vec<CommandId>, bool, Option<char>) {
        let current_char = match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        let valid_pending =
            pending.filter(|p| p.timestamp.elapsed().as_secs() < SEQUENCE_TIMEOUT_SECS);

        if let (Some(pending), Some(current)) = (valid_pending, current_char) {
            for (binding, pattern) in &self.bindings {
                if let ParsedKeyPattern::Sequence { first, second } = pattern {
                    if *first == pending.key && *second == current {
                        return (vec![binding.command], true, None);
                    }
                }
            }
        }

        let mut matches = Vec::new();
        let mut new_pending = None;

        for (binding, pattern) in &self.bindings {
            match pattern {
                ParsedKeyPattern::Single { code, modifiers } => {
                    // BackTab arrives with or without SHIFT depending on terminal
                    let key_matches = if *code == KeyCode::BackTab {
                        key.code == KeyCode::BackTab
                    } else {
                        key.code == *code && key.modifiers == *modifiers
                    };
                    if key_matches {
                        matches.push(binding.command);
                    }
                }
                ParsedKeyPattern::Sequence { first, .. } => {
                    if new_pending.is_none() && current_char == Some(*first) {
                        new_pending = Some(*first);
                    }
                }
            }
        }

        if !matches.is_empty() {
            return (matches, true, None);
        }

        if let Some(pending) = new_pending {
            return (vec![], false, Some(pending));
        }

        (vec![], true, None)
    }

    /// All bindings in declaration order
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Compact hint for a command (e.g., "j/↓"), duplicates removed
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut hints: Vec<&str> = Vec::new();
        for (binding, _) in &self.bindings {
            if binding.command == command && !hints.contains(&binding.hint.as_str()) {
                hints.push(binding.hint.as_str());
            }
        }

        if hints.is_empty() {
            None
        } else {
            Some(hints.join("/"))
        }
    }
}
