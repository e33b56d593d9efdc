pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        // Search
        KeyBinding::new("tab", "Tab", SearchToggleFocus),
        KeyBinding::new("backtab", "Shift+Tab", SearchToggleFocus),
        KeyBinding::new("m", "m", SearchLoadMore),
        KeyBinding::new("enter", "Enter", RepositoryOpenInBrowser),
        KeyBinding::new("o", "o", RepositoryOpenInBrowser),
        KeyBinding::new("a", "a", ProfileOpenAvatar),
        // Help
        KeyBinding::new("?", "?", KeyBindingsToggleView),
        // General
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
