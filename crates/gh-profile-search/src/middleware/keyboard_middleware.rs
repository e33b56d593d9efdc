//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! This middleware uses a three-layer approach to handle keyboard input:
//!
//! ## Layer 1: Priority Keys
//! Keys that always work regardless of context (Ctrl+C, Esc).
//!
//! ## Layer 2: Capabilities
//! Views with TEXT_INPUT capability receive character keys as text
//! rather than as keybindings.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, then check if the active view accepts the action.

use crate::actions::{Action, GlobalAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::keybindings::PendingKey;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// KeyboardMiddleware handles keyboard input using a three-layer approach
pub struct KeyboardMiddleware {
    /// Pending key for two-key sequences
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let view = state.view_stack.last();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return false;
        }

        if key.code == KeyCode::Esc {
            if capabilities.accepts_text_input() {
                log::debug!("Layer 1: Esc - routing to TextInput::Escape (view has TEXT_INPUT)");
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                log::debug!("Layer 1: Esc - dispatching Close");
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return false;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            self.pending_key = None;

            match key.code {
                KeyCode::Char(c)
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT) =>
                {
                    log::debug!("Layer 2: TEXT_INPUT - routing char '{}' to TextInput", c);
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Char(c)));
                    return false;
                }
                // Ctrl+U - Unix line kill
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                    return false;
                }
                KeyCode::Backspace => {
                    if key.modifiers.contains(KeyModifiers::SUPER) {
                        // Cmd+Backspace on Mac
                        dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                    } else {
                        dispatcher.dispatch(Action::TextInput(TextInputAction::Backspace));
                    }
                    return false;
                }
                KeyCode::Enter => {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Confirm));
                    return false;
                }
                // Tab, arrows and Ctrl combinations continue to the keymap
                _ => {}
            }
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        let (command_ids, clear_pending, new_pending) =
            state.keymap.match_key(&key, self.pending_key.as_ref());

        if clear_pending {
            self.pending_key = None;
        }
        if let Some(pending_char) = new_pending {
            self.pending_key = Some(PendingKey {
                key: pending_char,
                timestamp: Instant::now(),
            });
            log::debug!(
                "Layer 3: Waiting for second key in sequence (first: {})",
                pending_char
            );
            return false;
        }

        for cmd_id in command_ids {
            let action = cmd_id.to_action();

            match view {
                Some(view) if !view.accepts_action(&action) => {
                    log::debug!(
                        "Layer 3: Command {:?} rejected by view {:?}, trying next",
                        cmd_id,
                        view.view_id()
                    );
                }
                _ => {
                    log::debug!("Layer 3: Command {:?} dispatched", cmd_id);
                    dispatcher.dispatch(action);
                    return false;
                }
            }
        }

        // Unhandled keys are consumed (not passed through)
        false
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            return self.handle_key(*key, state, dispatcher);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{NavigationAction, SearchAction};
    use crate::state::Focus;
    use crate::views::KeyBindingsView;
    use std::sync::mpsc;

    fn press(
        middleware: &mut KeyboardMiddleware,
        state: &AppState,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let key = KeyEvent::new(code, modifiers);
        let handled = middleware.handle(
            &Action::Global(GlobalAction::KeyPressed(key)),
            state,
            &dispatcher,
        );
        assert!(!handled, "key presses are always consumed");
        rx.try_iter().collect()
    }

    fn list_focused() -> AppState {
        let mut state = AppState::default();
        state.search.focus = Focus::List;
        state
    }

    #[test]
    fn test_chars_go_to_search_input() {
        let mut mw = KeyboardMiddleware::new();
        let state = AppState::default();

        // 'q' and 'm' are bound, but the input has focus
        for c in ['q', 'm'] {
            let actions = press(&mut mw, &state, KeyCode::Char(c), KeyModifiers::NONE);
            assert!(matches!(
                actions.as_slice(),
                [Action::TextInput(TextInputAction::Char(got))] if *got == c
            ));
        }
    }

    #[test]
    fn test_enter_in_input_confirms() {
        let mut mw = KeyboardMiddleware::new();
        let actions = press(&mut mw, &AppState::default(), KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Confirm)]
        ));
    }

    #[test]
    fn test_ctrl_u_clears_line() {
        let mut mw = KeyboardMiddleware::new();
        let actions = press(
            &mut mw,
            &AppState::default(),
            KeyCode::Char('u'),
            KeyModifiers::CONTROL,
        );
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::ClearLine)]
        ));
    }

    #[test]
    fn test_tab_in_input_toggles_focus() {
        let mut mw = KeyboardMiddleware::new();
        let actions = press(&mut mw, &AppState::default(), KeyCode::Tab, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Search(SearchAction::ToggleFocus)]
        ));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut mw = KeyboardMiddleware::new();
        for state in [AppState::default(), list_focused()] {
            let actions = press(&mut mw, &state, KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert!(matches!(
                actions.as_slice(),
                [Action::Global(GlobalAction::Quit)]
            ));
        }
    }

    #[test]
    fn test_esc_depends_on_focus() {
        let mut mw = KeyboardMiddleware::new();

        let actions = press(&mut mw, &AppState::default(), KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::TextInput(TextInputAction::Escape)]
        ));

        let actions = press(&mut mw, &list_focused(), KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Close)]
        ));
    }

    #[test]
    fn test_list_keys_use_keymap() {
        let mut mw = KeyboardMiddleware::new();
        let state = list_focused();

        let actions = press(&mut mw, &state, KeyCode::Char('m'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Search(SearchAction::LoadMore)]
        ));

        let actions = press(&mut mw, &state, KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Navigate(NavigationAction::Next)]
        ));

        let actions = press(&mut mw, &state, KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Search(SearchAction::OpenRepository)]
        ));
    }

    #[test]
    fn test_gg_sequence() {
        let mut mw = KeyboardMiddleware::new();
        let state = list_focused();

        let actions = press(&mut mw, &state, KeyCode::Char('g'), KeyModifiers::NONE);
        assert!(actions.is_empty());

        let actions = press(&mut mw, &state, KeyCode::Char('g'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Navigate(NavigationAction::ToTop)]
        ));
    }

    #[test]
    fn test_help_overlay_rejects_search_commands() {
        let mut mw = KeyboardMiddleware::new();
        let mut state = list_focused();
        state.view_stack.push(Box::new(KeyBindingsView::new()));

        let actions = press(&mut mw, &state, KeyCode::Char('m'), KeyModifiers::NONE);
        assert!(actions.is_empty());

        let actions = press(&mut mw, &state, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Close)]
        ));
    }
}
