//! Text Input Translation Middleware
//!
//! Translates generic TextInput actions into view-specific actions
//! using the active view's translate_text_input method.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates TextInput actions via the active view
pub struct TextInputMiddleware;

impl TextInputMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextInputMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for TextInputMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::TextInput(input) = action {
            if let Some(translated) = state
                .view_stack
                .last()
                .and_then(|view| view.translate_text_input(input.clone()))
            {
                log::debug!(
                    "TextInputMiddleware: Translating {:?} to {:?}",
                    input,
                    translated
                );
                dispatcher.dispatch(translated);
            } else {
                log::debug!("TextInput action not handled by active view: {:?}", input);
            }
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{SearchAction, TextInputAction};
    use std::sync::mpsc;

    #[test]
    fn test_translates_char_for_search_view() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = TextInputMiddleware::new();

        let handled = middleware.handle(
            &Action::TextInput(TextInputAction::Char('x')),
            &AppState::default(),
            &dispatcher,
        );

        assert!(!handled);
        let dispatched: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            dispatched.as_slice(),
            [Action::Search(SearchAction::QueryChar('x'))]
        ));
    }

    #[test]
    fn test_other_actions_pass_through() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = TextInputMiddleware::new();

        let handled = middleware.handle(
            &Action::Search(SearchAction::LoadMore),
            &AppState::default(),
            &dispatcher,
        );

        assert!(handled);
        assert!(rx.try_iter().next().is_none());
    }
}
