//! Navigation Translation Middleware
//!
//! Translates generic Navigation actions into view-specific actions
//! using the active view's translate_navigation method.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates Navigation actions via the active view
pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Navigate(nav) = action {
            if let Some(translated) = state
                .view_stack
                .last()
                .and_then(|view| view.translate_navigation(*nav))
            {
                log::debug!(
                    "NavigationMiddleware: Translating {:?} to {:?}",
                    nav,
                    translated
                );
                dispatcher.dispatch(translated);
            } else {
                log::debug!("Navigation action not handled by active view: {:?}", nav);
            }
            // Untranslated navigation has no reducer
            return false;
        }

        true
    }
}
