//! Actions module
//!
//! This module defines all actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput) that views translate to screen-specific actions
//! - Global actions that affect the entire application
//! - Screen-specific actions that are already targeted to a particular screen

// Shared action types
pub mod event;
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen-specific action types
pub mod search;

// Re-export all action types for convenience
pub use event::Event;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use search::SearchAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
///
/// Actions are categorized as:
/// - `Navigate` / `TextInput`: Generic actions that need translation by the active view
/// - `Global`: Application-wide actions (quit, view management)
/// - `Search`: Already targeted to the profile search screen
#[derive(Debug, Clone)]
pub enum Action {
    /// Events are facts/observations that re-enter the middleware chain.
    /// Use `Action::event(Event::X)` to create - ensures visibility at call site.
    Event(Event),

    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),

    /// Global application actions
    Global(GlobalAction),

    /// Profile search screen actions
    Search(SearchAction),

    /// No-op action
    None,
}

impl Action {
    /// Factory method for creating events.
    ///
    /// Using this factory makes event creation visually distinct at the call site,
    /// signaling that the action will re-enter the middleware chain.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }
}
