//! Command identifiers
//!
//! This module defines all command IDs as an enum for type-safe,
//! memory-efficient command references that can be serialized/deserialized.

use serde::{Deserialize, Serialize};

use crate::actions::{Action, GlobalAction, NavigationAction, SearchAction};
use crate::views::KeyBindingsView;

/// Unique identifier for each command in the application.
///
/// The enum is serialized as snake_case (e.g., `SearchLoadMore` -> `"search_load_more"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Navigation ===
    /// Navigate to the next item (down)
    NavigateNext,
    /// Navigate to the previous item (up)
    NavigatePrevious,
    /// Jump to the first item (gg in vim)
    NavigateToTop,
    /// Jump to the last item (G in vim)
    NavigateToBottom,

    // === Search ===
    /// Switch between search input and repository list
    SearchToggleFocus,
    /// Load the next page of repositories
    SearchLoadMore,
    /// Open the selected repository in the browser
    RepositoryOpenInBrowser,
    /// Open the profile avatar in the browser
    ProfileOpenAvatar,

    // === Help ===
    /// Toggle the key bindings panel
    KeyBindingsToggleView,

    // === General ===
    /// Close the current view/panel
    GlobalClose,
    /// Quit the application
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::SearchToggleFocus => Action::Search(SearchAction::ToggleFocus),
            Self::SearchLoadMore => Action::Search(SearchAction::LoadMore),
            Self::RepositoryOpenInBrowser => Action::Search(SearchAction::OpenRepository),
            Self::ProfileOpenAvatar => Action::Search(SearchAction::OpenAvatar),

            Self::KeyBindingsToggleView => {
                Action::Global(GlobalAction::PushView(Box::new(KeyBindingsView::new())))
            }

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Get the default title for this command (used in the help panel)
    pub fn title(&self) -> &'static str {
        match self {
            Self::NavigateNext => "Next repository",
            Self::NavigatePrevious => "Previous repository",
            Self::NavigateToTop => "First repository",
            Self::NavigateToBottom => "Last repository",

            Self::SearchToggleFocus => "Switch input / list",
            Self::SearchLoadMore => "Load more repositories",
            Self::RepositoryOpenInBrowser => "Open repository in browser",
            Self::ProfileOpenAvatar => "Open avatar in browser",

            Self::KeyBindingsToggleView => "Toggle help",

            Self::GlobalClose => "Close / quit",
            Self::GlobalQuit => "Quit",
        }
    }

    /// Category used to group commands in the help panel
    pub fn category(&self) -> &'static str {
        match self {
            Self::NavigateNext
            | Self::NavigatePrevious
            | Self::NavigateToTop
            | Self::NavigateToBottom => "Navigation",

            Self::SearchToggleFocus
            | Self::SearchLoadMore
            | Self::RepositoryOpenInBrowser
            | Self::ProfileOpenAvatar => "Search",

            Self::KeyBindingsToggleView | Self::GlobalClose | Self::GlobalQuit => "General",
        }
    }
}
