//! Profile search actions
//!
//! Result actions carry the `generation` of the search that produced them.
//! The reducer drops any result whose generation is not the current one,
//! so the last issued search wins regardless of response order.

use gh_client::{Repository, UserProfile};

/// Actions for the profile search screen
#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    // Query editing
    /// Append a character to the query
    QueryChar(char),
    /// Remove the last character of the query
    QueryBackspace,
    /// Clear the query
    QueryClear,

    // Focus & selection
    /// Switch focus between the search input and the repository list
    ToggleFocus,
    /// Move focus to the repository list
    FocusList,
    /// Select next repository
    SelectNext,
    /// Select previous repository
    SelectPrevious,
    /// Select first repository
    SelectFirst,
    /// Select last repository
    SelectLast,

    // Search flow
    /// User pressed Enter in the search input
    Submit,
    /// A new search was issued
    Start { generation: u64, query: String },
    /// The profile lookup succeeded
    ProfileLoaded {
        generation: u64,
        query: String,
        profile: UserProfile,
    },
    /// The first repository page arrived
    RepositoriesLoaded {
        generation: u64,
        query: String,
        repositories: Vec<Repository>,
    },
    /// The search failed
    Failed {
        generation: u64,
        message: String,
        not_found: bool,
    },

    // Load more flow
    /// User asked for the next page of repositories
    LoadMore,
    /// A page request was issued
    LoadMoreStart { generation: u64, page: u32 },
    /// A further page of repositories arrived
    MoreLoaded {
        generation: u64,
        page: u32,
        repositories: Vec<Repository>,
    },
    /// Loading a further page failed
    LoadMoreFailed { generation: u64, message: String },

    // Browser
    /// Open the selected repository in the browser
    OpenRepository,
    /// Open the profile avatar in the browser
    OpenAvatar,

    /// Show a short informational message in the status line
    Notice(String),
}
