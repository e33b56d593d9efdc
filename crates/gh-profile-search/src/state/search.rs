//! Profile search state

use gh_client::{Repository, UserProfile};

/// Which part of the search screen receives keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    List,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        }
    }
}

/// Work currently in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    SearchingProfile,
    SearchingRepositories,
    LoadingMore {
        page: u32,
    },
}

impl SearchPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, SearchPhase::Idle)
    }

    /// Status line text for the phase
    pub fn label(&self) -> Option<String> {
        match self {
            SearchPhase::Idle => None,
            SearchPhase::SearchingProfile => Some("Searching profile...".to_string()),
            SearchPhase::SearchingRepositories => Some("Loading repositories...".to_string()),
            SearchPhase::LoadingMore { page } => Some(format!("Loading page {}...", page)),
        }
    }
}

/// Repository pages fetched for the loaded user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTracker {
    /// Last page number requested successfully (0 = none)
    pub last_page: u32,
    /// An empty page was returned, there is nothing left to load
    pub exhausted: bool,
}

impl PageTracker {
    /// Tracker after the first page has been loaded
    pub fn first_page(empty: bool) -> Self {
        Self {
            last_page: 1,
            exhausted: empty,
        }
    }
}

/// State of the profile search screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Text in the search input
    pub query: String,
    /// Last successfully fetched profile
    pub profile: Option<UserProfile>,
    /// Repositories in upstream order, page 1 first
    pub repositories: Vec<Repository>,
    /// Last failure shown to the user
    pub error: Option<String>,
    /// Informational message (e.g. "No more repositories")
    pub notice: Option<String>,
    /// Generation of the latest issued search
    pub generation: u64,
    /// Username whose repositories are listed, used for "load more"
    pub loaded_query: Option<String>,
    pub pages: PageTracker,
    pub phase: SearchPhase,
    pub focus: Focus,
    pub selected_repository: usize,
}

impl SearchState {
    /// Whether the "load more" hint should be offered
    pub fn can_load_more(&self) -> bool {
        self.loaded_query.is_some() && !self.repositories.is_empty()
    }

    /// Currently selected repository, if any
    pub fn selected(&self) -> Option<&Repository> {
        self.repositories.get(self.selected_repository)
    }
}
