//! View model for the profile search screen
//!
//! Pre-computes all display text so the view only lays out widgets.

use crate::command_id::CommandId;
use crate::state::{AppState, Focus};
use gh_client::Repository;

/// Profile panel content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePanelViewModel {
    pub login: String,
    /// Bio, or a placeholder when the user has none
    pub bio: String,
    pub avatar_url: String,
    /// Avatar host is allow-listed and may be opened
    pub avatar_allowed: bool,
}

/// One repository entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRowViewModel {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    /// "⭐ 12 | 🍴 3"
    pub stats: String,
}

impl RepositoryRowViewModel {
    fn from_repository(repo: &Repository) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone().filter(|d| !d.trim().is_empty()),
            html_url: repo.html_url.clone(),
            stats: format!("⭐ {} | 🍴 {}", repo.stargazers_count, repo.forks_count),
        }
    }
}

/// View model for the whole search screen
#[derive(Debug, Clone)]
pub struct ProfileSearchViewModel {
    pub title: String,
    pub description: String,
    pub query: String,
    pub input_focused: bool,
    pub error: Option<String>,
    pub profile: Option<ProfilePanelViewModel>,
    pub list_title: String,
    pub repositories: Vec<RepositoryRowViewModel>,
    pub selected_index: Option<usize>,
    /// In-flight work or the latest notice
    pub status: Option<String>,
    /// (key, description) pairs for the footer
    pub hints: Vec<(String, String)>,
}

impl ProfileSearchViewModel {
    /// Transform state into display-ready view model
    pub fn from_state(state: &AppState) -> Self {
        let search = &state.search;

        let profile = search.profile.as_ref().map(|p| ProfilePanelViewModel {
            login: p.login.clone(),
            bio: p
                .bio
                .clone()
                .filter(|b| !b.trim().is_empty())
                .unwrap_or_else(|| "No bio".to_string()),
            avatar_url: p.avatar_url.clone(),
            avatar_allowed: state.app_config.is_image_url_allowed(&p.avatar_url),
        });

        let repositories: Vec<RepositoryRowViewModel> = search
            .repositories
            .iter()
            .map(RepositoryRowViewModel::from_repository)
            .collect();

        let selected_index = (!repositories.is_empty())
            .then(|| search.selected_repository.min(repositories.len() - 1));

        let status = search.phase.label().or_else(|| search.notice.clone());

        Self {
            title: " GitHub Profile Search ".to_string(),
            description: "Search a GitHub user to see their profile and public repositories."
                .to_string(),
            query: search.query.clone(),
            input_focused: search.focus == Focus::Input,
            error: search.error.clone(),
            profile,
            list_title: format!(" Repositories ({}) ", repositories.len()),
            repositories,
            selected_index,
            status,
            hints: Self::build_hints(state),
        }
    }

    fn build_hints(state: &AppState) -> Vec<(String, String)> {
        let keymap = &state.keymap;
        let hint = |cmd: CommandId, fallback: &str| {
            keymap
                .compact_hint_for_command(cmd)
                .unwrap_or_else(|| fallback.to_string())
        };

        let mut hints = Vec::new();
        if state.search.focus == Focus::Input {
            hints.push(("Enter".to_string(), "search".to_string()));
        } else {
            hints.push((hint(CommandId::RepositoryOpenInBrowser, "Enter"), "open".to_string()));
        }
        hints.push((hint(CommandId::SearchToggleFocus, "Tab"), "switch".to_string()));
        if state.search.can_load_more() {
            hints.push((hint(CommandId::SearchLoadMore, "m"), "load more".to_string()));
        }
        hints.push((hint(CommandId::KeyBindingsToggleView, "?"), "help".to_string()));
        hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SearchPhase;
    use gh_client::UserProfile;

    fn repo(id: u64, description: Option<&str>) -> Repository {
        Repository {
            id,
            name: format!("repo-{id}"),
            html_url: format!("https://github.com/octocat/repo-{id}"),
            description: description.map(str::to_string),
            stargazers_count: 12,
            forks_count: 3,
        }
    }

    fn has_load_more_hint(vm: &ProfileSearchViewModel) -> bool {
        vm.hints.iter().any(|(_, d)| d == "load more")
    }

    #[test]
    fn test_empty_state() {
        let vm = ProfileSearchViewModel::from_state(&AppState::default());
        assert!(vm.profile.is_none());
        assert!(vm.repositories.is_empty());
        assert_eq!(vm.selected_index, None);
        assert!(vm.input_focused);
        assert!(!has_load_more_hint(&vm));
    }

    #[test]
    fn test_rows_and_load_more_hint() {
        let mut state = AppState::default();
        state.search.loaded_query = Some("octocat".to_string());
        state.search.repositories = vec![repo(1, Some("A demo")), repo(2, Some("  "))];

        let vm = ProfileSearchViewModel::from_state(&state);
        assert_eq!(vm.repositories[0].stats, "⭐ 12 | 🍴 3");
        assert_eq!(vm.repositories[0].description.as_deref(), Some("A demo"));
        assert_eq!(vm.repositories[1].description, None);
        assert_eq!(vm.list_title, " Repositories (2) ");
        assert_eq!(vm.selected_index, Some(0));
        assert!(has_load_more_hint(&vm));
    }

    #[test]
    fn test_profile_without_bio() {
        let mut state = AppState::default();
        state.search.profile = Some(UserProfile {
            login: "octocat".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/583231?v=4".to_string(),
            bio: None,
            repos_url: "https://api.github.com/users/octocat/repos".to_string(),
        });

        let vm = ProfileSearchViewModel::from_state(&state);
        let profile = vm.profile.unwrap();
        assert_eq!(profile.bio, "No bio");
        assert!(profile.avatar_allowed);
    }

    #[test]
    fn test_status_prefers_activity_over_notice() {
        let mut state = AppState::default();
        state.search.notice = Some("No more repositories".to_string());

        let vm = ProfileSearchViewModel::from_state(&state);
        assert_eq!(vm.status.as_deref(), Some("No more repositories"));

        state.search.phase = SearchPhase::SearchingProfile;
        let vm = ProfileSearchViewModel::from_state(&state);
        assert_eq!(vm.status.as_deref(), Some("Searching profile..."));
    }
}
