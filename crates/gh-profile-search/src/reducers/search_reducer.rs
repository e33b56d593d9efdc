//! Profile search reducer
//!
//! Results carry the generation of the search that produced them; anything
//! from an older generation is ignored so the last issued search wins.

use gh_profile_config::AppConfig;

use crate::actions::{Action, SearchAction};
use crate::state::{Focus, PageTracker, SearchPhase, SearchState};

/// Reducer for the profile search screen
pub fn reduce(mut state: SearchState, action: &Action, config: &AppConfig) -> SearchState {
    let Action::Search(action) = action else {
        return state;
    };

    match action {
        SearchAction::QueryChar(c) => {
            state.query.push(*c);
        }
        SearchAction::QueryBackspace => {
            state.query.pop();
        }
        SearchAction::QueryClear => {
            state.query.clear();
        }

        SearchAction::ToggleFocus => {
            state.focus = state.focus.toggled();
        }
        SearchAction::FocusList => {
            state.focus = Focus::List;
        }
        SearchAction::SelectNext => {
            let len = state.repositories.len();
            if len > 0 {
                state.selected_repository = (state.selected_repository + 1) % len;
            }
        }
        SearchAction::SelectPrevious => {
            let len = state.repositories.len();
            if len > 0 {
                state.selected_repository = if state.selected_repository == 0 {
                    len - 1
                } else {
                    state.selected_repository - 1
                };
            }
        }
        SearchAction::SelectFirst => {
            state.selected_repository = 0;
        }
        SearchAction::SelectLast => {
            state.selected_repository = state.repositories.len().saturating_sub(1);
        }

        SearchAction::Start { generation, query } => {
            log::debug!("Search #{} started for '{}'", generation, query);
            state.generation = *generation;
            state.error = None;
            state.notice = None;
            state.phase = SearchPhase::SearchingProfile;
        }
        SearchAction::ProfileLoaded {
            generation,
            query,
            profile,
        } => {
            if is_stale(&state, *generation) {
                return state;
            }
            // Load-more pages whichever user is on screen
            state.profile = Some(profile.clone());
            state.loaded_query = Some(query.clone());
            state.phase = SearchPhase::SearchingRepositories;
        }
        SearchAction::RepositoriesLoaded {
            generation,
            query,
            repositories,
        } => {
            if is_stale(&state, *generation) {
                return state;
            }
            state.repositories = repositories.clone();
            state.loaded_query = Some(query.clone());
            state.pages = PageTracker::first_page(repositories.is_empty());
            state.selected_repository = 0;
            state.phase = SearchPhase::Idle;
        }
        SearchAction::Failed {
            generation,
            message,
            not_found,
        } => {
            if is_stale(&state, *generation) {
                return state;
            }
            state.error = Some(message.clone());
            state.phase = SearchPhase::Idle;

            if *not_found && config.clear_results_on_not_found {
                state.profile = None;
                state.repositories.clear();
                state.loaded_query = None;
                state.pages = PageTracker::default();
                state.selected_repository = 0;
            }
        }

        SearchAction::LoadMoreStart { generation, page } => {
            if is_stale(&state, *generation) {
                return state;
            }
            state.error = None;
            state.notice = None;
            state.phase = SearchPhase::LoadingMore { page: *page };
        }
        SearchAction::MoreLoaded {
            generation,
            page,
            repositories,
        } => {
            if is_stale(&state, *generation) {
                return state;
            }
            if state.phase != (SearchPhase::LoadingMore { page: *page }) {
                log::debug!("Ignoring page {} that is not pending", page);
                return state;
            }
            if repositories.is_empty() {
                state.pages.exhausted = true;
                state.notice = Some("No more repositories".to_string());
            }
            state.repositories.extend(repositories.iter().cloned());
            state.pages.last_page = *page;
            state.phase = SearchPhase::Idle;
        }
        SearchAction::LoadMoreFailed {
            generation,
            message,
        } => {
            if is_stale(&state, *generation) {
                return state;
            }
            state.error = Some(message.clone());
            state.phase = SearchPhase::Idle;
        }

        SearchAction::Notice(message) => {
            state.notice = Some(message.clone());
        }

        // Handled by middleware
        SearchAction::Submit
        | SearchAction::LoadMore
        | SearchAction::OpenRepository
        | SearchAction::OpenAvatar => {}
    }

    state
}

fn is_stale(state: &SearchState, generation: u64) -> bool {
    if generation != state.generation {
        log::debug!(
            "Discarding result of search #{} (current #{})",
            generation,
            state.generation
        );
        return true;
    }
    false
}
