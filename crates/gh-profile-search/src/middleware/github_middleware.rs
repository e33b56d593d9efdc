//! GitHub Operations Middleware
//!
//! Central middleware for all GitHub API interactions:
//! - Profile search (profile lookup followed by the first repository page)
//! - Loading further repository pages
//! - Browser integration for repositories and avatars
//!
//! Every search gets a new generation number. Result actions carry it, and
//! the reducer drops results from any generation but the latest.

use crate::actions::{Action, Event, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::next_page;
use crate::middleware::Middleware;
use crate::state::{AppState, SearchState};
use crate::utils::browser::open_url;
use anyhow::Context;
use gh_client::{user_message, GitHubClient, OctocrabClient};
use gh_profile_config::{AppConfig, PaginationStrategy};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for all GitHub API operations
pub struct GitHubMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn GitHubClient>,
    /// Generation of the most recently issued search
    last_generation: u64,
}

impl GitHubMiddleware {
    /// Create the middleware with an octocrab client for the configured API
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;

        // octocrab needs a runtime context while it is built
        let client = {
            let _guard = runtime.enter();
            OctocrabClient::with_base_url(&config.api_base_url)?
        };
        log::info!("GitHub client created for {}", config.api_base_url);

        Ok(Self::with_client(runtime, Arc::new(client)))
    }

    /// Create the middleware around an existing client
    pub fn with_client(runtime: Runtime, client: Arc<dyn GitHubClient>) -> Self {
        Self {
            runtime,
            client,
            last_generation: 0,
        }
    }

    fn handle_search(&mut self, query: &str, dispatcher: &Dispatcher) {
        self.last_generation += 1;
        let generation = self.last_generation;

        log::info!("Search #{}: looking up '{}'", generation, query);
        dispatcher.dispatch(Action::Search(SearchAction::Start {
            generation,
            query: query.to_string(),
        }));

        self.runtime.spawn(search_profile(
            Arc::clone(&self.client),
            generation,
            query.to_string(),
            dispatcher.clone(),
        ));
    }

    fn handle_load_more(&self, state: &AppState, dispatcher: &Dispatcher) {
        match plan_load_more(&state.search, state.app_config.pagination) {
            LoadMorePlan::Fetch {
                generation,
                username,
                page,
            } => {
                log::info!("Loading page {} of '{}' repositories", page, username);
                dispatcher.dispatch(Action::Search(SearchAction::LoadMoreStart {
                    generation,
                    page,
                }));
                self.runtime.spawn(load_repository_page(
                    Arc::clone(&self.client),
                    generation,
                    username,
                    page,
                    dispatcher.clone(),
                ));
            }
            LoadMorePlan::Exhausted => {
                dispatcher.dispatch(Action::Search(SearchAction::Notice(
                    "No more repositories".to_string(),
                )));
            }
            LoadMorePlan::Ignore(reason) => {
                log::debug!("Ignoring load more: {}", reason);
            }
        }
    }

    fn handle_open_repository(&self, state: &AppState) {
        let Some(repo) = state.search.selected() else {
            log::warn!("No repository selected for opening in browser");
            return;
        };

        log::info!("Opening {} in browser", repo.html_url);
        self.runtime.spawn(open_url(repo.html_url.clone()));
    }

    fn handle_open_avatar(&self, state: &AppState, dispatcher: &Dispatcher) {
        let Some(profile) = state.search.profile.as_ref() else {
            log::debug!("No profile loaded, nothing to open");
            return;
        };

        if !state.app_config.is_image_url_allowed(&profile.avatar_url) {
            log::warn!("Avatar host not allowed: {}", profile.avatar_url);
            dispatcher.dispatch(Action::Search(SearchAction::Notice(
                "Avatar host is not in allowed_image_hosts".to_string(),
            )));
            return;
        }

        log::info!("Opening avatar {} in browser", profile.avatar_url);
        self.runtime.spawn(open_url(profile.avatar_url.clone()));
    }
}

impl Middleware for GitHubMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Event(Event::SearchSubmitted { query }) => {
                self.handle_search(query, dispatcher);
                false
            }
            Action::Search(SearchAction::LoadMore) => {
                self.handle_load_more(state, dispatcher);
                false
            }
            Action::Search(SearchAction::OpenRepository) => {
                self.handle_open_repository(state);
                false
            }
            Action::Search(SearchAction::OpenAvatar) => {
                self.handle_open_avatar(state, dispatcher);
                false
            }
            _ => true,
        }
    }
}

/// Outcome of a "load more" request
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoadMorePlan {
    Fetch {
        generation: u64,
        username: String,
        page: u32,
    },
    Exhausted,
    Ignore(&'static str),
}

/// Decide whether and which page to load for the current state
pub(crate) fn plan_load_more(state: &SearchState, strategy: PaginationStrategy) -> LoadMorePlan {
    let Some(username) = state.loaded_query.as_ref() else {
        return LoadMorePlan::Ignore("no search has completed");
    };
    if state.repositories.is_empty() {
        return LoadMorePlan::Ignore("repository list is empty");
    }
    if !state.phase.is_idle() {
        return LoadMorePlan::Ignore("a request is in flight");
    }
    if strategy == PaginationStrategy::PageCounter && state.pages.exhausted {
        return LoadMorePlan::Exhausted;
    }

    LoadMorePlan::Fetch {
        generation: state.generation,
        username: username.clone(),
        page: next_page(strategy, &state.pages, state.repositories.len()),
    }
}

/// Look up a profile, then fetch the repositories behind its `repos_url`
pub(crate) async fn search_profile(
    client: Arc<dyn GitHubClient>,
    generation: u64,
    query: String,
    dispatcher: Dispatcher,
) {
    let profile = match client.fetch_user(&query).await {
        Ok(profile) => profile,
        Err(e) => {
            log::warn!("Search #{}: profile lookup failed: {}", generation, e);
            dispatcher.dispatch(Action::Search(SearchAction::Failed {
                generation,
                message: user_message(&e),
                not_found: e.is_not_found(),
            }));
            return;
        }
    };

    let repos_url = profile.repos_url.clone();
    dispatcher.dispatch(Action::Search(SearchAction::ProfileLoaded {
        generation,
        query: query.clone(),
        profile,
    }));

    match client.fetch_repositories(&repos_url).await {
        Ok(repositories) => {
            log::info!(
                "Search #{}: loaded {} repositories",
                generation,
                repositories.len()
            );
            dispatcher.dispatch(Action::Search(SearchAction::RepositoriesLoaded {
                generation,
                query,
                repositories,
            }));
        }
        Err(e) => {
            log::error!("Search #{}: repository fetch failed: {}", generation, e);
            dispatcher.dispatch(Action::Search(SearchAction::Failed {
                generation,
                message: user_message(&e),
                not_found: false,
            }));
        }
    }
}

/// Fetch one further page of repositories
pub(crate) async fn load_repository_page(
    client: Arc<dyn GitHubClient>,
    generation: u64,
    username: String,
    page: u32,
    dispatcher: Dispatcher,
) {
    match client.fetch_user_repositories(&username, page).await {
        Ok(repositories) => {
            log::info!(
                "Loaded {} repositories on page {} for '{}'",
                repositories.len(),
                page,
                username
            );
            dispatcher.dispatch(Action::Search(SearchAction::MoreLoaded {
                generation,
                page,
                repositories,
            }));
        }
        Err(e) => {
            log::error!("Loading page {} for '{}' failed: {}", page, username, e);
            dispatcher.dispatch(Action::Search(SearchAction::LoadMoreFailed {
                generation,
                message: user_message(&e),
            }));
        }
    }
}
