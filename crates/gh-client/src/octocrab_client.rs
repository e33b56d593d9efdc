//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! This client makes real, unauthenticated API calls without any caching.
//! Usernames are percent-encoded into the route, so any query string makes
//! a request.

use crate::client::GitHubClient;
use crate::error::ClientError;
use crate::types::{Repository, UserProfile};
use crate::DEFAULT_API_URL;
use async_trait::async_trait;
use log::debug;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::Serialize;
use std::sync::Arc;

/// Encode a username as a single path segment
fn user_path_segment(username: &str) -> String {
    urlencoding::encode(username).into_owned()
}

/// Query parameters for a paginated repository request
#[derive(Debug, Serialize)]
struct PageParams {
    page: u32,
}

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build an unauthenticated client talking to `base_url`
    ///
    /// Every request is attempted exactly once. Must be called from within
    /// a tokio runtime, octocrab spawns its service buffer on construction.
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);

        if base_url.trim_end_matches('/') != DEFAULT_API_URL {
            debug!("Using custom GitHub API base URL: {}", base_url);
            builder = builder
                .base_uri(base_url)
                .map_err(|e| ClientError::Setup(e.to_string()))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;

        Ok(Self::new(Arc::new(octocrab)))
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_user(&self, username: &str) -> Result<UserProfile, ClientError> {
        debug!("Fetching profile for '{}'", username);

        let route = format!("/users/{}", user_path_segment(username));
        let response = self.octocrab._get(route.as_str()).await?;

        // Any non-success status means "not found", whatever the body holds
        let status = response.status();
        if !status.is_success() {
            debug!("Profile lookup for '{}' answered {}", username, status);
            return Err(ClientError::NotFound {
                username: username.to_string(),
            });
        }

        let body = self.octocrab.body_to_string(response).await?;
        let profile: UserProfile =
            serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))?;

        debug!("Fetched profile for '{}' (login: {})", username, profile.login);
        Ok(profile)
    }

    async fn fetch_repositories(&self, repos_url: &str) -> Result<Vec<Repository>, ClientError> {
        debug!("Fetching repositories from {}", repos_url);

        // Absolute URLs are passed through by octocrab unchanged
        let repos: Vec<Repository> = self.octocrab.get(repos_url, None::<&()>).await?;

        debug!("Fetched {} repositories from {}", repos.len(), repos_url);
        Ok(repos)
    }

    async fn fetch_user_repositories(
        &self,
        username: &str,
        page: u32,
    ) -> Result<Vec<Repository>, ClientError> {
        debug!("Fetching repositories page {} for '{}'", page, username);

        let route = format!("/users/{}/repos", user_path_segment(username));
        let repos: Vec<Repository> = self
            .octocrab
            .get(route, Some(&PageParams { page }))
            .await?;

        debug!(
            "Fetched {} repositories on page {} for '{}'",
            repos.len(),
            page,
            username
        );
        Ok(repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_path_segment_encodes_reserved_characters() {
        assert_eq!(user_path_segment("octocat"), "octocat");
        assert_eq!(user_path_segment("foo bar"), "foo%20bar");
        assert_eq!(user_path_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(user_path_segment("jürgen"), "j%C3%BCrgen");
    }
}
