//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy.

use crate::error::ClientError;
use crate::types::{Repository, UserProfile};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the read-only interface used by the profile search.
/// Every method performs exactly one request: no retries, no caching.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, UserProfile};
///
/// async fn lookup(client: &dyn GitHubClient) -> Result<UserProfile, gh_client::ClientError> {
///     client.fetch_user("octocat").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch the public profile of a user (`GET /users/{username}`)
    ///
    /// # Arguments
    ///
    /// * `username` - The login to look up; passed through without validation
    ///
    /// # Returns
    ///
    /// The profile, `ClientError::NotFound` when GitHub answers with a
    /// non-success status, or another `ClientError` for transport and
    /// parse failures.
    async fn fetch_user(&self, username: &str) -> Result<UserProfile, ClientError>;

    /// Fetch the repository collection behind a server-provided URL
    ///
    /// This is the `repos_url` field of a [`UserProfile`]. The URL is used
    /// as given by the server, it is not rebuilt from the username.
    ///
    /// # Returns
    ///
    /// The repositories in upstream order (first page only).
    async fn fetch_repositories(&self, repos_url: &str) -> Result<Vec<Repository>, ClientError>;

    /// Fetch one page of a user's repositories
    /// (`GET /users/{username}/repos?page={page}`)
    ///
    /// # Arguments
    ///
    /// * `username` - Owner of the repositories
    /// * `page` - 1-based page number; pages hold [`crate::PAGE_SIZE`] items
    ///
    /// # Returns
    ///
    /// The repositories of that page in upstream order. A page beyond the
    /// last one yields an empty list.
    async fn fetch_user_repositories(
        &self,
        username: &str,
        page: u32,
    ) -> Result<Vec<Repository>, ClientError>;
}
