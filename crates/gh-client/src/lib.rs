//! Read-only GitHub API client for user profiles and repositories
//!
//! This crate provides a trait-based GitHub API client covering the three
//! requests a profile search needs. The trait keeps the application free of
//! octocrab specifics and lets tests substitute an in-memory client.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              GitHubClient trait              │
//! │  - fetch_user()                              │
//! │  - fetch_repositories()                      │
//! │  - fetch_user_repositories()                 │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient};
//!
//! # async fn example() -> Result<(), gh_client::ClientError> {
//! let client = OctocrabClient::with_base_url("https://api.github.com")?;
//!
//! let profile = client.fetch_user("octocat").await?;
//! let first_page = client.fetch_repositories(&profile.repos_url).await?;
//! let second_page = client.fetch_user_repositories("octocat", 2).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod octocrab_client;
pub mod types;

pub use gh_profile_config::DEFAULT_API_URL;

/// Number of repositories GitHub returns per page when no `per_page` is sent
pub const PAGE_SIZE: usize = 30;

pub use client::GitHubClient;
pub use error::{user_message, ClientError, UNKNOWN_ERROR_MESSAGE};
pub use octocrab_client::OctocrabClient;
pub use types::{Repository, UserProfile};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
