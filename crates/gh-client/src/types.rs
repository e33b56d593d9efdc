//! GitHub API data transfer objects
//!
//! These types represent the subset of the GitHub API payloads the
//! profile search displays. Unknown fields are ignored, optional fields
//! that GitHub sends as `null` become `None`.

use serde::{Deserialize, Serialize};

/// A user profile from `GET /users/{username}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Login name as spelled by GitHub (may differ in case from the query)
    pub login: String,

    /// URL of the avatar image
    pub avatar_url: String,

    /// Free-form bio, `None` when the user has not set one
    #[serde(default)]
    pub bio: Option<String>,

    /// URL of the user's repository collection
    pub repos_url: String,
}

/// A public repository from a repository collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository ID (unique on GitHub, not checked locally)
    pub id: u64,

    /// Repository name without owner
    pub name: String,

    /// URL for opening in browser
    pub html_url: String,

    /// Repository description
    #[serde(default)]
    pub description: Option<String>,

    /// Number of stars
    #[serde(default)]
    pub stargazers_count: u64,

    /// Number of forks
    #[serde(default)]
    pub forks_count: u64,
}
