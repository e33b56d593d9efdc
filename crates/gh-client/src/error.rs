//! Error taxonomy for GitHub client operations
//!
//! Octocrab reports every failure through one error type. The profile
//! search needs to tell a missing user apart from everything else, so the
//! profile lookup classifies by HTTP status before looking at the body.

/// Fallback text shown when an error carries no message of its own
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Errors that can occur while talking to the GitHub API
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The profile lookup answered with a non-success status
    #[error("User not found")]
    NotFound { username: String },

    /// A repository request answered with a non-success status
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Failed to parse GitHub response: {0}")]
    Parse(String),

    /// Network, TLS or any other failure reported by the HTTP stack
    #[error("{0}")]
    Transport(String),

    /// The client could not be constructed
    #[error("Failed to set up GitHub client: {0}")]
    Setup(String),
}

impl ClientError {
    /// Whether this is the "user not found" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }
}

impl From<octocrab::Error> for ClientError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => ClientError::Api {
                status: source.status_code.as_u16(),
                message: source.message.clone(),
            },
            octocrab::Error::Serde { source, .. } => ClientError::Parse(source.to_string()),
            octocrab::Error::Json { source, .. } => ClientError::Parse(source.to_string()),
            other => ClientError::Transport(other.to_string()),
        }
    }
}

/// Text to show the user for an error
///
/// Uses the error's own message, or [`UNKNOWN_ERROR_MESSAGE`] when that
/// message is empty.
pub fn user_message(err: &ClientError) -> String {
    let text = err.to_string();
    if text.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_is_fixed() {
        let err = ClientError::NotFound {
            username: "no-such-user-xyz".to_string(),
        };
        assert_eq!(err.to_string(), "User not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_user_message_uses_error_text() {
        let err = ClientError::Transport("connection refused".to_string());
        assert_eq!(user_message(&err), "connection refused");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_user_message_falls_back_when_empty() {
        let err = ClientError::Transport(String::new());
        assert_eq!(user_message(&err), UNKNOWN_ERROR_MESSAGE);

        let err = ClientError::Transport("   ".to_string());
        assert_eq!(user_message(&err), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_api_error_message() {
        let err = ClientError::Api {
            status: 500,
            message: "Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "GitHub API error (500): Server Error");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let serde_err = serde_json::from_str::<Vec<u32>>("{}").unwrap_err();
        let err = ClientError::Parse(serde_err.to_string());
        assert!(err.to_string().starts_with("Failed to parse GitHub response"));
    }
}
