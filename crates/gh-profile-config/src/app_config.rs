//! Application configuration
//!
//! Configuration loaded from .gh-profile-search.toml file.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::DEFAULT_API_URL;

/// How the next repository page is chosen when loading more
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaginationStrategy {
    /// Remember the last fetched page and request the one after it
    #[default]
    PageCounter,
    /// Derive the page from the number of loaded items: `count / 30 + 1`.
    /// Requests a wrong page once a short page has been loaded.
    ItemCount,
}

/// Application configuration loaded from .gh-profile-search.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the GitHub REST API (GitHub Enterprise: `https://host/api/v3`)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Page selection for "load more"
    #[serde(default)]
    pub pagination: PaginationStrategy,

    /// Drop the shown profile and repositories when a search finds no user
    #[serde(default)]
    pub clear_results_on_not_found: bool,

    /// Hosts whose images may be opened (https only)
    #[serde(default = "default_allowed_image_hosts")]
    pub allowed_image_hosts: Vec<String>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_allowed_image_hosts() -> Vec<String> {
    vec![
        "cdn.pixabay.com".to_string(),
        "avatars.githubusercontent.com".to_string(),
    ]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            pagination: PaginationStrategy::default(),
            clear_results_on_not_found: false,
            allowed_image_hosts: default_allowed_image_hosts(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Check whether an image URL points to an allowed host over https
    pub fn is_image_url_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        if parsed.scheme() != "https" {
            return false;
        }
        let Some(host) = parsed.host_str() else {
            return false;
        };

        self.allowed_image_hosts
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert_eq!(config.pagination, PaginationStrategy::PageCounter);
        assert!(!config.clear_results_on_not_found);
        assert_eq!(config.allowed_image_hosts.len(), 2);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            api_base_url = "https://ghe.example.com/api/v3"
            pagination = "item-count"
            clear_results_on_not_found = true
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api_base_url, "https://ghe.example.com/api/v3");
        assert_eq!(config.pagination, PaginationStrategy::ItemCount);
        assert!(config.clear_results_on_not_found);
        // allowed_image_hosts should use default
        assert!(config
            .allowed_image_hosts
            .contains(&"avatars.githubusercontent.com".to_string()));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            pagination = "page-counter"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.pagination, PaginationStrategy::PageCounter);
        // Other fields should use defaults
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert!(!config.clear_results_on_not_found);
    }

    #[test]
    fn test_config_rejects_unknown_pagination() {
        let toml = r#"
            pagination = "cursor"
        "#;
        assert!(toml::from_str::<AppConfig>(toml).is_err());
    }

    #[test]
    fn test_image_url_allowed() {
        let config = AppConfig::default();
        assert!(config.is_image_url_allowed("https://avatars.githubusercontent.com/u/583231?v=4"));
        assert!(config.is_image_url_allowed(
            "https://cdn.pixabay.com/photo/2022/01/30/13/33/github-6980894_960_720.png"
        ));
        assert!(config.is_image_url_allowed("https://AVATARS.githubusercontent.com:443/u/1"));
    }

    #[test]
    fn test_image_url_rejected() {
        let config = AppConfig::default();
        assert!(!config.is_image_url_allowed("http://avatars.githubusercontent.com/u/1"));
        assert!(!config.is_image_url_allowed("https://evil.example.com/u/1"));
        assert!(!config.is_image_url_allowed(
            "https://avatars.githubusercontent.com@evil.example.com/u/1"
        ));
        assert!(!config.is_image_url_allowed(
            "https://evil.example\\@avatars.githubusercontent.com/u/1"
        ));
        assert!(!config.is_image_url_allowed("https://avatars.githubusercontent.com.evil.example/u/1"));
        assert!(!config.is_image_url_allowed("avatars.githubusercontent.com/u/1"));
        assert!(!config.is_image_url_allowed(""));
    }
}
