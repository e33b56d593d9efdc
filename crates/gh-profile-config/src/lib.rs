//! Configuration and file management for gh-profile-search
//!
//! This crate provides:
//! - File path utilities for config and cache directories
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

/// Default GitHub API endpoint (public GitHub)
pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub use app_config::{AppConfig, PaginationStrategy};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};
