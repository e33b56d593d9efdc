//! Application State

use gh_profile_config::AppConfig;
use gh_profile_search_theme::Theme;

use crate::keymap::{default_keymap, Keymap};
use crate::views::{ProfileSearchView, View};

use super::SearchState;

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    pub search: SearchState,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Application configuration
    pub app_config: AppConfig,
}

impl AppState {
    /// Create the initial state for a given configuration
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            app_config,
            ..Self::default()
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("search", &self.search)
            .field("theme", &"<theme>")
            .field("app_config", &self.app_config)
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            search: self.search.clone(),
            theme: self.theme.clone(),
            keymap: self.keymap.clone(),
            app_config: self.app_config.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(ProfileSearchView::new())],
            search: SearchState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            app_config: AppConfig::default(),
        }
    }
}
