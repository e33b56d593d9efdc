//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod search;

pub use app::AppState;
pub use search::{Focus, PageTracker, SearchPhase, SearchState};
