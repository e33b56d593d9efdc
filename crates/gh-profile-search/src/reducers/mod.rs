//! Reducers - pure functions producing new state from current state + action

pub mod app_reducer;
pub mod search_reducer;
