//! Event types
//!
//! Events represent facts that have occurred and should be broadcast to the
//! middleware chain. Events are never forwarded to the reducers.
//!
//! ## Naming Convention
//!
//! Events use past tense names indicating something has happened:
//! - `SearchSubmitted` (not `SubmitSearch`)

/// Events that re-enter the middleware chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user submitted the search input.
    ///
    /// Emitted by the main loop after the submit has been reduced, so `query`
    /// holds every keystroke typed before Enter.
    SearchSubmitted { query: String },
}
