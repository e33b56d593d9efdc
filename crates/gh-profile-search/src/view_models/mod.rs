pub mod key_bindings_view_model;
pub mod profile_search_view_model;

pub use key_bindings_view_model::KeyBindingsPanelViewModel;
pub use profile_search_view_model::{
    ProfilePanelViewModel, ProfileSearchViewModel, RepositoryRowViewModel,
};
