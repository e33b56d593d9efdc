//! Domain logic that is independent of views and effects

pub mod pagination;

pub use pagination::{next_page, page_from_item_count};
