pub mod list;

pub use list::{empty_message, thumbnail_url, EntityListItem, ListContent};
