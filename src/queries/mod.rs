pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;

pub use articles::{SortBy, SortOrder};
