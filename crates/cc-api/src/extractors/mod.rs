//! Axum extractors for request handling
//!
//! Custom extractors for authentication, JSON bodies, path ids, and pagination.

mod auth;
mod json;
mod pagination;
mod path;

pub use auth::{AuthUser, OptionalAuthUser};
pub use json::JsonBody;
pub use pagination::{Pagination, PaginationParams};
pub use path::{IdeaIdPath, NotificationIdPath};
