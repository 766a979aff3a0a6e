//! Author resource: entity, filter extraction, service and HTTP handlers

pub mod handler;
pub mod model;
pub mod query;
pub mod service;

pub use handler::{get_author, list_authors, routes};
pub use model::Author;
pub use query::extract_filter;
pub use service::{AuthorService, ServiceError};
