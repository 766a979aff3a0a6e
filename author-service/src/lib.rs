//! # author-service
//!
//! Paginated, filterable, sortable author listing over a repository abstraction.
//!
//! ## Request pipeline
//!
//! - **Seeding**: [`middleware::ListOptions`] reads `limit`, `sort_by` and
//!   `sort_order` and hands the handler empty filter options plus a sort directive
//! - **Extraction**: [`author::extract_filter`] turns `name`, `age`, `is_alive`
//!   and `created_at` into validated [`filter::Field`]s
//! - **Adaptation**: [`repository::RepositoryFilterOptions`] parses each field
//!   into a typed [`filter::FilterValue`]
//! - **Execution**: any [`repository::Repository`] runs the query
//!
//! ## Example
//!
//! ```rust,no_run
//! use author_service::prelude::*;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let repository: MemoryRepository<Uuid, Author> = MemoryRepository::with_data(Author::samples());
//!     let state = AppState::new(config.clone(), AuthorService::new(repository));
//!
//!     Server::new(config).serve(app(state)).await
//! }
//! ```

pub mod author;
pub mod config;
pub mod error;
pub mod filter;
pub mod middleware;
pub mod observability;
pub mod repository;
pub mod server;
pub mod sort;
pub mod state;

use axum::Router;
use uuid::Uuid;

/// Author routes bound to `state`
pub fn app<R>(state: state::AppState<R>) -> Router
where
    R: repository::Repository<Uuid, author::Author> + 'static,
{
    author::routes::<R>().with_state(state)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app;
    pub use crate::author::{extract_filter, Author, AuthorService, ServiceError};
    pub use crate::config::{Config, ListingConfig};
    pub use crate::error::{Error, ErrorResponse, Result, ValidationError};
    pub use crate::filter::{DataType, Field, FilterOptions, FilterValue, Operator};
    pub use crate::middleware::{ListOptions, QueryParams};
    pub use crate::observability::init_tracing;
    pub use crate::repository::{
        FilterCondition, MemoryRepository, OrderDirection, Repository, RepositoryError,
        RepositoryFilterOptions, RepositorySortOptions,
    };
    pub use crate::server::Server;
    pub use crate::sort::{SortOptions, SortOrder};
    pub use crate::state::AppState;

    pub use axum::{extract::State, routing::get, Json, Router};
}
