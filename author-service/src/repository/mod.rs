//! Repository abstraction for list/read access
//!
//! - **Generic reads**: [`Repository`] with `find_all` / `find_one`
//! - **Typed options**: [`RepositoryFilterOptions`] / [`RepositorySortOptions`],
//!   converted from the HTTP-facing filter and sort options
//! - **Reference backend**: [`MemoryRepository`] for any entity implementing
//!   [`Filterable`], [`Sortable`] and [`Identifiable`]
//!
//! # Example
//!
//! ```rust
//! use author_service::repository::{
//!     FilterCondition, MemoryRepository, OrderDirection, Repository,
//!     RepositoryFilterOptions, RepositorySortOptions,
//! };
//! use author_service::author::Author;
//! use uuid::Uuid;
//!
//! # tokio_test_block(async {
//! let repo: MemoryRepository<Uuid, Author> = MemoryRepository::with_data(Author::samples());
//! let filter = RepositoryFilterOptions::with_limit(5).condition(FilterCondition::eq("is_alive", true));
//! let sort = RepositorySortOptions::by("age", OrderDirection::Descending);
//! let authors = repo.find_all(&filter, &sort).await.unwrap();
//! assert!(authors.iter().all(|a| a.is_alive));
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

mod error;
mod memory;
mod options;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use memory::MemoryRepository;
pub use options::{
    FilterCondition, OrderDirection, RepositoryFilterOptions, RepositorySortOptions,
};
pub use traits::{Filterable, Identifiable, Repository, RepositoryResult, Sortable};
