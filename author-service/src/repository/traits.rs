//! Repository trait definitions
//!
//! Async methods use RPITIT (return-position `impl Trait` in traits), so no
//! `async_trait` boxing is needed.
//!
//! - [`Repository`]: read access parameterised by identifier and entity type
//! - [`Filterable`], [`Sortable`], [`Identifiable`]: entity capabilities the
//!   in-memory repository evaluates queries against

use std::cmp::Ordering;
use std::future::Future;

use super::error::RepositoryError;
use super::options::{RepositoryFilterOptions, RepositorySortOptions};
use crate::filter::FilterValue;

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Read-only repository over one entity type
///
/// The same filter/sort vocabulary is reused for every entity; implementors
/// translate it into whatever their datastore understands.
///
/// # Example
///
/// ```rust,ignore
/// struct PgAuthors { pool: PgPool }
///
/// impl Repository<Uuid, Author> for PgAuthors {
///     async fn find_all(
///         &self,
///         filter: &RepositoryFilterOptions,
///         sort: &RepositorySortOptions,
///     ) -> RepositoryResult<Vec<Author>> {
///         // build WHERE / ORDER BY / LIMIT from the options
///         todo!()
///     }
///
///     async fn find_one(&self, id: &Uuid) -> RepositoryResult<Option<Author>> {
///         todo!()
///     }
/// }
/// ```
pub trait Repository<Id, Entity>: Send + Sync {
    /// Entities matching every condition, ordered by `sort`, at most `filter.limit` rows
    fn find_all(
        &self,
        filter: &RepositoryFilterOptions,
        sort: &RepositorySortOptions,
    ) -> impl Future<Output = RepositoryResult<Vec<Entity>>> + Send;

    /// Find an entity by its identifier
    ///
    /// Returns `Ok(None)` when absent.
    fn find_one(&self, id: &Id) -> impl Future<Output = RepositoryResult<Option<Entity>>> + Send;
}

/// Entity fields readable by name for filter evaluation
pub trait Filterable {
    /// Entity name used in error context
    const ENTITY: &'static str;

    /// Names accepted by [`field_value`](Self::field_value)
    const FILTER_FIELDS: &'static [&'static str];

    /// Current value of `field`, or `None` if the entity has no such field
    fn field_value(&self, field: &str) -> Option<FilterValue>;
}

/// Entity ordering by a named field
pub trait Sortable {
    /// Names accepted by [`compare_by`](Self::compare_by)
    const SORT_FIELDS: &'static [&'static str];

    /// Compare `self` with `other` on `field`; `None` if the field is unknown
    fn compare_by(&self, field: &str, other: &Self) -> Option<Ordering>;
}

/// Entity with a stable identifier
pub trait Identifiable<Id> {
    /// The identifier
    fn id(&self) -> &Id;
}
