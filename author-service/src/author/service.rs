//! Author service
//!
//! Adapts request options into repository options and wraps repository
//! failures with the operation that was attempted.

use thiserror::Error;
use uuid::Uuid;

use super::model::Author;
use crate::error::ValidationError;
use crate::filter::FilterOptions;
use crate::repository::{
    Repository, RepositoryError, RepositoryFilterOptions, RepositorySortOptions,
};
use crate::sort::SortOptions;

/// Service-layer failure
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Listing failed in the repository
    #[error("failed to get all authors due to error {0}")]
    ListFailed(#[source] RepositoryError),

    /// Single read failed in the repository
    #[error("failed to get author due to error {0}")]
    GetFailed(#[source] RepositoryError),

    /// Filter values did not parse for their declared types
    #[error(transparent)]
    InvalidOptions(ValidationError),
}

/// Read operations over authors
#[derive(Debug, Clone)]
pub struct AuthorService<R> {
    repository: R,
}

impl<R> AuthorService<R>
where
    R: Repository<Uuid, Author>,
{
    /// Create a service over `repository`
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Authors matching `filter`, ordered by `sort`
    pub async fn get_all(
        &self,
        filter: &FilterOptions,
        sort: &SortOptions,
    ) -> Result<Vec<Author>, ServiceError> {
        let filter = RepositoryFilterOptions::try_from(filter).map_err(ServiceError::InvalidOptions)?;
        let sort = RepositorySortOptions::from(sort);

        tracing::debug!(
            limit = filter.limit,
            conditions = filter.conditions.len(),
            sort_field = sort.field.as_deref().unwrap_or(""),
            sort_direction = %sort.direction,
            "listing authors"
        );

        self.repository
            .find_all(&filter, &sort)
            .await
            .map_err(|e| {
                tracing::error!(operation = %e.operation, kind = %e.kind, "{}", e);
                ServiceError::ListFailed(e)
            })
    }

    /// The author with `uuid`, if any
    pub async fn get_one(&self, uuid: Uuid) -> Result<Option<Author>, ServiceError> {
        self.repository.find_one(&uuid).await.map_err(|e| {
            tracing::error!(operation = %e.operation, kind = %e.kind, author = %uuid, "{}", e);
            ServiceError::GetFailed(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DataType;
    use crate::repository::{MemoryRepository, RepositoryOperation, RepositoryResult};
    use crate::sort::SortOrder;

    struct Unreachable;

    impl Repository<Uuid, Author> for Unreachable {
        async fn find_all(
            &self,
            _filter: &RepositoryFilterOptions,
            _sort: &RepositorySortOptions,
        ) -> RepositoryResult<Vec<Author>> {
            Err(RepositoryError::connection_failed(
                RepositoryOperation::FindAll,
                "connection refused",
            ))
        }

        async fn find_one(&self, _id: &Uuid) -> RepositoryResult<Option<Author>> {
            Err(RepositoryError::connection_failed(
                RepositoryOperation::FindOne,
                "connection reset",
            ))
        }
    }

    fn service() -> AuthorService<MemoryRepository<Uuid, Author>> {
        AuthorService::new(MemoryRepository::with_data(Author::samples()))
    }

    #[tokio::test]
    async fn test_get_all_applies_filter_sort_and_limit() {
        let mut filter = FilterOptions::new(2);
        filter.add_field("is_alive", "eq", "true", DataType::Bool).unwrap();
        let sort = SortOptions::new("age", SortOrder::Desc);

        let authors = service().get_all(&filter, &sort).await.unwrap();
        let names: Vec<&str> = authors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Haruki Murakami", "Olga Tokarczuk"]);
    }

    #[tokio::test]
    async fn test_get_all_without_sort_field_keeps_storage_order() {
        let authors = service()
            .get_all(&FilterOptions::new(10), &SortOptions::default())
            .await
            .unwrap();
        assert_eq!(authors, Author::samples());
    }

    #[tokio::test]
    async fn test_get_all_rejects_unparsable_value() {
        let mut filter = FilterOptions::new(10);
        filter.add_field("created_at", "eq", "yesterday", DataType::Date).unwrap();

        let err = service()
            .get_all(&filter, &SortOptions::default())
            .await
            .unwrap_err();
        match err {
            ServiceError::InvalidOptions(v) => assert!(v.mentions("created_at")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_repository_failures_are_wrapped() {
        let service = AuthorService::new(Unreachable);

        let err = service
            .get_all(&FilterOptions::new(10), &SortOptions::default())
            .await
            .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("failed to get all authors due to error"));

        let err = service.get_one(Uuid::nil()).await.unwrap_err();
        assert!(err.to_string().starts_with("failed to get author due to error"));
    }

    #[tokio::test]
    async fn test_get_one() {
        let service = service();
        let found = service.get_one(Uuid::from_u128(3)).await.unwrap();
        assert_eq!(found.map(|a| a.name), Some("Haruki Murakami".to_string()));
        assert!(service.get_one(Uuid::nil()).await.unwrap().is_none());
    }
}
