//! In-memory repository
//!
//! Evaluates [`RepositoryFilterOptions`] and [`RepositorySortOptions`] against
//! a `Vec` of entities. Used by the binary as its datastore and by tests.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::error::{RepositoryError, RepositoryOperation};
use super::options::{FilterCondition, OrderDirection, RepositoryFilterOptions, RepositorySortOptions};
use super::traits::{Filterable, Identifiable, Repository, RepositoryResult, Sortable};
use crate::filter::{FilterValue, Operator};

/// In-memory implementation of [`Repository`].
pub struct MemoryRepository<Id, Entity> {
    entities: Arc<RwLock<Vec<Entity>>>,
    _id: PhantomData<fn() -> Id>,
}

impl<Id, Entity> Clone for MemoryRepository<Id, Entity> {
    fn clone(&self) -> Self {
        Self {
            entities: Arc::clone(&self.entities),
            _id: PhantomData,
        }
    }
}

impl<Id, Entity> fmt::Debug for MemoryRepository<Id, Entity> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryRepository").finish_non_exhaustive()
    }
}

impl<Id, Entity> Default for MemoryRepository<Id, Entity> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id, Entity> MemoryRepository<Id, Entity> {
    /// Creates a new empty memory repository.
    pub fn new() -> Self {
        Self::with_data(Vec::new())
    }

    /// Creates a new memory repository with initial data.
    pub fn with_data(entities: Vec<Entity>) -> Self {
        Self {
            entities: Arc::new(RwLock::new(entities)),
            _id: PhantomData,
        }
    }
}

impl<Id, Entity> Repository<Id, Entity> for MemoryRepository<Id, Entity>
where
    Id: PartialEq + Send + Sync,
    Entity: Filterable + Sortable + Identifiable<Id> + Clone + Send + Sync,
{
    async fn find_all(
        &self,
        filter: &RepositoryFilterOptions,
        sort: &RepositorySortOptions,
    ) -> RepositoryResult<Vec<Entity>> {
        validate::<Entity>(filter, sort)?;

        let entities = self.entities.read().await;
        let mut rows = Vec::new();
        for entity in entities.iter() {
            if matches_all(entity, &filter.conditions)? {
                rows.push(entity.clone());
            }
        }
        drop(entities);

        if let Some(field) = sort.field.as_deref() {
            rows.sort_by(|a, b| {
                let ordering = a.compare_by(field, b).unwrap_or(Ordering::Equal);
                match sort.direction {
                    OrderDirection::Ascending => ordering,
                    OrderDirection::Descending => ordering.reverse(),
                }
            });
        }

        rows.truncate(usize::try_from(filter.limit).unwrap_or(usize::MAX));
        tracing::debug!(
            entity = Entity::ENTITY,
            conditions = filter.conditions.len(),
            rows = rows.len(),
            "find_all evaluated in memory"
        );
        Ok(rows)
    }

    async fn find_one(&self, id: &Id) -> RepositoryResult<Option<Entity>> {
        let entities = self.entities.read().await;
        Ok(entities.iter().find(|entity| entity.id() == id).cloned())
    }
}

fn validate<Entity: Filterable + Sortable>(
    filter: &RepositoryFilterOptions,
    sort: &RepositorySortOptions,
) -> RepositoryResult<()> {
    if let Some(condition) = filter
        .conditions
        .iter()
        .find(|c| !Entity::FILTER_FIELDS.contains(&c.field.as_str()))
    {
        return Err(RepositoryError::unknown_field(
            RepositoryOperation::FindAll,
            Entity::ENTITY,
            &condition.field,
        ));
    }

    if let Some(field) = sort.field.as_deref() {
        if !Entity::SORT_FIELDS.contains(&field) {
            return Err(RepositoryError::unknown_field(
                RepositoryOperation::FindAll,
                Entity::ENTITY,
                field,
            ));
        }
    }

    Ok(())
}

fn matches_all<Entity: Filterable>(
    entity: &Entity,
    conditions: &[FilterCondition],
) -> RepositoryResult<bool> {
    for condition in conditions {
        if !matches(entity, condition)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn matches<Entity: Filterable>(entity: &Entity, condition: &FilterCondition) -> RepositoryResult<bool> {
    let actual = entity.field_value(&condition.field).ok_or_else(|| {
        RepositoryError::unknown_field(RepositoryOperation::FindAll, Entity::ENTITY, &condition.field)
    })?;

    let mismatch = || {
        RepositoryError::validation_failed(
            RepositoryOperation::FindAll,
            format!(
                "`{}` cannot be compared with {} using {}",
                condition.field, condition.value, condition.operator
            ),
        )
    };

    let ordering = || actual.compare(&condition.value).ok_or_else(mismatch);

    match condition.operator {
        Operator::Like => match (&actual, &condition.value) {
            (FilterValue::String(haystack), FilterValue::String(needle)) => Ok(haystack
                .to_lowercase()
                .contains(&needle.to_lowercase())),
            _ => Err(mismatch()),
        },
        Operator::Between => condition.value.contains(&actual).ok_or_else(mismatch),
        Operator::Eq => Ok(ordering()? == Ordering::Equal),
        Operator::NotEq => Ok(ordering()? != Ordering::Equal),
        Operator::LowerThan => Ok(ordering()? == Ordering::Less),
        Operator::LowerThanEq => Ok(ordering()? != Ordering::Greater),
        Operator::GreaterThan => Ok(ordering()? == Ordering::Greater),
        Operator::GreaterThanEq => Ok(ordering()? != Ordering::Less),
    }
}
