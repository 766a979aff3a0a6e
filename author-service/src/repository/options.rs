//! Storage-facing query options
//!
//! The HTTP layer speaks [`FilterOptions`] / [`SortOptions`]; repositories
//! receive [`RepositoryFilterOptions`] / [`RepositorySortOptions`]. The
//! conversion is where raw filter text is parsed into typed [`FilterValue`]s,
//! so a repository never sees a value that doesn't match its declared type.
//!
//! # Example
//!
//! ```rust
//! use author_service::filter::{DataType, FilterOptions, FilterValue, Operator};
//! use author_service::repository::RepositoryFilterOptions;
//!
//! let mut options = FilterOptions::new(10);
//! options.add_field("age", "gt", "30", DataType::Int).unwrap();
//!
//! let repo_options = RepositoryFilterOptions::try_from(&options).unwrap();
//! assert_eq!(repo_options.limit, 10);
//! assert_eq!(repo_options.conditions[0].operator, Operator::GreaterThan);
//! assert_eq!(repo_options.conditions[0].value, FilterValue::Integer(30));
//! ```

use std::fmt;

use crate::error::ValidationError;
use crate::filter::{FilterError, FilterOptions, FilterValue, Operator};
use crate::sort::{SortOptions, SortOrder};

/// Sort direction for repository queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Sort in ascending order (A-Z, 0-9)
    #[default]
    Ascending,
    /// Sort in descending order (Z-A, 9-0)
    Descending,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

impl From<SortOrder> for OrderDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Self::Ascending,
            SortOrder::Desc => Self::Descending,
        }
    }
}

/// A single typed filter condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    /// The field name to filter on
    pub field: String,
    /// The comparison operator
    pub operator: Operator,
    /// The value to compare against
    pub value: FilterValue,
}

impl FilterCondition {
    /// Create a new filter condition
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<FilterValue>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Create an equality filter (field = value)
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, Operator::Eq, value)
    }

    /// Create a case-insensitive substring filter
    pub fn like(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(field, Operator::Like, FilterValue::String(pattern.into()))
    }

    /// Create an inclusive range filter from an already-built range value
    pub fn between(field: impl Into<String>, range: FilterValue) -> Self {
        Self::new(field, Operator::Between, range)
    }
}

/// Limit plus conjunctive conditions handed to [`Repository::find_all`](super::Repository::find_all)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryFilterOptions {
    /// Maximum number of rows to return
    pub limit: u32,
    /// Conditions, all of which must hold
    pub conditions: Vec<FilterCondition>,
}

impl RepositoryFilterOptions {
    /// Options with a limit and no conditions
    #[must_use]
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit,
            conditions: Vec::new(),
        }
    }

    /// Append a condition
    #[must_use]
    pub fn condition(mut self, condition: FilterCondition) -> Self {
        self.conditions.push(condition);
        self
    }
}

impl TryFrom<&FilterOptions> for RepositoryFilterOptions {
    type Error = ValidationError;

    fn try_from(options: &FilterOptions) -> Result<Self, Self::Error> {
        let conditions = options
            .fields()
            .iter()
            .map(|field| -> Result<FilterCondition, FilterError> {
                Ok(FilterCondition {
                    field: field.name.clone(),
                    operator: field.operator,
                    value: field.typed_value()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            limit: options.limit(),
            conditions,
        })
    }
}

/// Optional sort field plus direction
///
/// `field == None` means the repository returns rows in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositorySortOptions {
    /// Field to order by
    pub field: Option<String>,
    /// Direction
    pub direction: OrderDirection,
}

impl RepositorySortOptions {
    /// Order by `field` in `direction`
    pub fn by(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            field: Some(field.into()),
            direction,
        }
    }
}

impl From<&SortOptions> for RepositorySortOptions {
    fn from(options: &SortOptions) -> Self {
        Self {
            field: options.has_field().then(|| options.field.clone()),
            direction: options.order.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::DataType;
    use chrono::NaiveDate;

    #[test]
    fn test_order_direction_display() {
        assert_eq!(format!("{}", OrderDirection::Ascending), "asc");
        assert_eq!(format!("{}", OrderDirection::Descending), "desc");
    }

    #[test]
    fn test_filter_options_conversion_keeps_order_and_limit() {
        let mut options = FilterOptions::new(7);
        options.add_field("name", "like", "tol", DataType::Str).unwrap();
        options.add_field("age", "gte", "18", DataType::Int).unwrap();
        options.add_field("is_alive", "eq", "true", DataType::Bool).unwrap();
        options
            .add_field("created_at", "between", "2020-01-01:2020-02-01", DataType::Date)
            .unwrap();

        let converted = RepositoryFilterOptions::try_from(&options).unwrap();
        assert_eq!(converted.limit, 7);
        assert_eq!(
            converted.conditions,
            vec![
                FilterCondition::like("name", "tol"),
                FilterCondition::new("age", Operator::GreaterThanEq, 18_i64),
                FilterCondition::eq("is_alive", true),
                FilterCondition::between(
                    "created_at",
                    FilterValue::DateRange(
                        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                        NaiveDate::from_ymd_opt(2020, 2, 1).unwrap(),
                    )
                ),
            ]
        );
    }

    #[test]
    fn test_filter_options_conversion_names_bad_field() {
        let mut options = FilterOptions::new(10);
        options.add_field("age", "gt", "old", DataType::Int).unwrap();

        let err = RepositoryFilterOptions::try_from(&options).unwrap_err();
        assert!(err.mentions("age"));
    }

    #[test]
    fn test_empty_filter_options() {
        let converted = RepositoryFilterOptions::try_from(&FilterOptions::new(10)).unwrap();
        assert_eq!(converted, RepositoryFilterOptions::with_limit(10));
    }

    #[test]
    fn test_sort_options_conversion() {
        let sort = SortOptions::new("age", SortOrder::Desc);
        assert_eq!(
            RepositorySortOptions::from(&sort),
            RepositorySortOptions::by("age", OrderDirection::Descending)
        );
    }

    #[test]
    fn test_empty_sort_field_means_no_ordering() {
        let converted = RepositorySortOptions::from(&SortOptions::default());
        assert_eq!(converted.field, None);
        assert_eq!(converted.direction, OrderDirection::Ascending);
    }
}
