//! Single-field sort directive
//!
//! [`SortOptions`] is seeded from `sort_by` / `sort_order` query parameters
//! (or their configured defaults) before the handler runs and is read-only
//! afterwards.
//!
//! # Example
//!
//! ```rust
//! use author_service::sort::{SortOptions, SortOrder};
//!
//! let options = SortOptions::new("created_at", SortOrder::Desc);
//! assert!(options.has_field());
//! assert_eq!("DESC".parse::<SortOrder>(), Ok(options.order));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort direction for list queries
///
/// Parsing is case-insensitive, so `asc`, `ASC` and `Asc` are all accepted.
/// Deserialization goes through the same parser; serialization is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SortOrder {
    /// Sort in ascending order (A-Z, 0-9, oldest first)
    #[default]
    Asc,
    /// Sort in descending order (Z-A, 9-0, newest first)
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// Error returned when a sort order is neither `asc` nor `desc`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sort order must be asc or desc, got {0:?}")]
pub struct InvalidSortOrder(pub String);

impl TryFrom<String> for SortOrder {
    type Error = InvalidSortOrder;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for SortOrder {
    type Err = InvalidSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(InvalidSortOrder(s.to_string()))
        }
    }
}

/// Field name plus direction
///
/// The zero value (empty field, ascending) means "no explicit ordering".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOptions {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub order: SortOrder,
}

impl SortOptions {
    /// Create sort options
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    /// Whether a sort field is set
    #[must_use]
    pub fn has_field(&self) -> bool {
        !self.field.is_empty()
    }
}
