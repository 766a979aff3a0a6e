//! Comparison operators and value data types for filter fields
//!
//! Both enums travel over the wire by their short lowercase names, which is
//! also how they are spelled inside query parameters (`age=gte:30`).
//!
//! # Example
//!
//! ```rust
//! use author_service::filter::{DataType, Operator};
//!
//! let op: Operator = "gte".parse().unwrap();
//! assert_eq!(op, Operator::GreaterThanEq);
//! assert_eq!(op.to_string(), "gte");
//! assert_eq!(DataType::Date.as_str(), "date");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::FilterError;

/// Comparison semantics applied to a filter field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Equal to (`eq`)
    #[serde(rename = "eq")]
    Eq,
    /// Not equal to (`neq`)
    #[serde(rename = "neq")]
    NotEq,
    /// Lower than (`lt`)
    #[serde(rename = "lt")]
    LowerThan,
    /// Lower than or equal to (`lte`)
    #[serde(rename = "lte")]
    LowerThanEq,
    /// Greater than (`gt`)
    #[serde(rename = "gt")]
    GreaterThan,
    /// Greater than or equal to (`gte`)
    #[serde(rename = "gte")]
    GreaterThanEq,
    /// Inclusive range, value is `<from>:<to>` (`between`)
    #[serde(rename = "between")]
    Between,
    /// Substring match (`like`)
    #[serde(rename = "like")]
    Like,
}

impl Operator {
    /// Every operator accepted by [`FilterOptions::add_field`](super::FilterOptions::add_field)
    pub const ALL: [Operator; 8] = [
        Self::Eq,
        Self::NotEq,
        Self::LowerThan,
        Self::LowerThanEq,
        Self::GreaterThan,
        Self::GreaterThanEq,
        Self::Between,
        Self::Like,
    ];

    /// Wire name of the operator
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::NotEq => "neq",
            Self::LowerThan => "lt",
            Self::LowerThanEq => "lte",
            Self::GreaterThan => "gt",
            Self::GreaterThanEq => "gte",
            Self::Between => "between",
            Self::Like => "like",
        }
    }

    /// Parse a wire name, rejecting anything outside the closed set
    pub fn parse(value: &str) -> Result<Self, FilterError> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == value)
            .ok_or_else(|| FilterError::UnknownOperator(value.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Declared type of a filter value, used by the storage-side translator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Free text (`string`)
    #[serde(rename = "string")]
    Str,
    /// Signed integer (`int`)
    Int,
    /// Calendar date, `YYYY-MM-DD` (`date`)
    Date,
    /// `true` / `false` (`bool`)
    Bool,
}

impl DataType {
    /// Wire name of the data type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Int => "int",
            Self::Date => "date",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
