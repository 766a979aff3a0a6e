//! Filter options for list endpoints
//!
//! Query parameters are turned into [`Field`] constraints collected in a
//! request-scoped [`FilterOptions`]. The operator of every field is checked
//! against a closed set when it is added; the value stays raw text tagged
//! with a [`DataType`] until [`Field::typed_value`] parses it.
//!
//! # Example
//!
//! ```rust
//! use author_service::filter::{DataType, FilterOptions, Operator};
//!
//! let mut options = FilterOptions::new(10);
//! options.add_field("age", "gte", "18", DataType::Int).unwrap();
//! options.add_field("name", "like", "tolkien", DataType::Str).unwrap();
//!
//! let field = &options.fields()[0];
//! assert_eq!(field.operator, Operator::GreaterThanEq);
//! assert_eq!(field.value, "18");
//! ```

mod operator;
mod options;
mod value;

use thiserror::Error;

pub use operator::{DataType, Operator};
pub use options::{Field, FilterOptions};
pub use value::{parse_bool, parse_date, FilterValue, DATE_FORMAT, RANGE_SEPARATOR};

/// Errors raised while building or interpreting filter fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Operator name outside the supported set
    #[error("bad operator: {0}")]
    UnknownOperator(String),

    /// Raw value does not parse as the declared type
    #[error("invalid {data_type} value {value:?} for field {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Declared type
        data_type: DataType,
        /// Offending raw value
        value: String,
        /// Parser message
        reason: String,
    },
}
