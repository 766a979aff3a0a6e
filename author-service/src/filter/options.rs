//! Request-scoped filter options
//!
//! [`FilterOptions`] carries the page-size limit seeded before the handler
//! runs plus every constraint appended while query parameters are processed.

use serde::Serialize;

use super::value::{parse_bool, parse_date, FilterValue, RANGE_SEPARATOR};
use super::{DataType, FilterError, Operator};

/// One `(name, operator, value, type)` constraint
///
/// `value` is kept as the raw query text. Whether it actually parses as
/// `data_type` is checked by [`Field::typed_value`], not at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Field name the constraint applies to
    pub name: String,
    /// Raw, unparsed value
    pub value: String,
    /// Comparison operator
    pub operator: Operator,
    /// Declared value type
    #[serde(rename = "type")]
    pub data_type: DataType,
}

impl Field {
    /// Parse the raw value according to the declared type and operator
    ///
    /// `between` on `int` and `date` fields expects `<from>:<to>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use author_service::filter::{FilterOptions, FilterValue};
    /// use author_service::filter::DataType;
    ///
    /// let mut options = FilterOptions::new(10);
    /// options.add_field("age", "between", "20:40", DataType::Int).unwrap();
    /// assert_eq!(
    ///     options.fields()[0].typed_value().unwrap(),
    ///     FilterValue::IntegerRange(20, 40),
    /// );
    /// ```
    pub fn typed_value(&self) -> Result<FilterValue, FilterError> {
        let invalid = |reason: &str| FilterError::InvalidValue {
            field: self.name.clone(),
            data_type: self.data_type,
            value: self.value.clone(),
            reason: reason.to_string(),
        };

        match (self.data_type, self.operator) {
            (DataType::Str, _) => Ok(FilterValue::String(self.value.clone())),
            (DataType::Bool, _) => parse_bool(&self.value)
                .map(FilterValue::Boolean)
                .ok_or_else(|| invalid("expected true or false")),
            (DataType::Int, Operator::Between) => {
                let (lo, hi) = self
                    .value
                    .split_once(RANGE_SEPARATOR)
                    .ok_or_else(|| invalid("expected <from>:<to>"))?;
                let lo = lo.parse::<i64>().map_err(|e| invalid(&e.to_string()))?;
                let hi = hi.parse::<i64>().map_err(|e| invalid(&e.to_string()))?;
                if lo > hi {
                    return Err(invalid("range start is after range end"));
                }
                Ok(FilterValue::IntegerRange(lo, hi))
            }
            (DataType::Int, _) => self
                .value
                .parse::<i64>()
                .map(FilterValue::Integer)
                .map_err(|e| invalid(&e.to_string())),
            (DataType::Date, Operator::Between) => {
                let (from, to) = self
                    .value
                    .split_once(RANGE_SEPARATOR)
                    .ok_or_else(|| invalid("expected <from>:<to>"))?;
                let from = parse_date(from).map_err(|e| invalid(&e.to_string()))?;
                let to = parse_date(to).map_err(|e| invalid(&e.to_string()))?;
                if from > to {
                    return Err(invalid("range start is after range end"));
                }
                Ok(FilterValue::DateRange(from, to))
            }
            (DataType::Date, _) => parse_date(&self.value)
                .map(FilterValue::Date)
                .map_err(|e| invalid(&e.to_string())),
        }
    }
}

/// Pagination cap plus an ordered list of filter constraints
///
/// Constraints are appended in the order they are received. Repeated names
/// are neither merged nor deduplicated, so two calls on `created_at` build a
/// two-sided bound.
///
/// # Example
///
/// ```rust
/// use author_service::filter::{DataType, FilterOptions};
///
/// let mut options = FilterOptions::new(10);
/// options.add_field("age", "gt", "30", DataType::Int).unwrap();
/// assert!(options.add_field("age", "approx", "30", DataType::Int).is_err());
///
/// assert_eq!(options.limit(), 10);
/// assert_eq!(options.fields().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    limit: u32,
    fields: Vec<Field>,
}

impl FilterOptions {
    /// Create empty options with the given page-size limit
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            fields: Vec::new(),
        }
    }

    /// Pagination cap set at construction
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Append a constraint after validating the operator name
    ///
    /// Fails with [`FilterError::UnknownOperator`] when `operator` is not one
    /// of `eq neq lt lte gt gte between like`; the field list is untouched in
    /// that case.
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        operator: &str,
        value: impl Into<String>,
        data_type: DataType,
    ) -> Result<(), FilterError> {
        let operator = Operator::parse(operator)?;
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
            operator,
            data_type,
        });
        Ok(())
    }

    /// Constraints in insertion order
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Whether no constraint has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
