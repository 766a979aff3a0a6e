//! Author filter parameters
//!
//! | Parameter | Operator | Type |
//! |---|---|---|
//! | `name` | `like` | string |
//! | `age` | `<op>:<n>` or `eq` | int |
//! | `is_alive` | `eq`, value must be a boolean literal | bool |
//! | `created_at` | `between` when the value holds `:`, else `eq` | date |
//!
//! Parameters are read in that order; an empty or missing one is skipped.

use crate::error::{Result, ValidationError};
use crate::filter::{parse_bool, DataType, FilterError, FilterOptions, Operator, RANGE_SEPARATOR};
use crate::middleware::QueryParams;

const FILTER_PARAMS_INVALID: &str = "filter params validation failed";

/// Append the author filter fields found in `params` to `options`
///
/// The first failing parameter aborts extraction; nothing after it is read.
///
/// # Example
///
/// ```rust
/// use author_service::author::extract_filter;
/// use author_service::filter::{FilterOptions, Operator};
/// use author_service::middleware::QueryParams;
///
/// let params: QueryParams = [("age", "gt:30")].into_iter().collect();
/// let options = extract_filter(&params, FilterOptions::new(10)).unwrap();
///
/// let age = &options.fields()[0];
/// assert_eq!((age.operator, age.value.as_str()), (Operator::GreaterThan, "30"));
/// ```
pub fn extract_filter(params: &QueryParams, mut options: FilterOptions) -> Result<FilterOptions> {
    let name = params.get("name");
    if !name.is_empty() {
        add_field(&mut options, "name", Operator::Like.as_str(), name, DataType::Str)?;
    }

    let age = params.get("age");
    if !age.is_empty() {
        let (operator, value) = age
            .split_once(RANGE_SEPARATOR)
            .unwrap_or((Operator::Eq.as_str(), age));
        add_field(&mut options, "age", operator, value, DataType::Int)?;
    }

    let is_alive = params.get("is_alive");
    if !is_alive.is_empty() {
        if parse_bool(is_alive).is_none() {
            return Err(ValidationError::new(FILTER_PARAMS_INVALID, "bool value wrong parameter")
                .with_param("is_alive", "this field should be boolean: true or false")
                .into());
        }
        add_field(&mut options, "is_alive", Operator::Eq.as_str(), is_alive, DataType::Bool)?;
    }

    let created_at = params.get("created_at");
    if !created_at.is_empty() {
        let operator = if created_at.contains(RANGE_SEPARATOR) {
            Operator::Between
        } else {
            Operator::Eq
        };
        add_field(&mut options, "created_at", operator.as_str(), created_at, DataType::Date)?;
    }

    Ok(options)
}

fn add_field(
    options: &mut FilterOptions,
    name: &str,
    operator: &str,
    value: &str,
    data_type: DataType,
) -> std::result::Result<(), ValidationError> {
    options
        .add_field(name, operator, value, data_type)
        .map_err(|err| match err {
            FilterError::UnknownOperator(_) => ValidationError::from(err).with_param(
                name,
                "operator should be one of eq, neq, lt, lte, gt, gte, between, like",
            ),
            other => other.into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::filter::Field;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().copied().collect()
    }

    fn extract(pairs: &[(&str, &str)]) -> Result<FilterOptions> {
        extract_filter(&params(pairs), FilterOptions::new(10))
    }

    fn field(name: &str, operator: Operator, value: &str, data_type: DataType) -> Field {
        Field {
            name: name.to_string(),
            value: value.to_string(),
            operator,
            data_type,
        }
    }

    fn validation(err: Error) -> ValidationError {
        match err {
            Error::Validation(v) => v,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_age_with_operator_prefix() {
        let options = extract(&[("age", "gt:30")]).unwrap();
        assert_eq!(
            options.fields(),
            &[field("age", Operator::GreaterThan, "30", DataType::Int)]
        );
    }

    #[test]
    fn test_age_without_operator_defaults_to_eq() {
        let options = extract(&[("age", "30")]).unwrap();
        assert_eq!(options.fields(), &[field("age", Operator::Eq, "30", DataType::Int)]);
    }

    #[test]
    fn test_age_splits_on_first_colon() {
        let options = extract(&[("age", "between:20:40")]).unwrap();
        assert_eq!(
            options.fields(),
            &[field("age", Operator::Between, "20:40", DataType::Int)]
        );
    }

    #[test]
    fn test_age_unknown_operator() {
        let err = validation(extract(&[("age", "approx:30")]).unwrap_err());
        assert!(err.mentions("age"));
        assert!(err.developer_message.contains("approx"));
    }

    #[test]
    fn test_name_uses_like() {
        let options = extract(&[("name", "tolstoy")]).unwrap();
        assert_eq!(
            options.fields(),
            &[field("name", Operator::Like, "tolstoy", DataType::Str)]
        );
    }

    #[test]
    fn test_is_alive_rejects_non_boolean() {
        let err = validation(extract(&[("is_alive", "maybe")]).unwrap_err());
        assert_eq!(err.message, "filter params validation failed");
        assert_eq!(err.developer_message, "bool value wrong parameter");
        assert_eq!(
            err.params.get("is_alive").map(String::as_str),
            Some("this field should be boolean: true or false")
        );
    }

    #[test]
    fn test_is_alive_accepts_boolean_literals() {
        for raw in ["true", "false", "1", "0", "T", "False"] {
            let options = extract(&[("is_alive", raw)]).unwrap();
            assert_eq!(
                options.fields(),
                &[field("is_alive", Operator::Eq, raw, DataType::Bool)]
            );
        }
    }

    #[test]
    fn test_created_at_range_and_single() {
        let options = extract(&[("created_at", "2020-01-01:2020-02-01")]).unwrap();
        assert_eq!(
            options.fields(),
            &[field(
                "created_at",
                Operator::Between,
                "2020-01-01:2020-02-01",
                DataType::Date
            )]
        );

        let options = extract(&[("created_at", "2020-01-01")]).unwrap();
        assert_eq!(options.fields()[0].operator, Operator::Eq);
    }

    #[test]
    fn test_no_parameters_yields_no_fields() {
        let options = extract(&[]).unwrap();
        assert!(options.is_empty());
        assert_eq!(options.limit(), 10);
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let options = extract(&[("name", ""), ("age", ""), ("is_alive", ""), ("created_at", "")]).unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn test_fixed_processing_order() {
        let options = extract(&[
            ("created_at", "2020-01-01"),
            ("is_alive", "true"),
            ("age", "lt:50"),
            ("name", "le"),
        ])
        .unwrap();
        let names: Vec<&str> = options.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age", "is_alive", "created_at"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let pairs = [("name", "le"), ("age", "gte:40"), ("created_at", "2020-01-01:2021-01-01")];
        let first = extract(&pairs).unwrap();
        let second = extract(&pairs).unwrap();
        assert_eq!(first.fields(), second.fields());
    }

    #[test]
    fn test_error_stops_before_later_parameters() {
        let err = validation(extract(&[("is_alive", "maybe"), ("created_at", "2020-01-01")]).unwrap_err());
        assert!(err.mentions("is_alive"));
        assert!(!err.mentions("created_at"));
    }
}
