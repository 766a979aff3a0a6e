//! Typed filter values
//!
//! A [`Field`](super::Field) keeps its value as raw text. [`FilterValue`] is
//! what that text becomes once it has been parsed against the field's
//! declared [`DataType`](super::DataType) and operator.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Date layout accepted by `date` fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between the bounds of a range value (`2020-01-01:2020-02-01`)
pub const RANGE_SEPARATOR: char = ':';

/// A parsed filter value
///
/// # Example
///
/// ```rust
/// use author_service::filter::FilterValue;
///
/// let value: FilterValue = 42_i64.into();
/// assert_eq!(value, FilterValue::Integer(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// String value
    String(String),
    /// 64-bit integer value
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    /// Calendar date
    Date(NaiveDate),
    /// Inclusive integer range
    IntegerRange(i64, i64),
    /// Inclusive date range
    DateRange(NaiveDate, NaiveDate),
}

impl FilterValue {
    /// Compare two scalar values of the same variant
    ///
    /// Returns `None` for mismatched variants and for ranges, which have no
    /// total order against a scalar.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::String(a), Self::String(b)) => Some(a.cmp(b)),
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Boolean(a), Self::Boolean(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Whether a scalar value lies inside this range, bounds included
    ///
    /// Returns `None` when `self` is not a range or the variants don't pair up.
    #[must_use]
    pub fn contains(&self, value: &Self) -> Option<bool> {
        match (self, value) {
            (Self::IntegerRange(lo, hi), Self::Integer(v)) => Some(lo <= v && v <= hi),
            (Self::DateRange(from, to), Self::Date(d)) => Some(from <= d && d <= to),
            _ => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Self::IntegerRange(lo, hi) => write!(f, "{lo}{RANGE_SEPARATOR}{hi}"),
            Self::DateRange(from, to) => write!(
                f,
                "{}{RANGE_SEPARATOR}{}",
                from.format(DATE_FORMAT),
                to.format(DATE_FORMAT)
            ),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

/// Parse the boolean literals accepted in query parameters
///
/// Accepts `1 t T TRUE true True 0 f F FALSE false False`.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_bool_literals() {
        for truthy in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(truthy), Some(true), "{truthy}");
        }
        for falsy in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(falsy), Some(false), "{falsy}");
        }
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("tRuE"), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2020-01-31").unwrap(), date(2020, 1, 31));
        assert!(parse_date("2020-13-01").is_err());
        assert!(parse_date("01/02/2020").is_err());
    }

    #[test]
    fn test_compare_same_variant() {
        assert_eq!(
            FilterValue::Integer(1).compare(&FilterValue::Integer(2)),
            Some(Ordering::Less)
        );
        assert_eq!(
            FilterValue::Date(date(2021, 1, 1)).compare(&FilterValue::Date(date(2020, 1, 1))),
            Some(Ordering::Greater)
        );
        assert_eq!(
            FilterValue::Integer(1).compare(&FilterValue::String("1".into())),
            None
        );
    }

    #[test]
    fn test_range_contains_bounds() {
        let range = FilterValue::DateRange(date(2020, 1, 1), date(2020, 2, 1));
        assert_eq!(range.contains(&FilterValue::Date(date(2020, 1, 1))), Some(true));
        assert_eq!(range.contains(&FilterValue::Date(date(2020, 2, 1))), Some(true));
        assert_eq!(range.contains(&FilterValue::Date(date(2020, 2, 2))), Some(false));
        assert_eq!(range.contains(&FilterValue::Integer(3)), None);

        let ages = FilterValue::IntegerRange(20, 40);
        assert_eq!(ages.contains(&FilterValue::Integer(40)), Some(true));
        assert_eq!(ages.contains(&FilterValue::Integer(41)), Some(false));
    }

    #[test]
    fn test_display_round_trips_wire_format() {
        let range = FilterValue::DateRange(date(2020, 1, 1), date(2020, 2, 1));
        assert_eq!(range.to_string(), "2020-01-01:2020-02-01");
        assert_eq!(FilterValue::IntegerRange(20, 40).to_string(), "20:40");
    }
}
