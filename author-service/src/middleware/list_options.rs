//! Pagination and sort seeding for list endpoints
//!
//! [`ListOptions`] is an extractor: before a list handler body runs it reads
//! `limit`, `sort_by` and `sort_order` from the query string, fills in the
//! configured defaults and hands the handler an empty [`FilterOptions`] plus a
//! validated [`SortOptions`]. The handler owns both values from then on.
//!
//! ```rust,ignore
//! async fn list(params: QueryParams, options: ListOptions) -> Result<Json<Vec<Author>>> {
//!     let filter = extract_filter(&params, options.filter)?;
//!     // ...
//! }
//! ```

use axum::{
    extract::{FromRef, FromRequestParts, Query},
    http::{request::Parts, Uri},
};

use crate::config::ListingConfig;
use crate::error::{Error, ValidationError};
use crate::filter::FilterOptions;
use crate::sort::{SortOptions, SortOrder};

/// Query parameter carrying the page size
pub const LIMIT_PARAM: &str = "limit";
/// Query parameter carrying the sort field
pub const SORT_BY_PARAM: &str = "sort_by";
/// Query parameter carrying the sort direction
pub const SORT_ORDER_PARAM: &str = "sort_order";

const LIST_PARAMS_INVALID: &str = "list params validation failed";

/// Raw query pairs in the order they appear in the URI
///
/// A missing parameter reads as the empty string.
///
/// # Example
///
/// ```rust
/// use author_service::middleware::QueryParams;
///
/// let params: QueryParams = [("age", "gt:30"), ("age", "lt:50")].into_iter().collect();
/// assert_eq!(params.get("age"), "gt:30");
/// assert_eq!(params.get("name"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Decode the query string of `uri`
    pub fn from_uri(uri: &Uri) -> Result<Self, ValidationError> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri).map_err(|e| {
            ValidationError::new("malformed query string", e.body_text())
        })?;
        Ok(Self(pairs))
    }

    /// First value for `key`, or `""` when absent
    pub fn get(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map_or("", |(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri)?)
    }
}

/// Request-scoped filter and sort options, seeded from [`ListingConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Empty filter options carrying the page size
    pub filter: FilterOptions,
    /// Validated sort directive
    pub sort: SortOptions,
}

impl ListingConfig {
    /// Build [`ListOptions`] from the pagination and sort parameters
    ///
    /// # Example
    ///
    /// ```rust
    /// use author_service::config::ListingConfig;
    /// use author_service::middleware::QueryParams;
    /// use author_service::sort::SortOrder;
    ///
    /// let params: QueryParams = [("limit", "500"), ("sort_order", "DESC")].into_iter().collect();
    /// let options = ListingConfig::default().seed(&params).unwrap();
    /// assert_eq!(options.filter.limit(), 100);
    /// assert_eq!(options.sort.field, "created_at");
    /// assert_eq!(options.sort.order, SortOrder::Desc);
    /// ```
    pub fn seed(&self, params: &QueryParams) -> Result<ListOptions, ValidationError> {
        let limit = match params.get(LIMIT_PARAM) {
            "" => self.default_limit,
            raw => match raw.parse::<u32>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(ValidationError::new(
                        LIST_PARAMS_INVALID,
                        format!("limit must be a positive integer, got {raw:?}"),
                    )
                    .with_param(LIMIT_PARAM, "this field should be a positive integer"))
                }
            },
        };

        let field = match params.get(SORT_BY_PARAM) {
            "" => self.default_sort_field.clone(),
            field => field.to_string(),
        };

        let order = match params.get(SORT_ORDER_PARAM) {
            "" => self.default_sort_order,
            raw => raw.parse::<SortOrder>().map_err(|e| {
                ValidationError::new(LIST_PARAMS_INVALID, e.to_string())
                    .with_param(SORT_ORDER_PARAM, "this field should be asc or desc")
            })?,
        };

        Ok(ListOptions {
            filter: FilterOptions::new(limit.min(self.max_limit)),
            sort: SortOptions::new(field, order),
        })
    }
}

impl<S> FromRequestParts<S> for ListOptions
where
    ListingConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = QueryParams::from_uri(&parts.uri)?;
        let options = ListingConfig::from_ref(state).seed(&params)?;
        tracing::debug!(
            limit = options.filter.limit(),
            sort_field = %options.sort.field,
            sort_order = %options.sort.order,
            "list options seeded"
        );
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_query_params_from_uri_keeps_order_and_decodes() {
        let uri: Uri = "/authors?name=J.%20R.%20R.&age=gt%3A30&age=lt:50".parse().unwrap();
        let params = QueryParams::from_uri(&uri).unwrap();
        assert_eq!(params.get("name"), "J. R. R.");
        // first occurrence wins
        assert_eq!(params.get("age"), "gt:30");
    }

    #[test]
    fn test_query_params_without_query_string() {
        let uri: Uri = "/authors".parse().unwrap();
        let params = QueryParams::from_uri(&uri).unwrap();
        assert_eq!(params, QueryParams::default());
        assert_eq!(params.get("limit"), "");
    }

    #[test]
    fn test_seed_defaults() {
        let options = ListingConfig::default().seed(&QueryParams::default()).unwrap();
        assert_eq!(options.filter.limit(), 10);
        assert!(options.filter.is_empty());
        assert_eq!(options.sort, SortOptions::new("created_at", SortOrder::Asc));
    }

    #[test]
    fn test_seed_reads_parameters() {
        let options = ListingConfig::default()
            .seed(&params(&[("limit", "3"), ("sort_by", "age"), ("sort_order", "desc")]))
            .unwrap();
        assert_eq!(options.filter.limit(), 3);
        assert_eq!(options.sort, SortOptions::new("age", SortOrder::Desc));
    }

    #[test]
    fn test_seed_caps_limit() {
        let config = ListingConfig {
            max_limit: 50,
            ..ListingConfig::default()
        };
        let options = config.seed(&params(&[("limit", "1000")])).unwrap();
        assert_eq!(options.filter.limit(), 50);
    }

    #[test]
    fn test_seed_rejects_bad_limit() {
        for raw in ["ten", "-1", "0", "1.5"] {
            let err = ListingConfig::default()
                .seed(&params(&[("limit", raw)]))
                .unwrap_err();
            assert!(err.mentions("limit"), "{raw}");
        }
    }

    #[test]
    fn test_seed_rejects_bad_sort_order() {
        let err = ListingConfig::default()
            .seed(&params(&[("sort_order", "sideways")]))
            .unwrap_err();
        assert!(err.mentions("sort_order"));
    }

    #[derive(Clone)]
    struct TestState {
        listing: ListingConfig,
    }

    impl FromRef<TestState> for ListingConfig {
        fn from_ref(state: &TestState) -> Self {
            state.listing.clone()
        }
    }

    #[tokio::test]
    async fn test_extractor_uses_state_config() {
        let state = TestState {
            listing: ListingConfig {
                default_limit: 7,
                default_sort_field: "name".to_string(),
                ..ListingConfig::default()
            },
        };
        let (mut parts, ()) = Request::builder()
            .uri("/authors?sort_order=Desc")
            .body(())
            .unwrap()
            .into_parts();

        let options = ListOptions::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(options.filter.limit(), 7);
        assert_eq!(options.sort, SortOptions::new("name", SortOrder::Desc));
    }
}
