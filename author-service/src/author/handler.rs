//! HTTP handlers for `/authors`

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use super::model::Author;
use super::query::extract_filter;
use crate::error::{Error, Result, ValidationError};
use crate::middleware::{ListOptions, QueryParams};
use crate::repository::Repository;
use crate::state::AppState;

/// Collection path
pub const AUTHORS_PATH: &str = "/authors";
/// Single-author path
pub const AUTHOR_PATH: &str = "/authors/{uuid}";

/// Register the author routes
pub fn routes<R>() -> Router<AppState<R>>
where
    R: Repository<Uuid, Author> + 'static,
{
    Router::new()
        .route(AUTHORS_PATH, get(list_authors::<R>))
        .route(AUTHOR_PATH, get(get_author::<R>))
}

/// `GET /authors`
///
/// Filter parameters are appended to the seeded filter options, then the
/// service runs with the seeded sort options. Any service failure is a 400.
pub async fn list_authors<R>(
    State(state): State<AppState<R>>,
    params: QueryParams,
    options: ListOptions,
) -> Result<Json<Vec<Author>>>
where
    R: Repository<Uuid, Author>,
{
    let ListOptions { filter, sort } = options;
    let filter = extract_filter(&params, filter)?;

    tracing::debug!(
        fields = filter.fields().len(),
        sort_field = %sort.field,
        sort_order = %sort.order,
        "listing authors"
    );

    let authors = state.authors().get_all(&filter, &sort).await?;
    Ok(Json(authors))
}

/// `GET /authors/{uuid}`
pub async fn get_author<R>(
    State(state): State<AppState<R>>,
    Path(raw): Path<String>,
) -> Result<Json<Author>>
where
    R: Repository<Uuid, Author>,
{
    let uuid = Uuid::parse_str(&raw).map_err(|e| {
        ValidationError::new("path params validation failed", e.to_string())
            .with_param("uuid", "this field should be a UUID")
    })?;

    state
        .authors()
        .get_one(uuid)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("author {uuid}")))
}
