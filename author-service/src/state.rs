//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::author::AuthorService;
use crate::config::{Config, ListingConfig};

/// Shared state: configuration plus the author service
pub struct AppState<R> {
    config: Arc<Config>,
    authors: Arc<AuthorService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            authors: Arc::clone(&self.authors),
        }
    }
}

impl<R> AppState<R> {
    /// Create new application state
    pub fn new(config: Config, authors: AuthorService<R>) -> Self {
        Self {
            config: Arc::new(config),
            authors: Arc::new(authors),
        }
    }

    /// Get the author service
    pub fn authors(&self) -> &AuthorService<R> {
        &self.authors
    }
}

impl<R> FromRef<AppState<R>> for ListingConfig {
    fn from_ref(state: &AppState<R>) -> Self {
        state.config.listing.clone()
    }
}
