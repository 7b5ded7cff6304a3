/// Catalog data provider abstraction
///
/// The upstream catalog API is an external collaborator: given a resource
/// path it returns a parsed JSON document or fails. The trait keeps the
/// pipelines independent of the concrete HTTP client so tests can
/// substitute a canned provider.
use serde_json::Value;

use crate::{
    error::AppResult,
    models::CatalogPage,
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for upstream catalog providers
///
/// `path` is the resource path relative to the provider's base URL,
/// including any query string (e.g. `movie/603/similar?page=2`).
/// Implementations fail with `AppError::NotFound` when the upstream
/// reports the resource missing and `AppError::Upstream` for any other
/// upstream failure; callers on list pipelines fold the former into the
/// latter via `AppError::not_found_as_upstream`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetches one resource and returns the raw JSON body
    async fn fetch_value(&self, path: &str) -> AppResult<Value>;

    /// Fetches one page of a paginated list resource
    async fn fetch_page(&self, path: &str) -> AppResult<CatalogPage>;
}
