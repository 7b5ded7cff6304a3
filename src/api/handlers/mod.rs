use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::CatalogItem;
use crate::services::aggregator::Aggregation;

pub mod movie;
pub mod person;
pub mod profile;
pub mod search;
pub mod tv;
pub mod watchlist;

/// Pages to aggregate when the caller does not ask for a specific count
pub const DEFAULT_PAGE_COUNT: i64 = 3;

/// `?pages=` query parameter for aggregated listings
#[derive(Debug, Deserialize)]
pub struct PagesQuery {
    pub pages: Option<i64>,
}

impl PagesQuery {
    pub fn count(&self) -> i64 {
        self.pages.unwrap_or(DEFAULT_PAGE_COUNT)
    }
}

/// Standard success envelope with the payload under `content`
#[derive(Debug, Serialize)]
pub struct ContentResponse<T> {
    pub success: bool,
    pub content: T,
}

impl<T> ContentResponse<T> {
    pub fn new(content: T) -> Self {
        Self {
            success: true,
            content,
        }
    }
}

/// Aggregated category listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub success: bool,
    pub content: Vec<CatalogItem>,
    pub total_pages: i64,
    pub total_results: usize,
}

impl From<Aggregation> for ListingResponse {
    fn from(aggregation: Aggregation) -> Self {
        Self {
            success: true,
            content: aggregation.items,
            total_pages: aggregation.total_pages,
            total_results: aggregation.total_results,
        }
    }
}

/// Aggregated similar-items listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarResponse {
    pub success: bool,
    pub similar: Vec<CatalogItem>,
    pub total_pages: i64,
    pub total_results: usize,
}

impl From<Aggregation> for SimilarResponse {
    fn from(aggregation: Aggregation) -> Self {
        Self {
            success: true,
            similar: aggregation.items,
            total_pages: aggregation.total_pages,
            total_results: aggregation.total_results,
        }
    }
}

/// Trending pick; `content` is omitted entirely when no item is available
#[derive(Debug, Serialize)]
pub struct TrendingResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<CatalogItem>,
}

/// Video clips for one item
#[derive(Debug, Serialize)]
pub struct TrailersResponse {
    pub success: bool,
    pub trailers: Value,
}

/// Mutation acknowledgement
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
