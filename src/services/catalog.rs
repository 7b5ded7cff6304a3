/// Catalog read operations
///
/// Single-item lookups are direct pass-throughs of the upstream JSON and
/// keep the not-found branch; list operations go through the aggregation
/// pipeline. All upstream resources are requested with `language=en-US`.
use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::AppResult,
    models::MediaKind,
    services::{
        aggregator::{self, Aggregation},
        providers::CatalogProvider,
    },
};

/// Full record for one catalog item
pub async fn details(
    provider: &Arc<dyn CatalogProvider>,
    kind: MediaKind,
    id: u64,
) -> AppResult<Value> {
    provider
        .fetch_value(&format!("{}/{}?language=en-US", kind.as_str(), id))
        .await
}

/// Video clips for one item; the upstream's `results` array is the payload
pub async fn trailers(
    provider: &Arc<dyn CatalogProvider>,
    kind: MediaKind,
    id: u64,
) -> AppResult<Value> {
    let mut body = provider
        .fetch_value(&format!("{}/{}/videos?language=en-US", kind.as_str(), id))
        .await?;

    Ok(body
        .get_mut("results")
        .map(Value::take)
        .unwrap_or(Value::Array(Vec::new())))
}

/// Cast and crew for one movie or TV show
pub async fn credits(
    provider: &Arc<dyn CatalogProvider>,
    kind: MediaKind,
    id: u64,
) -> AppResult<Value> {
    provider
        .fetch_value(&format!("{}/{}/credits?language=en-US", kind.as_str(), id))
        .await
}

/// A person's movie or TV credit list
pub async fn person_credits(
    provider: &Arc<dyn CatalogProvider>,
    id: u64,
    kind: MediaKind,
) -> AppResult<Value> {
    provider
        .fetch_value(&format!("person/{}/{}_credits?language=en-US", id, kind.as_str()))
        .await
}

/// Items similar to one catalog item, aggregated over `pages` pages
pub async fn similar(
    provider: &Arc<dyn CatalogProvider>,
    kind: MediaKind,
    id: u64,
    pages: i64,
) -> AppResult<Aggregation> {
    aggregator::aggregate(
        provider,
        |page| {
            format!(
                "{}/{}/similar?language=en-US&page={}",
                kind.as_str(),
                id,
                page
            )
        },
        pages,
    )
    .await
}

/// A named upstream category (popular, top_rated, ...), aggregated
pub async fn by_category(
    provider: &Arc<dyn CatalogProvider>,
    kind: MediaKind,
    category: &str,
    pages: i64,
) -> AppResult<Aggregation> {
    aggregator::aggregate(
        provider,
        |page| format!("{}/{}?language=en-US&page={}", kind.as_str(), category, page),
        pages,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::providers::MockCatalogProvider;
    use serde_json::json;

    #[tokio::test]
    async fn test_trailers_surfaces_results_array() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_fetch_value().returning(|path| {
            assert_eq!(path, "movie/603/videos?language=en-US");
            Ok(json!({
                "id": 603,
                "results": [{"key": "abc", "site": "YouTube"}]
            }))
        });
        let provider: Arc<dyn CatalogProvider> = Arc::new(mock);

        let trailers = trailers(&provider, MediaKind::Movie, 603).await.unwrap();
        assert_eq!(trailers[0]["key"], "abc");
    }

    #[tokio::test]
    async fn test_trailers_without_results_is_empty_array() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_fetch_value().returning(|_| Ok(json!({"id": 603})));
        let provider: Arc<dyn CatalogProvider> = Arc::new(mock);

        let trailers = trailers(&provider, MediaKind::Tv, 603).await.unwrap();
        assert_eq!(trailers, json!([]));
    }

    #[tokio::test]
    async fn test_details_keeps_not_found() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_fetch_value()
            .returning(|_| Err(AppError::NotFound("status 404".to_string())));
        let provider: Arc<dyn CatalogProvider> = Arc::new(mock);

        let err = details(&provider, MediaKind::Movie, 999999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_person_credits_path() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_fetch_value().returning(|path| {
            assert_eq!(path, "person/6384/movie_credits?language=en-US");
            Ok(json!({"cast": []}))
        });
        let provider: Arc<dyn CatalogProvider> = Arc::new(mock);

        person_credits(&provider, 6384, MediaKind::Movie).await.unwrap();
    }

    #[tokio::test]
    async fn test_similar_requests_each_page() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_fetch_page().times(2).returning(|path| {
            assert!(path.starts_with("tv/1396/similar?language=en-US&page="));
            Ok(Default::default())
        });
        let provider: Arc<dyn CatalogProvider> = Arc::new(mock);

        let result = similar(&provider, MediaKind::Tv, 1396, 2).await.unwrap();
        assert_eq!(result.total_pages, 2);
    }
}
