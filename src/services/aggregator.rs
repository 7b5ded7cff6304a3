/// Paged aggregation pipeline
///
/// Builds a merged list view over several upstream pages: fan out one
/// concurrent fetch per page, join on all of them, flatten in page order,
/// keep English-language items, and drop duplicate ids keeping the first
/// occurrence. Any page failure fails the whole aggregation; there are no
/// partial results.
use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::CatalogItem,
    services::providers::CatalogProvider,
};

/// Result of one aggregation run
///
/// `total_pages` echoes the requested page count and `total_results` is the
/// length of the merged output, not the upstream's own totals.
#[derive(Debug, Clone)]
pub struct Aggregation {
    pub items: Vec<CatalogItem>,
    pub total_pages: i64,
    pub total_results: usize,
}

/// Fetches pages `1..=pages` concurrently and merges them.
///
/// `path_for_page` renders the upstream resource path for one page number.
/// A non-positive `pages` yields an empty aggregation without touching the
/// upstream. All page requests are spawned before any response is awaited;
/// the first failed page aborts the join. A missing page is an upstream
/// fault here, not a missing resource.
pub async fn aggregate(
    provider: &Arc<dyn CatalogProvider>,
    path_for_page: impl Fn(u32) -> String,
    pages: i64,
) -> AppResult<Aggregation> {
    let count = pages.clamp(0, i64::from(u32::MAX)) as u32;

    let mut tasks = Vec::with_capacity(count as usize);
    for page in 1..=count {
        let provider = Arc::clone(provider);
        let path = path_for_page(page);
        tasks.push(tokio::spawn(async move { provider.fetch_page(&path).await }));
    }

    let mut merged = Vec::new();
    for task in tasks {
        let page = task
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
            .map_err(AppError::not_found_as_upstream)?;
        merged.extend(page.results);
    }

    let items = dedupe_by_id(filter_english(merged));
    let total_results = items.len();

    Ok(Aggregation {
        items,
        total_pages: pages,
        total_results,
    })
}

/// Keeps items whose original language is English, preserving order
pub fn filter_english(items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    items.into_iter().filter(CatalogItem::is_english).collect()
}

/// Drops repeated ids, keeping the first occurrence.
///
/// Stable: the surviving items stay in their incoming order.
pub fn dedupe_by_id(items: Vec<CatalogItem>) -> Vec<CatalogItem> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogPage;
    use crate::services::providers::MockCatalogProvider;

    fn item(id: u64, language: &str) -> CatalogItem {
        CatalogItem {
            id,
            original_language: Some(language.to_string()),
            title: None,
            name: None,
            poster_path: None,
            profile_path: None,
            extra: serde_json::Map::new(),
        }
    }

    fn page_of(items: Vec<CatalogItem>) -> CatalogPage {
        CatalogPage {
            page: 1,
            results: items,
            total_pages: 99,
            total_results: 9999,
        }
    }

    fn provider_with_pages(pages: Vec<Vec<CatalogItem>>) -> Arc<dyn CatalogProvider> {
        let mut mock = MockCatalogProvider::new();
        mock.expect_fetch_page()
            .times(pages.len())
            .returning(move |path| {
                let number: usize = path
                    .rsplit("page=")
                    .next()
                    .and_then(|n| n.parse().ok())
                    .expect("page number in path");
                Ok(page_of(pages[number - 1].clone()))
            });
        Arc::new(mock)
    }

    fn path_for(page: u32) -> String {
        format!("movie/popular?language=en-US&page={}", page)
    }

    #[tokio::test]
    async fn test_dedupe_is_stable_across_pages() {
        // Pages [[A, B], [B, C]] by id must merge to [A, B, C]
        let provider = provider_with_pages(vec![
            vec![item(1, "en"), item(2, "en")],
            vec![item(2, "en"), item(3, "en")],
        ]);

        let result = aggregate(&provider, path_for, 2).await.unwrap();
        let ids: Vec<u64> = result.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_filters_non_english_and_counts_output() {
        let provider = provider_with_pages(vec![
            vec![item(1, "en"), item(2, "fr")],
            vec![item(1, "en"), item(3, "en")],
        ]);

        let result = aggregate(&provider, path_for, 2).await.unwrap();
        let ids: Vec<u64> = result.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(result.total_pages, 2);
        // Output length, not the upstream's total_results field
        assert_eq!(result.total_results, 2);
    }

    #[tokio::test]
    async fn test_issues_one_call_per_page() {
        let pages: Vec<Vec<CatalogItem>> =
            (0..5).map(|n| vec![item(n, "en")]).collect();
        // times(5) on the mock verifies exactly five upstream calls
        let provider = provider_with_pages(pages);

        let result = aggregate(&provider, path_for, 5).await.unwrap();
        assert_eq!(result.items.len(), 5);
    }

    #[tokio::test]
    async fn test_non_positive_page_count_skips_upstream() {
        let mock = MockCatalogProvider::new();
        let provider: Arc<dyn CatalogProvider> = Arc::new(mock);

        for pages in [0, -3] {
            let result = aggregate(&provider, path_for, pages).await.unwrap();
            assert!(result.items.is_empty());
            assert_eq!(result.total_pages, pages);
            assert_eq!(result.total_results, 0);
        }
    }

    #[tokio::test]
    async fn test_single_page_failure_fails_the_aggregation() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_fetch_page().returning(|path| {
            if path.ends_with("page=2") {
                Err(AppError::Upstream("status 500".to_string()))
            } else {
                Ok(page_of(vec![item(1, "en")]))
            }
        });
        let provider: Arc<dyn CatalogProvider> = Arc::new(mock);

        let err = aggregate(&provider, path_for, 3).await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_not_found_page_becomes_generic_failure() {
        let mut mock = MockCatalogProvider::new();
        mock.expect_fetch_page()
            .returning(|_| Err(AppError::NotFound("status 404".to_string())));
        let provider: Arc<dyn CatalogProvider> = Arc::new(mock);

        let err = aggregate(&provider, path_for, 1).await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[test]
    fn test_dedupe_by_id_keeps_first_occurrence() {
        let mut first = item(7, "en");
        first.title = Some("first".to_string());
        let mut second = item(7, "en");
        second.title = Some("second".to_string());

        let deduped = dedupe_by_id(vec![first, item(8, "en"), second]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].title.as_deref(), Some("first"));
    }

    #[test]
    fn test_filter_english_drops_missing_language() {
        let mut no_language = item(9, "en");
        no_language.original_language = None;

        let filtered = filter_english(vec![item(1, "en"), item(2, "ko"), no_language]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }
}
