/// Catalog search
///
/// Fetches the first page of upstream search results for a query, filters
/// movie and TV results to English, and records the first hit on the
/// user's search history. Recording is best-effort: the primary search
/// result is returned even when the ledger write fails.
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::UserStore,
    error::{AppError, AppResult},
    models::{CatalogItem, HistoryEntry, MediaKind},
    services::{aggregator::filter_english, history, providers::CatalogProvider},
};

/// Searches the catalog and records the search against the user's ledger.
///
/// An empty (post-filter) result set is `NotFound`; upstream failures are
/// generic here, search has no not-found branch of its own.
pub async fn search(
    provider: &Arc<dyn CatalogProvider>,
    store: &Arc<dyn UserStore>,
    user_id: Uuid,
    kind: MediaKind,
    query: &str,
) -> AppResult<Vec<CatalogItem>> {
    let path = format!(
        "search/{}?query={}&include_adult=false&language=en-US&page=1",
        kind.as_str(),
        query
    );
    let page = provider
        .fetch_page(&path)
        .await
        .map_err(AppError::not_found_as_upstream)?;

    // Person results carry no original_language; only movie/TV filter
    let results = match kind {
        MediaKind::Person => page.results,
        MediaKind::Movie | MediaKind::Tv => filter_english(page.results),
    };

    let Some(first) = results.first() else {
        return Err(AppError::NotFound(format!("no results for '{}'", query)));
    };

    let entry = HistoryEntry {
        id: first.id,
        kind,
        image: first.artwork().map(str::to_string),
        title: first.display_title().to_string(),
        search_term: query.to_string(),
        created_at: Utc::now(),
    };

    if let Err(error) = history::record_search(store, user_id, entry).await {
        tracing::warn!(
            error = %error,
            user_id = %user_id,
            "failed to record search history"
        );
    }

    Ok(results)
}
