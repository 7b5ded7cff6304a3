/// Trending selection
///
/// One page of the upstream trending feed, English filter, one uniform
/// random pick. An empty filtered set yields `None` rather than an error.
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    error::{AppError, AppResult},
    models::{CatalogItem, MediaKind},
    services::{aggregator::filter_english, providers::CatalogProvider},
};

/// Uniform random pick over a slice; `None` when the slice is empty
pub fn pick_uniform<'a, R: Rng + ?Sized>(
    items: &'a [CatalogItem],
    rng: &mut R,
) -> Option<&'a CatalogItem> {
    items.choose(rng)
}

/// Picks today's trending item of the given kind.
///
/// Returns `Ok(None)` when the feed has no English-language entries.
pub async fn pick_trending(
    provider: &Arc<dyn CatalogProvider>,
    kind: MediaKind,
) -> AppResult<Option<CatalogItem>> {
    let path = format!("trending/{}/day?language=en-US", kind.as_str());
    let page = provider
        .fetch_page(&path)
        .await
        .map_err(AppError::not_found_as_upstream)?;

    let english = filter_english(page.results);
    Ok(pick_uniform(&english, &mut rand::thread_rng()).cloned())
}
