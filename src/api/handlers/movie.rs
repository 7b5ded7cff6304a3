use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

use crate::{
    api::AppState,
    error::AppResult,
    models::MediaKind,
    services::{catalog, trending::pick_trending},
};

use super::{
    ContentResponse, ListingResponse, PagesQuery, SimilarResponse, TrailersResponse,
    TrendingResponse,
};

const KIND: MediaKind = MediaKind::Movie;

pub async fn trending(State(state): State<AppState>) -> AppResult<Json<TrendingResponse>> {
    let content = pick_trending(&state.provider, KIND).await?;
    Ok(Json(TrendingResponse {
        success: true,
        content,
    }))
}

pub async fn trailers(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<TrailersResponse>> {
    let trailers = catalog::trailers(&state.provider, KIND, id).await?;
    Ok(Json(TrailersResponse {
        success: true,
        trailers,
    }))
}

pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ContentResponse<Value>>> {
    let content = catalog::details(&state.provider, KIND, id).await?;
    Ok(Json(ContentResponse::new(content)))
}

pub async fn credits(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ContentResponse<Value>>> {
    let content = catalog::credits(&state.provider, KIND, id).await?;
    Ok(Json(ContentResponse::new(content)))
}

pub async fn similar(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<PagesQuery>,
) -> AppResult<Json<SimilarResponse>> {
    let aggregation = catalog::similar(&state.provider, KIND, id, query.count()).await?;
    Ok(Json(SimilarResponse::from(aggregation)))
}

pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<PagesQuery>,
) -> AppResult<Json<ListingResponse>> {
    let aggregation =
        catalog::by_category(&state.provider, KIND, &category, query.count()).await?;
    Ok(Json(ListingResponse::from(aggregation)))
}
