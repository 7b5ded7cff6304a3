use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::{
    api::AppState,
    error::AppResult,
    models::MediaKind,
    services::catalog,
};

use super::ContentResponse;

pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ContentResponse<Value>>> {
    let content = catalog::details(&state.provider, MediaKind::Person, id).await?;
    Ok(Json(ContentResponse::new(content)))
}

pub async fn movie_credits(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ContentResponse<Value>>> {
    let content = catalog::person_credits(&state.provider, id, MediaKind::Movie).await?;
    Ok(Json(ContentResponse::new(content)))
}

pub async fn tv_credits(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ContentResponse<Value>>> {
    let content = catalog::person_credits(&state.provider, id, MediaKind::Tv).await?;
    Ok(Json(ContentResponse::new(content)))
}
