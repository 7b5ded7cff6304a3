use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    api::AppState,
    error::AppResult,
    middleware::UserId,
    models::{CatalogItem, HistoryEntry, MediaKind},
    services::{history, search},
};

use super::{ContentResponse, MessageResponse};

pub async fn movie(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(query): Path<String>,
) -> AppResult<Json<ContentResponse<Vec<CatalogItem>>>> {
    let results = search::search(
        &state.provider,
        &state.store,
        user_id,
        MediaKind::Movie,
        &query,
    )
    .await?;
    Ok(Json(ContentResponse::new(results)))
}

pub async fn tv(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(query): Path<String>,
) -> AppResult<Json<ContentResponse<Vec<CatalogItem>>>> {
    let results = search::search(
        &state.provider,
        &state.store,
        user_id,
        MediaKind::Tv,
        &query,
    )
    .await?;
    Ok(Json(ContentResponse::new(results)))
}

pub async fn person(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(query): Path<String>,
) -> AppResult<Json<ContentResponse<Vec<CatalogItem>>>> {
    let results = search::search(
        &state.provider,
        &state.store,
        user_id,
        MediaKind::Person,
        &query,
    )
    .await?;
    Ok(Json(ContentResponse::new(results)))
}

pub async fn list_history(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> AppResult<Json<ContentResponse<Vec<HistoryEntry>>>> {
    let entries = history::list(&state.store, user_id).await?;
    Ok(Json(ContentResponse::new(entries)))
}

pub async fn remove_history(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<u64>,
) -> AppResult<Json<MessageResponse>> {
    history::remove(&state.store, user_id, id).await?;
    Ok(Json(MessageResponse::new(
        "Item removed from search history",
    )))
}
