use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{
    api::AppState,
    error::{AppError, AppResult},
    middleware::UserId,
    models::{MediaKind, WatchlistEntry},
    services::watchlist,
};

use super::{ContentResponse, MessageResponse};

#[derive(Debug, Deserialize)]
pub struct AddWatchlistRequest {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub kind: Option<MediaKind>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistStatusResponse {
    pub success: bool,
    pub is_in_watchlist: bool,
}

pub async fn add(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(request): Json<AddWatchlistRequest>,
) -> AppResult<Json<MessageResponse>> {
    let title = request.title.filter(|t| !t.trim().is_empty());
    let (Some(id), Some(title), Some(kind)) = (request.id, title, request.kind) else {
        return Err(AppError::InvalidInput(
            "id, title, and kind are required".to_string(),
        ));
    };
    if kind == MediaKind::Person {
        return Err(AppError::InvalidInput(
            "kind must be movie or tv".to_string(),
        ));
    }

    let entry = WatchlistEntry {
        id,
        title,
        image: request.image,
        kind,
        created_at: Utc::now(),
    };
    watchlist::add(&state.store, user_id, entry).await?;

    Ok(Json(MessageResponse::new("Added to watchlist successfully")))
}

pub async fn remove(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<u64>,
) -> AppResult<Json<MessageResponse>> {
    watchlist::remove(&state.store, user_id, id).await?;
    Ok(Json(MessageResponse::new(
        "Removed from watchlist successfully",
    )))
}

pub async fn list(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> AppResult<Json<ContentResponse<Vec<WatchlistEntry>>>> {
    let entries = watchlist::list(&state.store, user_id).await?;
    Ok(Json(ContentResponse::new(entries)))
}

pub async fn status(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<u64>,
) -> AppResult<Json<WatchlistStatusResponse>> {
    let is_in_watchlist = watchlist::status(&state.store, user_id, id).await?;
    Ok(Json(WatchlistStatusResponse {
        success: true,
        is_in_watchlist,
    }))
}
