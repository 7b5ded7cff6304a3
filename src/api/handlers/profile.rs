use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    api::AppState,
    error::{AppError, AppResult},
    middleware::UserId,
    models::{User, UserProfile},
    services::suggestions,
};

/// Maximum accepted bio length, in characters
const BIO_MAX_CHARS: usize = 500;

#[derive(Debug, Deserialize)]
pub struct UpdateBioRequest {
    pub bio: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<UserProfile>,
}

pub async fn me(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .store
        .find(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse {
        success: true,
        user: UserProfile::owned(&user),
        message: None,
    }))
}

pub async fn update_bio(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(request): Json<UpdateBioRequest>,
) -> AppResult<Json<UserResponse>> {
    let bio = request.bio.unwrap_or_default();
    if bio.chars().count() > BIO_MAX_CHARS {
        return Err(AppError::InvalidInput(
            "Bio must be less than 500 characters".to_string(),
        ));
    }

    let mut updated: Option<User> = None;
    state
        .store
        .update(user_id, &mut |user| {
            user.bio = bio.clone();
            updated = Some(user.clone());
        })
        .await?;

    let Some(user) = updated else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    Ok(Json(UserResponse {
        success: true,
        user: UserProfile::owned(&user),
        message: Some("Bio updated successfully".to_string()),
    }))
}

pub async fn user_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse {
        success: true,
        user: UserProfile::public(&user),
        message: None,
    }))
}

pub async fn suggested(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> AppResult<Json<UsersResponse>> {
    let users = suggestions::suggested(&state.store, user_id).await?;
    Ok(Json(UsersResponse {
        success: true,
        users,
    }))
}
