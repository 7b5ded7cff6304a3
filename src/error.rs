use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Upstream catalog error: {0}")]
    Upstream(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Folds `NotFound` into `Upstream`.
    ///
    /// List pipelines (aggregation, trending, search) treat a missing
    /// upstream page as an upstream fault, not a missing resource; only
    /// single-item lookups keep the not-found branch.
    pub fn not_found_as_upstream(self) -> Self {
        match self {
            AppError::NotFound(msg) => AppError::Upstream(msg),
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Single-item not-found surfaces as a bare 404 with a null
            // body; everything else uses the failure envelope.
            AppError::NotFound(_) => {
                return (StatusCode::NOT_FOUND, Json(Value::Null)).into_response()
            }
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::AlreadyExists(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(_) | AppError::HttpClient(_) => {
                (StatusCode::BAD_GATEWAY, "Internal server error".to_string())
            }
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "success": false,
            "message": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
