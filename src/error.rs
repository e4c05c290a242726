use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::recommend::RecommendError;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error(transparent)]
    Recommendation(#[from] RecommendError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Recommendation(ref err) => match err {
                RecommendError::NotFound(_) | RecommendError::EmptyCorpus => {
                    (StatusCode::NOT_FOUND, self.to_string())
                }
                RecommendError::EmptyPreferences => (StatusCode::BAD_REQUEST, self.to_string()),
                RecommendError::DimensionMismatch { .. } | RecommendError::InvalidRecord(_) => {
                    tracing::error!(error = %err, "Recommendation engine failure");
                    (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
                }
            },
            AppError::Database(_) | AppError::Catalog(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_errors_map_to_status() {
        let cases = [
            (
                AppError::from(RecommendError::NotFound("x".to_string())),
                StatusCode::NOT_FOUND,
            ),
            (AppError::from(RecommendError::EmptyCorpus), StatusCode::NOT_FOUND),
            (
                AppError::from(RecommendError::EmptyPreferences),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(RecommendError::InvalidRecord("bad".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::InvalidInput("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Catalog("down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_recommend_error_message_is_transparent() {
        let error = AppError::from(RecommendError::NotFound("Heat".to_string()));
        assert_eq!(error.to_string(), "Video with title 'Heat' not found");
    }
}
