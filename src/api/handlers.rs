use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::VideoRecord,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenreRecommendationRequest {
    #[serde(default, alias = "favoriteGenres")]
    pub favorite_genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoResponse {
    pub title: String,
    pub description: String,
    pub genres: Vec<String>,
}

impl From<VideoRecord> for VideoResponse {
    fn from(video: VideoRecord) -> Self {
        Self {
            title: video.title,
            description: video.description,
            genres: video.genres,
        }
    }
}

fn into_responses(videos: Vec<VideoRecord>) -> Vec<VideoResponse> {
    videos.into_iter().map(VideoResponse::from).collect()
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Videos similar to a reference title
pub async fn recommend_by_title(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<TitleQuery>,
) -> AppResult<Json<Vec<VideoResponse>>> {
    let title = query.title.unwrap_or_default();

    tracing::info!(
        request_id = %request_id,
        title = %title,
        "Processing title recommendation request"
    );

    let videos = state.recommendations.recommend_by_title(&title).await?;
    Ok(Json(into_responses(videos)))
}

/// Videos matching a viewer's favorite genres
pub async fn recommend_by_genres(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<GenreRecommendationRequest>, JsonRejection>,
) -> AppResult<Json<Vec<VideoResponse>>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(
            request_id = %request_id,
            error = %rejection.body_text(),
            "Rejected genre recommendation body"
        );
        AppError::InvalidInput(rejection.body_text())
    })?;

    tracing::info!(
        request_id = %request_id,
        genre_count = request.favorite_genres.len(),
        "Processing genre recommendation request"
    );

    let videos = state
        .recommendations
        .recommend_by_genres(request.favorite_genres)
        .await?;
    Ok(Json(into_responses(videos)))
}

/// Genres available in the catalog
pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let genres = state.recommendations.list_genres().await?;
    Ok(Json(genres))
}
