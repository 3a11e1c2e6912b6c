use axum::{extract::State, Extension, Json};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{
        RecommendationsRequest, RecommendationsResponse, ReplacementRequest, ReplacementResponse,
    },
    routes::AppState,
    services::curator,
};

/// The quiz always produces exactly five answers.
const ANSWER_COUNT: usize = 5;

/// Handler for POST /api/recommendations
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(body): Json<Value>,
) -> AppResult<Json<RecommendationsResponse>> {
    let request: RecommendationsRequest = serde_json::from_value(body)
        .map_err(|_| AppError::InvalidInput("Invalid answers format".to_string()))?;

    if request.answers.len() != ANSWER_COUNT {
        return Err(AppError::InvalidInput("Invalid answers format".to_string()));
    }

    tracing::info!(
        request_id = %request_id,
        model = ?request.model,
        language = ?request.language,
        watched_count = request.watched_movies.len(),
        "Processing recommendations request"
    );

    let result = curator::recommend(
        &state,
        &request.answers,
        request.model,
        request.language.as_deref(),
        &request.watched_movies,
    )
    .await?;

    tracing::info!(
        request_id = %request_id,
        recommendations = result.movies.len(),
        "Recommendations request completed"
    );

    Ok(Json(RecommendationsResponse {
        recommendations: result.movies,
        viewer_profile: result.viewer_profile,
    }))
}

/// Handler for POST /api/recommendations/replace
pub async fn replace(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(body): Json<Value>,
) -> AppResult<Json<ReplacementResponse>> {
    let request: ReplacementRequest = serde_json::from_value(body)
        .map_err(|_| AppError::InvalidInput("Invalid request format".to_string()))?;

    if request.answers.len() != ANSWER_COUNT || request.watched_movie.trim().is_empty() {
        return Err(AppError::InvalidInput("Invalid request format".to_string()));
    }

    tracing::info!(
        request_id = %request_id,
        watched_movie = %request.watched_movie,
        model = ?request.model,
        "Processing replacement request"
    );

    let movie = curator::replace(
        &state,
        &request.answers,
        &request.watched_movie,
        request.model,
        request.language.as_deref(),
        &request.watched_movies,
    )
    .await?;

    Ok(Json(ReplacementResponse { movie }))
}
