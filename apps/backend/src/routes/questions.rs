//! Question endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::import::parse_request;
use crate::AppState;

/// POST /api/questions/parse
/// Parse pasted text into draft questions without saving anything
pub async fn parse(
    State(state): State<AppState>,
    Json(payload): Json<ParseQuestionsRequest>,
) -> Result<Json<ParseQuestionsResponse>> {
    let questions = parse_request(&payload, &state.config)?;
    tracing::info!(count = questions.len(), "parsed pasted questions");

    Ok(Json(ParseQuestionsResponse {
        count: questions.len(),
        questions,
    }))
}

/// GET /api/questions/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredQuestion>> {
    let question = state
        .db
        .get_question(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Question {}", id)))?;
    Ok(Json(question.to_api_question()))
}

/// DELETE /api/questions/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>> {
    if !state.db.delete_question(id).await? {
        return Err(ApiError::NotFound(format!("Question {}", id)));
    }
    Ok(Json(DeleteResponse { deleted_count: 1 }))
}
