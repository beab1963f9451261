use axum::Json;
use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};

use super::multipart::read_upload;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UploadScheduleResponse {
    pub session_id: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct ScheduleQueryRequest {
    pub question: String,
    pub session_id: String,
}

#[derive(Serialize)]
pub struct ScheduleQueryResponse {
    pub answer: String,
}

/// POST `/upload-schedule`: extract a competition PDF into a session
///
/// A non-PDF upload or an extraction below the quality gate is a 400; the
/// session only exists once extraction has produced enough text.
pub async fn upload_schedule(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadScheduleResponse>, ApiError> {
    let (file, old_session_id) = read_upload(multipart, Some("old_session_id")).await?;

    if !file.filename.to_ascii_lowercase().ends_with(".pdf") {
        return Err(ApiError::BadRequest("Only PDF files are supported.".to_owned()));
    }

    let min_chars = state.config.extraction.min_text_chars;

    // pdf parsing is CPU-bound; keep it off the async workers
    let extracted_text = tokio::task::spawn_blocking(move || sideline_extract::extract_text(&file.bytes, min_chars))
        .await
        .map_err(|e| ApiError::Internal(format!("extraction task failed: {e}")))??;

    let session_id = state
        .store
        .create_session(&extracted_text, old_session_id.as_deref())
        .await?;

    tracing::info!(%session_id, replaced = old_session_id.is_some(), "schedule loaded");

    Ok(Json(UploadScheduleResponse {
        session_id,
        message: "Schedule loaded successfully.".to_owned(),
    }))
}

/// POST `/query-schedule`: answer a question against a stored schedule
///
/// A missing or swept session fails before the generation provider is
/// ever contacted.
pub async fn query_schedule(
    State(state): State<AppState>,
    Json(request): Json<ScheduleQueryRequest>,
) -> Result<Json<ScheduleQueryResponse>, ApiError> {
    let schedule_text = state.store.get_session(&request.session_id).await?;

    let answer = state
        .generator
        .answer_schedule_question(&schedule_text, &request.question)
        .await?;

    Ok(Json(ScheduleQueryResponse { answer }))
}
