use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub transcription: String,
    pub sport: String,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translation: String,
}

/// POST `/translate`: rewrite a raw recap in the sport-parent voice
pub async fn translate_recap(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    if request.transcription.trim().is_empty() {
        return Err(ApiError::BadRequest("Transcription must not be empty".to_owned()));
    }

    let translation = state
        .generator
        .translate_recap(&request.transcription, &request.sport)
        .await?;

    Ok(Json(TranslateResponse { translation }))
}
