use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;
use sideline_stt::AudioUpload;

use super::multipart::read_upload;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TranscriptionResponse {
    pub transcription: String,
}

/// POST `/upload`: transcribe a recorded recap or spoken question
pub async fn upload_audio(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TranscriptionResponse>, ApiError> {
    let (file, _) = read_upload(multipart, None).await?;

    // Browser recorders often omit the part content type
    let content_type = if file.content_type == "application/octet-stream" {
        "audio/wav".to_owned()
    } else {
        file.content_type
    };

    let transcription = state
        .transcriber
        .transcribe(AudioUpload {
            audio: file.bytes,
            filename: file.filename,
            content_type,
        })
        .await?;

    Ok(Json(TranscriptionResponse { transcription }))
}
