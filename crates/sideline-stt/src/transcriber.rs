use secrecy::{ExposeSecret, SecretString};
use sideline_config::SttConfig;

use crate::error::SttError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Audio payload pulled from a multipart upload
#[derive(Debug)]
pub struct AudioUpload {
    /// Raw audio data
    pub audio: Vec<u8>,
    /// Original filename
    pub filename: String,
    /// Content type of the audio file
    pub content_type: String,
}

/// Whisper API transcription client
///
/// Constructed once at startup and shared by handlers; holds the provider
/// key and a pooled HTTP client for the process lifetime.
pub struct Transcriber {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

#[derive(serde::Deserialize)]
struct WhisperResponse {
    text: String,
}

impl Transcriber {
    pub fn new(config: &SttConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Transcribe an audio upload to text
    pub async fn transcribe(&self, upload: AudioUpload) -> crate::Result<String> {
        let url = format!("{}/audio/transcriptions", self.base_url.trim_end_matches('/'));

        tracing::debug!(bytes = upload.audio.len(), model = %self.model, "transcription request");

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(upload.audio)
                    .file_name(upload.filename)
                    .mime_str(&upload.content_type)
                    .map_err(|e| SttError::InvalidRequest(format!("Invalid content type: {e}")))?,
            )
            .text("model", self.model.clone());

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Whisper request failed: {e}");
                SttError::ConnectionError(format!("Failed to send request to Whisper: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Whisper API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 => SttError::AuthenticationFailed(error_text),
                400 => SttError::InvalidRequest(error_text),
                _ => SttError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let result: WhisperResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Whisper response: {e}");
            SttError::InternalError
        })?;

        tracing::debug!("transcription complete");

        Ok(result.text)
    }
}

impl std::fmt::Debug for Transcriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcriber")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
