use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sideline_config::GenerationConfig;

use crate::error::GenerateError;
use crate::prompts;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible chat completion client
///
/// One instance per process, shared by handlers. Both generation flows go
/// through the same completion call; only the prompt pair differs.
pub struct Generator {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl Generator {
    pub fn new(config: &GenerationConfig) -> Self {
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

    /// Rewrite a cheer recap in the vocabulary of the given sport
    ///
    /// The sport label is passed straight into the persona prompt; it is
    /// never validated here.
    pub async fn translate_recap(&self, transcription: &str, sport: &str) -> crate::Result<String> {
        let system = prompts::recap_translation(sport);
        let user = prompts::recap_message(transcription);

        tracing::debug!(%sport, chars = transcription.len(), "recap translation request");

        self.complete(&system, &user).await
    }

    /// Answer a question against previously extracted schedule text
    ///
    /// Text and question are forwarded verbatim; the answer comes back
    /// unmodified.
    pub async fn answer_schedule_question(&self, schedule_text: &str, question: &str) -> crate::Result<String> {
        let user = prompts::schedule_question(schedule_text, question);

        tracing::debug!(schedule_chars = schedule_text.len(), "schedule question request");

        self.complete(prompts::schedule_assistant(), &user).await
    }

    async fn complete(&self, system: &str, user: &str) -> crate::Result<String> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("completion request failed: {e}");
                GenerateError::ConnectionError(format!("Failed to reach generation provider: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("completion API error ({status}): {error_text}");

            return Err(match status.as_u16() {
                401 => GenerateError::AuthenticationFailed(error_text),
                _ => GenerateError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("failed to parse completion response: {e}");
            GenerateError::EmptyCompletion
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(GenerateError::EmptyCompletion)
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
