use secrecy::SecretString;
use serde::Deserialize;

/// Speech-to-text provider configuration (`OpenAI` Whisper API)
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// API key
    pub api_key: SecretString,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Transcription model
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "whisper-1".to_owned()
}
