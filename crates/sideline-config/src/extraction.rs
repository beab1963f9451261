use serde::Deserialize;

/// PDF text extraction configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionConfig {
    /// Minimum extracted length before an upload counts as readable
    ///
    /// Anything shorter is rejected as a data-quality error rather than
    /// stored as an empty session.
    #[serde(default = "default_min_text_chars")]
    pub min_text_chars: usize,
    /// Upper bound on accepted PDF upload size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_text_chars: default_min_text_chars(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

const fn default_min_text_chars() -> usize {
    50
}

/// 16 MiB
const fn default_max_upload_bytes() -> usize {
    16 << 20
}
