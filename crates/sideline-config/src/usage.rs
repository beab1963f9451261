use serde::Deserialize;

/// Free-tier usage configuration
///
/// The limit is advisory: the reference client tracks its own count and
/// compares it against this value before calling paid endpoints. The server
/// never enforces it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsageConfig {
    /// Number of free paid-feature invocations before gating kicks in
    #[serde(default = "default_free_limit")]
    pub free_limit: u32,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            free_limit: default_free_limit(),
        }
    }
}

const fn default_free_limit() -> u32 {
    7
}
