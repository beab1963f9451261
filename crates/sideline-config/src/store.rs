use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Session and entitlement store configuration
///
/// Points at a PostgREST-compatible endpoint (Supabase in production).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Base URL for the REST endpoint (e.g. `https://<project>.supabase.co/rest/v1/`)
    pub url: Url,
    /// Service role key used for both `apikey` and bearer auth
    pub service_key: SecretString,
    /// Table holding schedule sessions
    #[serde(default = "default_session_table")]
    pub session_table: String,
    /// Table holding paid-entitlement rows
    #[serde(default = "default_entitlement_table")]
    pub entitlement_table: String,
    /// Hours a session survives before the next write sweeps it
    ///
    /// 72 hours covers a full three-day competition weekend.
    #[serde(default = "default_retention_hours")]
    pub retention_hours: u64,
}

fn default_session_table() -> String {
    "schedule_sessions".to_owned()
}

fn default_entitlement_table() -> String {
    "email_signups".to_owned()
}

const fn default_retention_hours() -> u64 {
    72
}
