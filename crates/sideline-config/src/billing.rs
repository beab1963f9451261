use secrecy::SecretString;
use serde::Deserialize;

/// Payment provider configuration (Stripe)
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BillingConfig {
    /// Stripe secret API key
    pub secret_key: SecretString,
    /// Signing secret for incoming webhooks
    pub webhook_secret: SecretString,
    /// Price id for the monthly plan
    pub monthly_price_id: String,
    /// Price id for the annual plan
    pub annual_price_id: String,
    /// Redirect target after a completed checkout
    pub success_url: String,
    /// Redirect target after an abandoned checkout
    pub cancel_url: String,
    /// Base URL override for the Stripe API
    #[serde(default)]
    pub base_url: Option<String>,
    /// Maximum accepted age of a webhook signature timestamp
    #[serde(default = "default_signature_tolerance_secs")]
    pub signature_tolerance_secs: u64,
}

const fn default_signature_tolerance_secs() -> u64 {
    300
}

impl BillingConfig {
    /// Resolve a plan label to its configured price id
    ///
    /// Returns `None` for labels outside the fixed plan set, which callers
    /// surface as an error payload rather than an HTTP error.
    pub fn price_id(&self, plan_type: &str) -> Option<&str> {
        match plan_type {
            "monthly" => Some(&self.monthly_price_id),
            "annual" => Some(&self.annual_price_id),
            _ => None,
        }
    }
}
