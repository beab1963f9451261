use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sideline_config::BillingConfig;

use crate::error::BillingError;

const DEFAULT_BASE_URL: &str = "https://api.stripe.com";

/// Async HTTP client for the Stripe API
///
/// Only hosted checkout creation goes outbound; everything else about the
/// payment lifecycle arrives through the webhook.
#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: SecretString,
    success_url: String,
    cancel_url: String,
}

#[derive(Deserialize)]
struct CheckoutSessionResponse {
    url: String,
}

impl StripeClient {
    /// Create a new Stripe client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: &BillingConfig) -> Result<Self, BillingError> {
        let http = reqwest::Client::builder().build().map_err(BillingError::Request)?;

        Ok(Self {
            http,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            secret_key: config.secret_key.clone(),
            success_url: config.success_url.clone(),
            cancel_url: config.cancel_url.clone(),
        })
    }

    /// Create a hosted subscription checkout session
    ///
    /// POST `/v1/checkout/sessions` (form-encoded, per the Stripe API).
    /// Returns the redirect URL for the hosted payment page.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or Stripe rejects the
    /// session parameters
    pub async fn create_checkout_session(&self, email: &str, price_id: &str) -> Result<String, BillingError> {
        let url = format!("{}/v1/checkout/sessions", self.base_url.trim_end_matches('/'));

        let params = [
            ("payment_method_types[0]", "card"),
            ("line_items[0][price]", price_id),
            ("line_items[0][quantity]", "1"),
            ("mode", "subscription"),
            ("success_url", &self.success_url),
            ("cancel_url", &self.cancel_url),
            ("client_reference_id", email),
            ("customer_email", email),
        ];

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.secret_key.expose_secret())
            .form(&params)
            .send()
            .await?;

        if response.status().is_success() {
            let session: CheckoutSessionResponse = response.json().await?;
            tracing::info!(%email, "checkout session created");
            Ok(session.url)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(BillingError::Api { status, message })
        }
    }
}

impl std::fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
