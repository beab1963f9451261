/// Errors returned by the payment integration
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    /// HTTP transport or connection error
    #[error("payment request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Stripe returned a non-success status
    #[error("payment API error ({status}): {message}")]
    Api {
        /// HTTP status from Stripe
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Webhook signature header missing, malformed, stale, or wrong
    #[error("webhook signature verification failed: {0}")]
    InvalidSignature(String),

    /// Webhook payload could not be parsed
    #[error("webhook payload invalid: {0}")]
    InvalidPayload(String),
}
