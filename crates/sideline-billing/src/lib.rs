#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod webhook;

pub use client::StripeClient;
pub use error::BillingError;
pub use webhook::{CheckoutSession, WebhookEvent, WebhookVerifier, CHECKOUT_COMPLETED};

pub type Result<T> = std::result::Result<T, BillingError>;
