//! Webhook signature verification and event parsing
//!
//! Stripe signs each delivery with `Stripe-Signature: t=<unix>,v1=<hex>`,
//! where the hex value is HMAC-SHA256 over `"{t}.{payload}"`. Verifying
//! that signature and persisting the resulting entitlement is the only
//! integrity-sensitive step in the system, so rejection is absolute: a bad
//! header means 400 with no partial processing.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha2::Sha256;

use crate::error::BillingError;

type HmacSha256 = Hmac<Sha256>;

/// Event type that marks an email as entitled
pub const CHECKOUT_COMPLETED: &str = "checkout.session.completed";

/// Verifies `Stripe-Signature` headers against the endpoint secret
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: SecretString,
    tolerance_secs: u64,
}

/// Parsed webhook event, reduced to the fields the service acts on
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    /// Event type (e.g. `checkout.session.completed`)
    #[serde(rename = "type")]
    pub event_type: String,
    /// Event payload
    pub data: WebhookData,
}

#[derive(Debug, Deserialize)]
pub struct WebhookData {
    /// The checkout session the event describes
    pub object: CheckoutSession,
}

/// Checkout session fields carried by a completed-checkout event
#[derive(Debug, Deserialize)]
pub struct CheckoutSession {
    /// Email the entitlement is recorded under
    pub customer_email: Option<String>,
    /// Stripe customer id
    pub customer: Option<String>,
}

impl WebhookVerifier {
    pub fn new(secret: SecretString, tolerance_secs: u64) -> Self {
        Self {
            secret,
            tolerance_secs,
        }
    }

    /// Verify a delivery and parse its event
    ///
    /// # Errors
    ///
    /// Returns `BillingError::InvalidSignature` for a missing, malformed,
    /// stale, or mismatched signature and `BillingError::InvalidPayload`
    /// when the body is not a well-formed event
    pub fn verify_and_parse(&self, payload: &[u8], signature_header: &str) -> Result<WebhookEvent, BillingError> {
        self.verify_at(payload, signature_header, jiff::Timestamp::now().as_second())?;

        serde_json::from_slice(payload).map_err(|e| BillingError::InvalidPayload(e.to_string()))
    }

    fn verify_at(&self, payload: &[u8], signature_header: &str, now_secs: i64) -> Result<(), BillingError> {
        let (timestamp, signatures) = parse_header(signature_header)?;

        let age = now_secs.saturating_sub(timestamp).unsigned_abs();
        if age > self.tolerance_secs {
            return Err(BillingError::InvalidSignature(format!(
                "timestamp outside tolerance ({age}s old)"
            )));
        }

        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|e| BillingError::InvalidSignature(e.to_string()))?;
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);

        // Accept if any v1 candidate matches (Stripe sends several during
        // secret rotation). verify_slice is constant time.
        for candidate in &signatures {
            let Some(bytes) = decode_hex(candidate) else {
                continue;
            };
            if mac.clone().verify_slice(&bytes).is_ok() {
                return Ok(());
            }
        }

        Err(BillingError::InvalidSignature("no matching v1 signature".to_owned()))
    }
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("tolerance_secs", &self.tolerance_secs)
            .finish_non_exhaustive()
    }
}

/// Split `t=<unix>,v1=<hex>[,v1=<hex>...]` into its parts
fn parse_header(header: &str) -> Result<(i64, Vec<&str>), BillingError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for pair in header.split(',') {
        match pair.trim().split_once('=') {
            Some(("t", value)) => {
                timestamp = Some(
                    value
                        .parse::<i64>()
                        .map_err(|_| BillingError::InvalidSignature("non-numeric timestamp".to_owned()))?,
                );
            }
            Some(("v1", value)) => signatures.push(value),
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or_else(|| BillingError::InvalidSignature("missing timestamp".to_owned()))?;

    if signatures.is_empty() {
        return Err(BillingError::InvalidSignature("missing v1 signature".to_owned()));
    }

    Ok((timestamp, signatures))
}

fn decode_hex(input: &str) -> Option<Vec<u8>> {
    if input.len() % 2 != 0 {
        return None;
    }
    (0..input.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(input.get(i..i + 2)?, 16).ok())
        .collect()
}
