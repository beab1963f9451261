use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use http::HeaderMap;
use serde::Serialize;
use sideline_billing::CHECKOUT_COMPLETED;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct WebhookResponse {
    pub status: String,
}

/// POST `/webhook`: Stripe event delivery
///
/// The signature is checked against the raw body before anything is
/// parsed. Only `checkout.session.completed` changes state; every other
/// verified event is acknowledged and dropped.
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookResponse>, ApiError> {
    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::BadRequest("Missing stripe-signature header".to_owned()))?;

    let event = state.webhook_verifier.verify_and_parse(&body, signature)?;

    if event.event_type == CHECKOUT_COMPLETED {
        if let Some(email) = event.data.object.customer_email {
            state
                .store
                .mark_paid(&email, event.data.object.customer.as_deref())
                .await?;
        } else {
            tracing::warn!("completed checkout carried no customer email");
        }
    } else {
        tracing::debug!(event_type = %event.event_type, "ignoring event");
    }

    Ok(Json(WebhookResponse {
        status: "success".to_owned(),
    }))
}
