use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub email: String,
    pub plan_type: String,
}

/// Checkout responses always come back 200; the payment page consumes
/// either a redirect URL or an inline error message.
#[derive(Serialize)]
#[serde(untagged)]
pub enum CheckoutResponse {
    Url { url: String },
    Error { error: String },
}

/// POST `/create-checkout-session`: start a Stripe subscription checkout
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let Some(price_id) = state.config.billing.price_id(&request.plan_type) else {
        tracing::debug!(plan_type = %request.plan_type, "unknown plan type");
        return Ok(Json(CheckoutResponse::Error {
            error: "Invalid plan type".to_owned(),
        }));
    };

    match state.stripe.create_checkout_session(&request.email, price_id).await {
        Ok(url) => Ok(Json(CheckoutResponse::Url { url })),
        Err(e) => {
            tracing::error!(error = %e, "checkout session creation failed");
            Ok(Json(CheckoutResponse::Error { error: e.to_string() }))
        }
    }
}
