use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use sideline_billing::BillingError;
use sideline_core::ErrorBody;
use sideline_extract::ExtractError;
use sideline_generate::GenerateError;
use sideline_store::StoreError;
use sideline_stt::SttError;

/// Unified handler error
///
/// Wraps each feature crate's error and maps it onto the response
/// taxonomy: client input problems are 4xx, a missing session is 404,
/// provider failures bubble up with their message attached, and nothing
/// is ever retried server-side.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Stt(#[from] SttError),

    #[error("{0}")]
    Generate(#[from] GenerateError),

    #[error("{0}")]
    Extract(#[from] ExtractError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Billing(#[from] BillingError),

    /// Malformed client input caught before any provider call
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected server-side failure outside any provider call
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Stt(e) => e.status_code(),
            Self::Generate(e) => e.status_code(),
            Self::Extract(e) => e.status_code(),
            Self::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Billing(BillingError::InvalidSignature(_) | BillingError::InvalidPayload(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Billing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            // The client can only recover by re-uploading
            Self::Store(StoreError::NotFound) => "Schedule not found. Please re-upload your PDF.".to_owned(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody::new(self.client_message());

        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_session_is_not_found() {
        let err = ApiError::from(StoreError::NotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.client_message().contains("re-upload"));
    }

    #[test]
    fn low_quality_extraction_is_bad_request() {
        let err = ApiError::from(ExtractError::InsufficientText { got: 12, min: 50 });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn bad_signature_is_bad_request() {
        let err = ApiError::from(BillingError::InvalidSignature("no match".to_owned()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_outage_is_server_error() {
        let err = ApiError::from(StoreError::Api {
            status: 500,
            message: "pg down".to_owned(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
