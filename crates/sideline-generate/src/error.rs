use http::StatusCode;

/// Errors returned by the generation client
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Authentication with the provider failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider API returned an error
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider returned a response with no choices or unparseable JSON
    #[error("Provider returned an empty completion")]
    EmptyCompletion,
}

impl GenerateError {
    /// HTTP status code surfaced to the client for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthenticationFailed(_) => StatusCode::UNAUTHORIZED,
            Self::ConnectionError(_) => StatusCode::BAD_GATEWAY,
            Self::ProviderApiError { status, .. } => match *status {
                400 => StatusCode::BAD_REQUEST,
                401 => StatusCode::UNAUTHORIZED,
                429 => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::EmptyCompletion => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
