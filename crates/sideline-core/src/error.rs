use serde::Serialize;

/// JSON body used for every error response
///
/// Matches the shape the reference client expects: a single `error` string.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
