/// Errors returned by the store client
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP transport or connection error
    #[error("store request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-success status
    #[error("store API error ({status}): {message}")]
    Api {
        /// HTTP status from the store
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// No row matched the requested session id
    ///
    /// Covers both "never created" and "swept by a later create".
    #[error("session not found")]
    NotFound,

    /// Store configuration is invalid
    #[error("store configuration error: {0}")]
    Config(String),
}
