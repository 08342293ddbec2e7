//! Provider error types.

/// Errors from talking to a rail provider.
///
/// None of these are retried; they propagate to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-2xx status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Body was not JSON, or not the expected shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Body parsed but a record breaks the data model
    #[error("malformed response: {message}")]
    Malformed { message: String },
}

impl ProviderError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        ProviderError::Malformed {
            message: message.into(),
        }
    }
}
