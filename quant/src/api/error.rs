use thiserror::Error;

/// Error text the platform returns when a publish submits content identical
/// to the currently published version. The message is the only signal the
/// API exposes for this condition; there is no structured status code.
pub const IDEMPOTENT_REPUBLISH_MARKER: &str = "Published version already has md5";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("invalid API endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error("authentication failed")]
    AuthenticationFailed,
}

impl ApiError {
    /// True when the remote rejected a write because the submitted content
    /// is already the published version. Callers treat this as success.
    pub fn is_idempotent_republish(&self) -> bool {
        matches!(self, ApiError::Api { message, .. } if message.contains(IDEMPOTENT_REPUBLISH_MARKER))
    }
}
