//! Typed failures for portal API calls.
//!
//! Pages never surface these directly: the loader turns them into banner
//! text via [`ApiError::detail`] and swaps in fallback data.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use records::RecordsError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
    /// The body was not JSON, or not the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (server render or native build).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling the backend's `detail` out of `body`.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, detail: records::error_detail(status, body) }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Human-readable cause for error banners.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Status { detail, .. } => detail.clone(),
            Self::Network(message) | Self::Decode(message) => message.clone(),
            Self::Unavailable => self.to_string(),
        }
    }
}

impl From<RecordsError> for ApiError {
    fn from(error: RecordsError) -> Self {
        Self::Decode(error.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}
