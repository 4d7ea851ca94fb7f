use crate::utils::log_sanitizer::truncate_for_display;

/// Unified error type for all controller API operations.
///
/// Every failure of [`ProxyClient`](crate::ProxyClient) is mapped into one of
/// these variants. Values are cheap to clone so they can travel inside UI
/// messages and be kept around for display.
///
/// # Transport Errors
///
/// [`Transport`](Self::Transport) and [`Timeout`](Self::Timeout) mean the
/// controller could not be reached at all. Callers usually show them with a
/// retry hint; see [`ProxyError::is_transport`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProxyError {
    /// Connection-level failure (connection refused, DNS resolution, reset, ...).
    #[error("Network error: {detail}")]
    Transport {
        /// Error details.
        detail: String,
    },

    /// The request did not complete within the client timeout.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The controller answered with an unexpected HTTP status.
    #[error("Unexpected status code {status}: {}", truncate_for_display(.body))]
    Protocol {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {detail}")]
    Decode {
        /// Details about the decode failure.
        detail: String,
    },

    /// The request could not be built (bad base URL, body serialization, ...).
    #[error("Failed to build request: {detail}")]
    Request {
        /// Details about the failure.
        detail: String,
    },
}

impl ProxyError {
    /// Whether the controller was unreachable (as opposed to answering badly).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }

    /// HTTP status code, if the controller answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, ProxyError>`.
pub type Result<T> = std::result::Result<T, ProxyError>;
