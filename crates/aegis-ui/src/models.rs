//! UI-facing models shared across the app shell and components.

use thiserror::Error;

/// Error raised by backend calls, collapsing transport failures, non-2xx
/// responses, and client-side timeouts into one displayable type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure before an HTTP status was available.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response carrying the best available message: the structured
    /// `detail` body when present, otherwise the HTTP status text.
    #[error("{message}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Message extracted from the response.
        message: String,
    },
    /// The request was aborted after exceeding the client timeout.
    #[error("request timed out after {0}ms")]
    Timeout(u32),
}

impl ApiError {
    /// HTTP status code, when the failure carried one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Timeout(_) => None,
        }
    }

    /// Whether the backend rejected the bearer token.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Toast variants used across the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_display_their_message() {
        let err = ApiError::Status {
            status: 422,
            message: "image rejected".to_string(),
        };
        assert_eq!(err.to_string(), "image rejected");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn unauthorized_is_detected_by_status() {
        let expired = ApiError::Status {
            status: 401,
            message: "unauthorized".to_string(),
        };
        assert!(expired.is_unauthorized());
        assert!(!ApiError::Network("offline".to_string()).is_unauthorized());
        assert!(ApiError::Timeout(30_000).status().is_none());
    }
}
