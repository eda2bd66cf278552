//! API error types and failure classification.
//!
//! Every failed request ends up as an [`ApiError`]. Before a failure is
//! surfaced to the report pipeline it is classified into one of two
//! log-facing categories (see [`FailureKind`]): an upstream HTTP failure
//! carrying a status and an application message, or an unknown failure
//! (transport fault, undecodable body) with no structure to report.

use thiserror::Error;
use tracing::warn;

// ============================================================================
// API Error
// ============================================================================

/// Error type for outage API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {message}")]
    Upstream {
        /// HTTP status code of the response.
        status: u16,
        /// Message carried in the response body.
        message: String,
    },

    /// A success response carried a body that could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

// ============================================================================
// Failure Classification
// ============================================================================

/// Log-facing classification of a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The API answered with an HTTP status and an application message.
    Upstream {
        /// HTTP status code of the response.
        status: u16,
        /// Message carried in the response body.
        message: String,
    },
    /// Anything else: connect failures, timeouts, undecodable bodies.
    Unknown,
}

impl ApiError {
    /// Splits a failure into the two categories the log output
    /// distinguishes.
    pub fn classify(&self) -> FailureKind {
        match self {
            Self::Upstream { status, message } => FailureKind::Upstream {
                status: *status,
                message: message.clone(),
            },
            Self::Transport(_) | Self::Decode(_) => FailureKind::Unknown,
        }
    }
}

/// Logs a failed request according to its classification.
///
/// An upstream failure logs the fixed failure banner together with the
/// status code and the application-supplied message. Any other failure
/// logs a single generic event. Always returns normally so the caller can
/// continue with the failure signal it already holds.
pub fn log_request_failure(err: &ApiError) {
    match err.classify() {
        FailureKind::Upstream { status, message } => {
            warn!(status, message = %message, "Failed to retrieve outage data");
        }
        FailureKind::Unknown => {
            warn!(error = %err, "An unknown error occurred retrieving outage data");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
