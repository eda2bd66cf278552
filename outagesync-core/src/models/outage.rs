//! Outage records and the reporting window.
//!
//! This module contains:
//! - [`Outage`] - A downtime interval as received from the API
//! - [`EnhancedOutage`] - An outage annotated with its device display name
//! - [`ErrorResponse`] - Application-level error body returned by the API
//! - [`reporting_window_start`] - The fixed lower bound for reportable outages

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Reporting Window
// ============================================================================

/// Lower bound of the reporting window, as an RFC 3339 instant.
const REPORTING_WINDOW_START_RFC3339: &str = "2022-01-01T00:00:00Z";

static REPORTING_WINDOW_START: LazyLock<DateTime<Utc>> = LazyLock::new(|| {
    DateTime::parse_from_rfc3339(REPORTING_WINDOW_START_RFC3339)
        .expect("Invalid window start")
        .with_timezone(&Utc)
});

/// Returns the earliest `begin` instant an outage may have and still be
/// reported.
pub fn reporting_window_start() -> DateTime<Utc> {
    *REPORTING_WINDOW_START
}

// ============================================================================
// Outage Records
// ============================================================================

/// A reported downtime interval for one device.
///
/// Received verbatim from the API; `id` refers to the affected device.
/// `begin <= end` is guaranteed upstream and not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outage {
    /// The device ID the outage pertains to.
    pub id: String,
    /// Outage begin time.
    pub begin: DateTime<Utc>,
    /// Outage end time.
    pub end: DateTime<Utc>,
}

impl Outage {
    /// Returns true if the outage began on or after
    /// [`reporting_window_start`]. The boundary is inclusive.
    pub fn within_reporting_window(&self) -> bool {
        self.begin >= reporting_window_start()
    }

    /// Attaches a device display name, producing an [`EnhancedOutage`].
    pub fn enrich(self, name: impl Into<String>) -> EnhancedOutage {
        EnhancedOutage {
            id: self.id,
            name: name.into(),
            begin: self.begin,
            end: self.end,
        }
    }
}

/// An outage annotated with its device's display name, ready for
/// submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedOutage {
    /// The device ID the outage pertains to.
    pub id: String,
    /// The display name of the device.
    pub name: String,
    /// Outage begin time.
    pub begin: DateTime<Utc>,
    /// Outage end time.
    pub end: DateTime<Utc>,
}

// ============================================================================
// Error Body
// ============================================================================

/// Application-level error body returned by the outage API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure description supplied by the API.
    pub message: String,
}

// ============================================================================
// Tests
// ============================================================================
