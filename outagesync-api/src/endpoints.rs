//! Typed endpoints of the outage API.
//!
//! Every method logs a failure through the shared classifier before
//! returning it, so callers can abort without additional reporting.

use outagesync_core::{EnhancedOutage, Outage, SiteInfo};
use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::error::{log_request_failure, ApiError};

// ============================================================================
// Constants
// ============================================================================

/// All-outages endpoint.
const OUTAGES_PATH: &str = "/outages";

/// Site information endpoint; the site id is appended.
const SITE_INFO_PATH: &str = "/site-info";

/// Site outage submission endpoint; the site id is appended.
const SITE_OUTAGES_PATH: &str = "/site-outages";

// ============================================================================
// API
// ============================================================================

/// Typed access to the outage API endpoints.
#[derive(Debug, Clone)]
pub struct OutageApi {
    client: ApiClient,
}

impl OutageApi {
    /// Creates the endpoint layer on top of a configured client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches every outage known to the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    /// The failure is logged before it is returned.
    #[instrument(skip(self))]
    pub async fn list_outages(&self) -> Result<Vec<Outage>, ApiError> {
        debug!("Fetching all outages");

        self.client
            .get_json(OUTAGES_PATH)
            .await
            .inspect_err(log_request_failure)
    }

    /// Fetches the device roster for a site.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    /// The failure is logged before it is returned.
    #[instrument(skip(self))]
    pub async fn site_info(&self, site_id: &str) -> Result<SiteInfo, ApiError> {
        debug!("Fetching site information");

        self.client
            .get_json(&format!("{}/{}", SITE_INFO_PATH, site_id))
            .await
            .inspect_err(log_request_failure)
    }

    /// Submits enhanced outages for a site.
    ///
    /// An empty list is submitted as `[]` rather than skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails. The failure is logged before
    /// it is returned.
    #[instrument(skip(self, outages))]
    pub async fn submit_site_outages(
        &self,
        site_id: &str,
        outages: &[EnhancedOutage],
    ) -> Result<(), ApiError> {
        debug!(count = outages.len(), "Submitting site outages");

        self.client
            .post_json(&format!("{}/{}", SITE_OUTAGES_PATH, site_id), outages)
            .await
            .inspect_err(log_request_failure)
    }
}
