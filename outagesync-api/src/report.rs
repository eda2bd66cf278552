//! Site outage reporting pipeline.
//!
//! The pipeline fetches every outage, fetches the site's device roster,
//! keeps outages that belong to a rostered device and begin inside the
//! reporting window, attaches device names, and submits the result.

use std::collections::HashMap;

use outagesync_core::{EnhancedOutage, Outage, SiteInfo};
use tracing::{debug, info, instrument};

use crate::endpoints::OutageApi;

// ============================================================================
// Report Outcome
// ============================================================================

/// Pipeline stage at which a report run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStage {
    /// Fetching the full outage list.
    ListOutages,
    /// Fetching the site's device roster.
    SiteInfo,
    /// Submitting the enhanced outages.
    Submit,
}

/// The outcome of a report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Enhanced outages were submitted.
    Submitted {
        /// Number of outages sent.
        count: usize,
    },
    /// The run stopped at the given stage. The failure has already been
    /// logged by the endpoint layer; no submission was made.
    Aborted(ReportStage),
}

impl ReportOutcome {
    /// Returns true if outages were submitted.
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Runs the full report pipeline for a site.
///
/// Any request failure aborts the run before submission. An empty filtered
/// list is still submitted, clearing previously reported outages for the
/// site.
#[instrument(skip(api))]
pub async fn run_site_report(api: &OutageApi, site_id: &str) -> ReportOutcome {
    let Ok(outages) = api.list_outages().await else {
        return ReportOutcome::Aborted(ReportStage::ListOutages);
    };

    let Ok(site) = api.site_info(site_id).await else {
        return ReportOutcome::Aborted(ReportStage::SiteInfo);
    };

    let enhanced = enrich_for_site(outages, &site);
    debug!(count = enhanced.len(), "Enhanced outages ready for submission");

    if api.submit_site_outages(site_id, &enhanced).await.is_err() {
        return ReportOutcome::Aborted(ReportStage::Submit);
    }

    info!(site_id = %site_id, count = enhanced.len(), "Submitted site outage data");

    ReportOutcome::Submitted {
        count: enhanced.len(),
    }
}

/// Filters outages to the site's devices and the reporting window, then
/// attaches device names.
///
/// Input order is preserved. A roster listing the same device id twice
/// contributes the last name given.
pub fn enrich_for_site(outages: Vec<Outage>, site: &SiteInfo) -> Vec<EnhancedOutage> {
    let names: HashMap<String, String> = site.device_names();

    outages
        .into_iter()
        .filter(Outage::within_reporting_window)
        .filter_map(|outage| names.get(&outage.id).map(|name| outage.enrich(name)))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
