//! Domain models for OutageSync.
//!
//! This module contains the data structures exchanged with the outage API
//! and the pure logic applied to them before submission.
//!
//! ## Submodules
//!
//! - [`outage`] - Outage records, enrichment, and the reporting window
//! - [`site`] - Site metadata and the device roster

pub mod outage;
pub mod site;

// Re-export everything at the models level
pub use outage::{reporting_window_start, EnhancedOutage, ErrorResponse, Outage};
pub use site::{Device, SiteInfo};
