// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # OutageSync Core
//!
//! Core domain models for the OutageSync application.
//!
//! This crate holds the wire-level data structures shared by the API client
//! and the CLI, plus the pure predicates applied to them. It performs no
//! I/O of its own.
//!
//! ## Key Types
//!
//! - [`Outage`] - A reported downtime interval for one device
//! - [`EnhancedOutage`] - An outage annotated with its device display name
//! - [`SiteInfo`] - A site's identity and device roster
//! - [`Device`] - One entry in a site's device roster
//! - [`ErrorResponse`] - Application-level error body returned by the API
//!
//! ## Reporting Window
//!
//! Only outages beginning on or after [`reporting_window_start`] are
//! eligible for submission; see [`Outage::within_reporting_window`].

pub mod models;

// Re-export all model types
pub use models::{
    reporting_window_start, Device, EnhancedOutage, ErrorResponse, Outage, SiteInfo,
};
