// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # OutageSync API
//!
//! HTTP client, typed endpoints, and the reporting pipeline for the
//! outage API.
//!
//! This crate provides everything needed to run a site outage report:
//!
//! ## Client
//!
//! - [`config::ApiConfig`] - Base URL, API key, and timeout settings
//! - [`client::ApiClient`] - Authenticated HTTP client with HTTP 500 retries
//! - [`retry::RetryPolicy`] - Exponential backoff schedule
//!
//! ## Endpoints
//!
//! - [`endpoints::OutageApi`] - `GET /outages`, `GET /site-info/{id}`,
//!   `POST /site-outages/{id}`
//! - [`error::ApiError`] - Failure taxonomy shared by all endpoints
//!
//! ## Pipeline
//!
//! - [`report::run_site_report`] - Fetch, filter, enrich, submit
//! - [`report::ReportOutcome`] - Submission count or aborted stage
//!
//! ## Example
//!
//! ```ignore
//! use outagesync_api::{ApiClient, ApiConfig, OutageApi, run_site_report};
//!
//! let config = ApiConfig::from_env()?;
//! let api = OutageApi::new(ApiClient::new(config)?);
//!
//! let outcome = run_site_report(&api, "norwich-pear-tree").await;
//! ```

// Core modules
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod report;
pub mod retry;

// Re-export key types at crate root

// Client
pub use client::{ApiClient, API_KEY_HEADER};
pub use config::{ApiConfig, ConfigError, API_KEY_ENV, BASE_URL_ENV};
pub use retry::RetryPolicy;

// Endpoints
pub use endpoints::OutageApi;
pub use error::{ApiError, FailureKind};

// Pipeline
pub use report::{enrich_for_site, run_site_report, ReportOutcome, ReportStage};
