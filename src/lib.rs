//! rsvp-geotag Library
//!
//! This module exposes the enrichment-pipeline components for use in
//! integration tests and as a library.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::{EnrichmentService, RunReport};
pub use config::{load_config, Config, ConfigError};
pub use domain::entities::{PendingRecord, ResolvedRecord};
pub use domain::errors::{ResolveError, StoreError};
pub use domain::ports::{CountryResolver, RecordSink, RecordSource};
pub use infrastructure::BackoffPolicy;
