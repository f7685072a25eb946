//! Application Layer
//!
//! Use cases that orchestrate the domain through its ports.

mod enrichment_service;

pub use enrichment_service::{EnrichmentService, RunReport};
