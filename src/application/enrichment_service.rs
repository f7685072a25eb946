//! Enrichment Service - Main application use case
//!
//! Orchestrates the pipeline: fetch pending records, resolve each IP to a
//! country, write the resolved countries back. This is the only use case
//! the composition root drives.

use crate::domain::entities::ResolvedRecord;
use crate::domain::ports::{CountryResolver, RecordSink, RecordSource};
use std::sync::Arc;

/// Outcome of one enrichment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Pending records returned by the source
    pub fetched: usize,
    /// Records that resolved and were written back
    pub resolved: usize,
    /// Records dropped because their lookup failed
    pub skipped: usize,
}

/// Enrichment service - main application use case.
///
/// The pipeline is strictly sequential:
/// 1. Fetches pending records from the source
/// 2. Resolves each record's IP, dropping records whose lookup fails
/// 3. Writes the resolved records to the sink, in fetch order
pub struct EnrichmentService {
    source: Arc<dyn RecordSource>,
    resolver: Arc<dyn CountryResolver>,
    sink: Arc<dyn RecordSink>,
}

impl EnrichmentService {
    /// Create a new enrichment service.
    pub fn new(
        source: Arc<dyn RecordSource>,
        resolver: Arc<dyn CountryResolver>,
        sink: Arc<dyn RecordSink>,
    ) -> Self {
        Self {
            source,
            resolver,
            sink,
        }
    }

    /// Run the pipeline once.
    ///
    /// Skippable lookup failures (rate-limit exhaustion, HTTP errors) drop
    /// the affected record with a warning; the run still succeeds. Store
    /// errors and transport-level lookup failures abort the run.
    pub async fn run(&self) -> anyhow::Result<RunReport> {
        tracing::info!("fetching pending records");
        let pending = self.source.fetch_pending().await?;
        tracing::info!("found {} records", pending.len());

        if pending.is_empty() {
            tracing::info!("no pending records, nothing to do");
            return Ok(RunReport {
                fetched: 0,
                resolved: 0,
                skipped: 0,
            });
        }

        let fetched = pending.len();
        let mut resolved: Vec<ResolvedRecord> = Vec::with_capacity(fetched);
        let mut skipped = 0usize;

        for record in pending {
            tracing::debug!("resolving country for {}", record.ip);
            match self.resolver.resolve(&record.ip).await {
                Ok(country) => resolved.push(record.with_country(country)),
                Err(e) if !e.is_fatal() => {
                    tracing::warn!("skipping record {} (ip {}): {}", record.id, record.ip, e);
                    skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        if resolved.is_empty() {
            tracing::info!("no valid records to update");
        } else {
            self.sink.write_back(&resolved).await?;
        }

        Ok(RunReport {
            fetched,
            resolved: resolved.len(),
            skipped,
        })
    }
}
