//! rsvp-geotag - RSVP IP-to-Country Enrichment Job
//!
//! This is the composition root that wires together all the components.

mod adapters;
mod application;
mod config;
mod domain;
mod infrastructure;

use crate::adapters::outbound::{
    AirtableConfig, AirtableRecordStore, IpinfoConfig, IpinfoCountryResolver,
};
use crate::application::EnrichmentService;
use crate::config::{load_config, mask_secret};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment (.env supported)
    dotenvy::dotenv().ok();

    let cfg = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}! exitting...", e);
            std::process::exit(e.exit_code());
        }
    };

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    tracing::info!(
        "starting rsvp-geotag base={} table={} key={} token={}",
        mask_secret(&cfg.store_base_id),
        cfg.store_table,
        mask_secret(&cfg.store_api_key),
        mask_secret(&cfg.geo_token)
    );

    // ===== COMPOSITION ROOT =====
    // Wire up the adapters and the service

    // Record store (Airtable) - one instance serves as source and sink
    let store = Arc::new(AirtableRecordStore::new(AirtableConfig {
        api_url: cfg.store_api_url,
        api_key: cfg.store_api_key,
        base_id: cfg.store_base_id,
        table: cfg.store_table,
    }));

    // Country resolver (ipinfo) with the default backoff policy
    let resolver = Arc::new(IpinfoCountryResolver::new(IpinfoConfig {
        api_url: cfg.geo_api_url,
        token: cfg.geo_token,
    }));

    let service = EnrichmentService::new(store.clone(), resolver, store);

    let report = service.run().await?;

    tracing::info!(
        "run complete: {} fetched, {} resolved, {} skipped",
        report.fetched,
        report.resolved,
        report.skipped
    );

    Ok(())
}
