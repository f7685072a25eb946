//! Airtable Record Store
//!
//! Implements RecordSource and RecordSink over Airtable's REST API.
//! Pending records are listed with a filter formula matching rows that
//! have a captured IP address and a blank country, and resolved countries
//! are written back with PATCH requests of at most ten records each.

use crate::domain::entities::{PendingRecord, ResolvedRecord};
use crate::domain::errors::StoreError;
use crate::domain::ports::{RecordSink, RecordSource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Airtable caps PATCH payloads at this many records per request.
const MAX_PATCH_BATCH: usize = 10;

/// Most records a single list request may return.
const MAX_FETCH_RECORDS: u32 = 100;

/// Field holding the captured IP address.
const IP_FIELD: &str = "IP Address";

/// Rows still waiting for enrichment: IP captured (not the "Unknown"
/// sentinel) and country still blank.
const PENDING_FILTER: &str = "AND({IP Address} != 'Unknown', {Country} = BLANK())";

/// One row of a record list response.
#[derive(Debug, Deserialize)]
struct RecordRow {
    id: String,
    fields: RowFields,
}

#[derive(Debug, Deserialize)]
struct RowFields {
    #[serde(rename = "IP Address")]
    ip_address: String,
}

/// Response from the record list endpoint.
#[derive(Debug, Deserialize)]
struct RecordListResponse {
    records: Vec<RecordRow>,
}

/// One entry of a PATCH request body.
#[derive(Debug, Serialize)]
struct RecordPatch {
    id: String,
    fields: PatchFields,
}

#[derive(Debug, Serialize)]
struct PatchFields {
    #[serde(rename = "Country")]
    country: String,
}

/// Body of a PATCH request.
#[derive(Debug, Serialize)]
struct RecordPatchRequest {
    records: Vec<RecordPatch>,
}

/// Configuration for the Airtable connection.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    /// Base URL for the Airtable REST API
    pub api_url: String,
    /// API key sent as a bearer token
    pub api_key: String,
    /// Identifier of the base holding the RSVP table
    pub base_id: String,
    /// Name of the table holding RSVP records
    pub table: String,
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.airtable.com/v0".to_string(),
            api_key: String::new(),
            base_id: String::new(),
            table: "RSVPs".to_string(),
        }
    }
}

/// Airtable-backed record store.
///
/// A single instance serves as both the record source and the record
/// sink; both sides talk to the same table.
pub struct AirtableRecordStore {
    config: AirtableConfig,
    client: reqwest::Client,
}

impl AirtableRecordStore {
    /// Create a new store with the given configuration.
    pub fn new(config: AirtableConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn table_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.config.api_url, self.config.base_id, self.config.table
        )
    }

    /// Send one PATCH request with at most MAX_PATCH_BATCH records.
    async fn patch_batch(&self, batch: &[ResolvedRecord]) -> Result<(), StoreError> {
        let body = RecordPatchRequest {
            records: batch
                .iter()
                .map(|r| RecordPatch {
                    id: r.id.clone(),
                    fields: PatchFields {
                        country: r.country.clone(),
                    },
                })
                .collect(),
        };

        let response = self
            .client
            .patch(self.table_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Http { status, body });
        }

        Ok(())
    }
}

#[async_trait]
impl RecordSource for AirtableRecordStore {
    async fn fetch_pending(&self) -> Result<Vec<PendingRecord>, StoreError> {
        let response = self
            .client
            .get(self.table_url())
            .bearer_auth(&self.config.api_key)
            .query(&[("fields[]", IP_FIELD), ("filterByFormula", PENDING_FILTER)])
            .query(&[("maxRecords", MAX_FETCH_RECORDS)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Http { status, body });
        }

        let body = response.text().await?;
        let list: RecordListResponse = serde_json::from_str(&body)?;

        Ok(list
            .records
            .into_iter()
            .map(|row| PendingRecord {
                id: row.id,
                ip: row.fields.ip_address,
            })
            .collect())
    }
}

#[async_trait]
impl RecordSink for AirtableRecordStore {
    async fn write_back(&self, records: &[ResolvedRecord]) -> Result<(), StoreError> {
        if records.is_empty() {
            tracing::info!("no resolved records, skipping write-back");
            return Ok(());
        }

        let batches = records.len().div_ceil(MAX_PATCH_BATCH);
        for (i, batch) in records.chunks(MAX_PATCH_BATCH).enumerate() {
            tracing::info!(
                "patching batch {}/{} ({} records)",
                i + 1,
                batches,
                batch.len()
            );
            self.patch_batch(batch).await?;
        }

        Ok(())
    }
}
