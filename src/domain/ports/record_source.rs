//! Record Source Port
//!
//! Defines the interface for fetching records that still need a country.

use crate::domain::entities::PendingRecord;
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Source of records awaiting enrichment.
///
/// This is an outbound port that abstracts the hosted record store.
/// Implementations decide how pending records are queried and how many
/// a single fetch may return.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the records whose IP is known and whose country is still blank.
    ///
    /// An empty result means there is nothing left to enrich; that is a
    /// normal outcome, not an error.
    async fn fetch_pending(&self) -> Result<Vec<PendingRecord>, StoreError>;
}
