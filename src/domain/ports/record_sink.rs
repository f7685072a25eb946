//! Record Sink Port
//!
//! Defines the interface for writing resolved countries back to the store.

use crate::domain::entities::ResolvedRecord;
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Sink for resolved records.
///
/// This is an outbound port that abstracts the write-back side of the
/// hosted record store. Implementations split the sequence into whatever
/// batches the store accepts, preserving the input order.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Write resolved countries back to the store.
    ///
    /// An empty slice performs no writes. A failed batch aborts the
    /// remaining ones; batches already written stay committed.
    async fn write_back(&self, records: &[ResolvedRecord]) -> Result<(), StoreError>;
}
