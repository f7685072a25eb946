//! Domain Errors
//!
//! Error taxonomies for the store and resolver ports. Lookup failures are
//! modeled as typed errors rather than sentinel country strings so a failed
//! resolution can never be written back as data.

/// Errors from the record store, on either the fetch or write-back side.
///
/// Any store error aborts the run; batches written before the failure
/// stay committed.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store answered with a non-success HTTP status.
    #[error("store request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// A response was missing the fields this job relies on.
    #[error("store response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request never completed.
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors from a single country lookup.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The lookup kept answering 429 until the retry budget ran out.
    #[error("rate limited by the geolocation service")]
    RateLimited,

    /// The lookup answered with a non-retryable HTTP status.
    #[error("geolocation lookup failed with status {status}")]
    Http { status: u16 },

    /// The request never completed.
    #[error("geolocation request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ResolveError {
    /// Whether this error aborts the whole run instead of skipping one record.
    ///
    /// Rate limiting and HTTP errors drop the affected record; transport
    /// failures stop the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ResolveError::Transport(_))
    }
}
