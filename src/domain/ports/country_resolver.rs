//! Country Resolver Port
//!
//! Defines the interface for resolving an IP address to its country.

use crate::domain::errors::ResolveError;
use async_trait::async_trait;

/// Resolver for IP address to country of origin.
///
/// This is an outbound port that abstracts the geolocation service.
/// Implementations may call a remote lookup API or a local database,
/// and are responsible for their own retry behavior.
#[async_trait]
pub trait CountryResolver: Send + Sync {
    /// Resolve an IP address to a country value.
    ///
    /// The IP is treated as an opaque string; validating it is the
    /// geolocation service's job.
    async fn resolve(&self, ip: &str) -> Result<String, ResolveError>;
}
