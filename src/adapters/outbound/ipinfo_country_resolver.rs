//! ipinfo Country Resolver
//!
//! Implements CountryResolver against the ipinfo lookup API. The country
//! endpoint returns the country as a plain-text body; rate-limited
//! lookups (HTTP 429) are retried with exponential backoff, every other
//! failure is returned as-is.

use crate::domain::errors::ResolveError;
use crate::domain::ports::CountryResolver;
use crate::infrastructure::BackoffPolicy;
use async_trait::async_trait;

/// Configuration for the ipinfo connection.
#[derive(Debug, Clone)]
pub struct IpinfoConfig {
    /// Base URL for the ipinfo API
    pub api_url: String,
    /// Access token sent as a bearer token
    pub token: String,
}

impl Default for IpinfoConfig {
    fn default() -> Self {
        Self {
            api_url: "https://ipinfo.io".to_string(),
            token: String::new(),
        }
    }
}

/// ipinfo-backed country resolver.
pub struct IpinfoCountryResolver {
    config: IpinfoConfig,
    backoff: BackoffPolicy,
    client: reqwest::Client,
}

impl IpinfoCountryResolver {
    /// Create a new resolver with the default backoff policy.
    pub fn new(config: IpinfoConfig) -> Self {
        Self::with_backoff(config, BackoffPolicy::default())
    }

    /// Create a new resolver with a custom backoff policy.
    #[allow(dead_code)]
    pub fn with_backoff(config: IpinfoConfig, backoff: BackoffPolicy) -> Self {
        Self {
            config,
            backoff,
            client: reqwest::Client::new(),
        }
    }

    /// One lookup attempt, without retries.
    async fn lookup(&self, ip: &str) -> Result<String, ResolveError> {
        let url = format!("{}/{}/country", self.config.api_url, ip);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.token)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ResolveError::RateLimited);
        }
        if !status.is_success() {
            return Err(ResolveError::Http {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?.trim().to_string())
    }
}

#[async_trait]
impl CountryResolver for IpinfoCountryResolver {
    async fn resolve(&self, ip: &str) -> Result<String, ResolveError> {
        self.backoff
            .run(
                "country lookup",
                |e| matches!(e, ResolveError::RateLimited),
                || self.lookup(ip),
            )
            .await
    }
}
