//! Configuration
//!
//! Loads the job's credentials and endpoints from the environment. The
//! three secrets are required; everything else has a production default.
//! Credential checks happen before logging is initialized, so failures
//! are reported on stderr by the composition root.

/// Configuration for one enrichment run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Record store API key, sent as a bearer token
    pub store_api_key: String,
    /// Identifier of the base holding the RSVP table
    pub store_base_id: String,
    /// Name of the table holding RSVP records
    pub store_table: String,
    /// Base URL for the record store API
    pub store_api_url: String,
    /// Geolocation API token, sent as a bearer token
    pub geo_token: String,
    /// Base URL for the geolocation API
    pub geo_api_url: String,
    /// Enable debug-level logging
    pub debug: bool,
}

/// A required credential is absent.
///
/// Each variant maps to its own process exit code so a scheduler can tell
/// the two failure modes apart.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("AIRTABLE_API_KEY or AIRTABLE_BASE_ID missing")]
    MissingStoreCredentials,

    #[error("IPINFO_API_TOKEN missing")]
    MissingGeoToken,
}

impl ConfigError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::MissingStoreCredentials => -1,
            ConfigError::MissingGeoToken => -2,
        }
    }
}

/// Read an env var, treating an empty value as unset.
fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

pub fn load_config() -> Result<Config, ConfigError> {
    let store_api_key = env_nonempty("AIRTABLE_API_KEY");
    let store_base_id = env_nonempty("AIRTABLE_BASE_ID");
    let geo_token = env_nonempty("IPINFO_API_TOKEN");

    // Store credentials are checked first; their absence wins the exit code
    let (store_api_key, store_base_id) = match (store_api_key, store_base_id) {
        (Some(key), Some(base)) => (key, base),
        _ => return Err(ConfigError::MissingStoreCredentials),
    };

    let geo_token = geo_token.ok_or(ConfigError::MissingGeoToken)?;

    let store_table =
        env_nonempty("AIRTABLE_RSVP_TABLE").unwrap_or_else(|| "RSVPs".to_string());

    let store_api_url = env_nonempty("AIRTABLE_API_URL")
        .unwrap_or_else(|| "https://api.airtable.com/v0".to_string());

    let geo_api_url =
        env_nonempty("IPINFO_API_URL").unwrap_or_else(|| "https://ipinfo.io".to_string());

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        store_api_key,
        store_base_id,
        store_table,
        store_api_url,
        geo_token,
        geo_api_url,
        debug,
    })
}

/// Mask a secret for logging: keep the first and last four characters of
/// long values, hide short ones entirely.
pub fn mask_secret(secret: &str) -> String {
    if secret.len() <= 8 {
        "***masked***".to_string()
    } else {
        format!("{}...{}", &secret[..4], &secret[secret.len() - 4..])
    }
}
