//! Configuration management

use biorange_common::{BiorangeError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Base URL of the STRING REST API.
pub const DEFAULT_STRING_BASE_URL: &str = "https://string-db.org/api";

/// NCBI taxonomy id for Homo sapiens.
pub const DEFAULT_SPECIES: u32 = 9606;

/// Identity string sent with every STRING request.
pub const DEFAULT_CALLER_IDENTITY: &str = "biorange";

/// Default directory for pipeline output tables.
pub const DEFAULT_OUTPUT_DIR: &str = "./results/network";

/// Pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub string_db: StringDbConfig,
    pub output: OutputConfig,
}

/// Interaction service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringDbConfig {
    pub base_url: String,
    pub species: u32,
    pub caller_identity: String,

    /// Request timeout; `None` keeps the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl Default for StringDbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STRING_BASE_URL.to_string(),
            species: DEFAULT_SPECIES,
            caller_identity: DEFAULT_CALLER_IDENTITY.to_string(),
            timeout_secs: None,
        }
    }
}

impl StringDbConfig {
    /// Endpoint returning the interaction network as TSV
    pub fn network_url(&self) -> String {
        format!("{}/tsv/network", self.base_url.trim_end_matches('/'))
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl NetworkConfig {
    /// Load configuration from `.env`, the environment, and defaults
    ///
    /// Environment variables:
    /// - `BIORANGE_STRING_URL`
    /// - `BIORANGE_SPECIES`
    /// - `BIORANGE_CALLER_IDENTITY`
    /// - `BIORANGE_HTTP_TIMEOUT_SECS`
    /// - `BIORANGE_OUTPUT_DIR`
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(url) = std::env::var("BIORANGE_STRING_URL") {
            config.string_db.base_url = url;
        }
        if let Ok(species) = std::env::var("BIORANGE_SPECIES") {
            config.string_db.species = species.parse().map_err(|_| {
                BiorangeError::config(format!("BIORANGE_SPECIES is not a taxonomy id: {}", species))
            })?;
        }
        if let Ok(identity) = std::env::var("BIORANGE_CALLER_IDENTITY") {
            config.string_db.caller_identity = identity;
        }
        if let Ok(timeout) = std::env::var("BIORANGE_HTTP_TIMEOUT_SECS") {
            config.string_db.timeout_secs = Some(timeout.parse().map_err(|_| {
                BiorangeError::config(format!(
                    "BIORANGE_HTTP_TIMEOUT_SECS is not a number of seconds: {}",
                    timeout
                ))
            })?);
        }
        if let Ok(dir) = std::env::var("BIORANGE_OUTPUT_DIR") {
            config.output.dir = PathBuf::from(dir);
        }

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.string_db.base_url.trim().is_empty() {
            return Err(BiorangeError::config("STRING base URL cannot be empty"));
        }

        if self.string_db.species == 0 {
            return Err(BiorangeError::config("Species id must be greater than 0"));
        }

        if self.string_db.caller_identity.trim().is_empty() {
            return Err(BiorangeError::config("Caller identity cannot be empty"));
        }

        if self.string_db.timeout_secs == Some(0) {
            return Err(BiorangeError::config("Timeout must be greater than 0"));
        }

        Ok(())
    }
}
