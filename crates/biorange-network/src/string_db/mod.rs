//! STRING interaction network client
//!
//! STRING serves protein-protein interaction networks for a list of
//! identifiers. The network endpoint takes a form POST:
//!
//! - `identifiers`: identifiers joined by `\r`
//! - `species`: NCBI taxonomy id (9606 for human)
//! - `caller_identity`: free-form client name
//!
//! and answers with UTF-8 TSV, one interaction per row, including the
//! `preferredName_A` / `preferredName_B` endpoint columns.
//!
//! Failures never raise. [`FetchOutcome`] tags why nothing came back so
//! callers can branch on the cause.

pub mod parser;

use crate::config::StringDbConfig;
use async_trait::async_trait;
use biorange_common::{BiorangeError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub use parser::{parse_interactions, ParseFailure};

/// Separator STRING expects between identifiers
pub const IDENTIFIER_SEPARATOR: &str = "\r";

/// Why a fetch produced no usable body
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FetchFailure {
    #[error("interaction service returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("request to interaction service failed: {0}")]
    Transport(String),

    #[error("interaction service returned an empty body")]
    EmptyBody,

    #[error("no identifiers to query")]
    NoIdentifiers,
}

/// Result of a single bulk query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Raw TSV body
    Fetched(String),
    Failed(FetchFailure),
}

impl FetchOutcome {
    /// True when there is nothing to parse
    pub fn is_empty(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    pub fn into_body(self) -> Option<String> {
        match self {
            FetchOutcome::Fetched(body) => Some(body),
            FetchOutcome::Failed(_) => None,
        }
    }
}

/// A source of interaction networks
#[async_trait]
pub trait InteractionSource: Send + Sync {
    /// Issue one bulk query for `identifiers` in `species`
    async fn fetch_network(&self, identifiers: &[String], species: u32) -> FetchOutcome;
}

/// HTTP client for the STRING network endpoint
pub struct StringDbClient {
    client: Client,
    network_url: String,
    caller_identity: String,
}

impl StringDbClient {
    /// Create a client from explicit configuration
    pub fn new(config: &StringDbConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| BiorangeError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            network_url: config.network_url(),
            caller_identity: config.caller_identity.clone(),
        })
    }

    pub fn network_url(&self) -> &str {
        &self.network_url
    }
}

#[async_trait]
impl InteractionSource for StringDbClient {
    #[instrument(skip(self, identifiers), fields(identifiers = identifiers.len()))]
    async fn fetch_network(&self, identifiers: &[String], species: u32) -> FetchOutcome {
        if identifiers.is_empty() {
            warn!("No identifiers supplied, skipping interaction query");
            return FetchOutcome::Failed(FetchFailure::NoIdentifiers);
        }

        let joined = identifiers.join(IDENTIFIER_SEPARATOR);
        let species = species.to_string();
        let form = [
            ("identifiers", joined.as_str()),
            ("species", species.as_str()),
            ("caller_identity", self.caller_identity.as_str()),
        ];

        info!(url = %self.network_url, species = %species, "Querying interaction network");

        let response = match self.client.post(&self.network_url).form(&form).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Interaction request failed");
                return FetchOutcome::Failed(FetchFailure::Transport(e.to_string()));
            },
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, status = %status, "Failed to read interaction response body");
                return FetchOutcome::Failed(FetchFailure::Transport(e.to_string()));
            },
        };

        if status != reqwest::StatusCode::OK {
            warn!(status = %status, body = %body, "Interaction service returned an error");
            return FetchOutcome::Failed(FetchFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            warn!("Interaction service returned an empty body");
            return FetchOutcome::Failed(FetchFailure::EmptyBody);
        }

        debug!(bytes = body.len(), "Received interaction network");
        FetchOutcome::Fetched(body)
    }
}
