//! Error types for biorange

use thiserror::Error;

/// Result type alias for biorange operations
pub type Result<T> = std::result::Result<T, BiorangeError>;

/// Main error type for biorange
///
/// Transport and response problems with the interaction service are not
/// errors; they surface as tagged outcomes in the network crate. This type
/// covers caller misuse and local I/O.
#[derive(Error, Debug)]
pub enum BiorangeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A caller-supplied table lacks required columns
    #[error("Table '{table}' is missing required column(s): {}", missing.join(", "))]
    MissingColumns { table: String, missing: Vec<String> },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl BiorangeError {
    /// Create a missing-columns error for `table`
    pub fn missing_columns(table: impl Into<String>, missing: Vec<String>) -> Self {
        Self::MissingColumns {
            table: table.into(),
            missing,
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
