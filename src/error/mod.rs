//! Error types for the blackwater pipeline.
//!
//! All failures surface as [`Error`]. Besides wrapping the API client, database and
//! configuration errors it carries the two pipeline-specific outcomes: an aborted auction
//! house ingestion and an exhausted item enrichment failure budget.
//!
//! # Taxonomy
//! - Authentication: `BlizzardError(blizzard::Error::AuthError)`, aborts any run
//! - Transport: `BlizzardError(StatusError | ReqwestError)`, skips the current unit of work
//! - Decode: `BlizzardError(DecodeError)`, skips the current unit of work
//! - Persistence: `DbErr`, aborts the run
//! - Budget exceeded: `EnrichmentBudgetExceeded`, aborts item enrichment

pub mod config;
pub mod retry;

use thiserror::Error;

use crate::error::config::ConfigError;

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Blizzard API error (authentication, transport, decoding).
    #[error(transparent)]
    BlizzardError(#[from] blizzard::Error),
    /// Database error (connection, transaction begin/commit, query failures).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// A listing upsert failed, the open batch was rolled back.
    ///
    /// `committed` listings of earlier batches remain stored.
    #[error("Auction ingestion aborted with {committed} of {parsed} listings committed: {source}")]
    IngestionAborted {
        parsed: usize,
        committed: usize,
        #[source]
        source: sea_orm::DbErr,
    },
    /// Item enrichment stopped after more failed items than the budget allows.
    #[error("Item enrichment aborted after {failures} failed items (budget {budget})")]
    EnrichmentBudgetExceeded { failures: u32, budget: u32 },
    /// Realm worklist file is not valid JSON.
    #[error("Failed to parse realm worklist {path}: {source}")]
    WorklistError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// Filesystem error (worklists, log file, database directory).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in blackwater's code.
    #[error("Internal error with blackwater's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
}

impl Error {
    /// Whether the error must stop the whole run instead of only the current realm or faction.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::BlizzardError(err) => err.is_auth(),
            Self::IngestionAborted { .. } => false,
            Self::ConfigError(_)
            | Self::DbErr(_)
            | Self::EnrichmentBudgetExceeded { .. }
            | Self::WorklistError { .. }
            | Self::IoError(_)
            | Self::ParseError(_)
            | Self::InternalError(_) => true,
        }
    }
}
