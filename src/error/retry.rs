use super::Error;

/// Strategy for handling errors in a retry context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry after the configured delay (network errors, any non-success status)
    Retry,
    /// Failed permanently for this unit of work (malformed payload, empty reference)
    Fail,
    /// Stop the whole run (authentication or persistence failure)
    Abort,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::BlizzardError(err) => match err {
                blizzard::Error::AuthError(_) => ErrorRetryStrategy::Abort,

                // Any non-success response or network failure gets another attempt
                blizzard::Error::StatusError { .. } | blizzard::Error::ReqwestError(_) => {
                    ErrorRetryStrategy::Retry
                }

                // Malformed payloads won't change on a second request
                blizzard::Error::DecodeError { .. }
                | blizzard::Error::EmptyHref
                | blizzard::Error::UrlError(_) => ErrorRetryStrategy::Fail,

                blizzard::Error::ConfigError(_) => ErrorRetryStrategy::Abort,
            },

            // Persistence errors abort the run, a retried write would not run inside
            // the same transaction
            Self::DbErr(_) => ErrorRetryStrategy::Abort,

            // Already the outcome of a failed unit of work
            Self::IngestionAborted { .. } => ErrorRetryStrategy::Fail,

            Self::EnrichmentBudgetExceeded { .. }
            | Self::ConfigError(_)
            | Self::WorklistError { .. }
            | Self::IoError(_)
            | Self::ParseError(_)
            | Self::InternalError(_) => ErrorRetryStrategy::Abort,
        }
    }
}
