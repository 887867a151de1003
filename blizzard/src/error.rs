use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Blizzard API client.
#[derive(Error, Debug)]
pub enum Error {
    /// The OAuth2 client credential exchange could not be completed.
    ///
    /// Any request requiring a bearer token fails with this error, it is not retryable
    /// within the same run.
    #[error("Failed to acquire Blizzard access token: {0}")]
    AuthError(String),
    /// The API responded with a non-success status code.
    #[error("Blizzard API returned {status} for {url}")]
    StatusError { status: StatusCode, url: String },
    /// Network, connection or body transfer failure.
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// The response body could not be decoded into the expected model.
    #[error("Failed to decode response from {url}: {source}")]
    DecodeError {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// A resource reference returned by the API was empty.
    #[error("Resource reference is empty")]
    EmptyHref,
    /// A configured or returned URL could not be parsed.
    #[error(transparent)]
    UrlError(#[from] url::ParseError),
    /// The client was built with missing or invalid settings.
    #[error("Invalid Blizzard client configuration: {0}")]
    ConfigError(String),
}

impl Error {
    /// Whether the error was an authentication failure.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::AuthError(_))
    }

    /// Whether the error was caused by the transport rather than the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::StatusError { .. } | Self::ReqwestError(_))
    }

    /// HTTP status code of the failed response, if there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::StatusError { status, .. } => Some(*status),
            Self::ReqwestError(err) => err.status(),
            _ => None,
        }
    }
}
