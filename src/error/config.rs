use thiserror::Error;

/// Environment configuration failures, raised before any store or API access.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `BLIZZARD_CLIENT_ID` or `BLIZZARD_CLIENT_SECRET` is unset or empty.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed, e.g. an unknown `GAME_VERSION`.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
