use std::path::{Path, PathBuf};

use blizzard::GameVersion;
use serde::Deserialize;

use crate::error::{config::ConfigError, Error};

pub static DEFAULT_DATABASE_URL: &str = "sqlite://data/db/blackwater.db?mode=rwc";
pub static DEFAULT_TOKEN_CACHE_PATH: &str = "blackwater.oauth";
pub static DEFAULT_EU_REALMS_PATH: &str = "eu-servers.json";
pub static DEFAULT_US_REALMS_PATH: &str = "us-servers.json";

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Only needed by commands calling the API, see [`Config::blizzard_credentials`]
    pub blizzard_client_id: Option<String>,
    pub blizzard_client_secret: Option<String>,
    pub database_url: String,
    pub token_cache_path: PathBuf,
    pub game_version: GameVersion,
    pub eu_realms_path: PathBuf,
    pub us_realms_path: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to include a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let optional = |var: &str, default: &str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let game_version = match lookup("GAME_VERSION").filter(|v| !v.trim().is_empty()) {
            Some(value) => value
                .parse::<GameVersion>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "GAME_VERSION".to_string(),
                    reason: e.to_string(),
                })?,
            None => GameVersion::default(),
        };

        Ok(Self {
            blizzard_client_id: set("BLIZZARD_CLIENT_ID"),
            blizzard_client_secret: set("BLIZZARD_CLIENT_SECRET"),
            database_url: optional("DATABASE_URL", DEFAULT_DATABASE_URL),
            token_cache_path: optional("TOKEN_CACHE_PATH", DEFAULT_TOKEN_CACHE_PATH).into(),
            game_version,
            eu_realms_path: optional("EU_REALMS_PATH", DEFAULT_EU_REALMS_PATH).into(),
            us_realms_path: optional("US_REALMS_PATH", DEFAULT_US_REALMS_PATH).into(),
            log_file: set("LOG_FILE").map(PathBuf::from),
        })
    }

    /// Client ID and secret of the Blizzard API application.
    ///
    /// # Returns
    /// - `Ok((&str, &str))` - Client ID and client secret
    /// - `Err(ConfigError::MissingEnvVar)` - Either variable is unset or empty
    pub fn blizzard_credentials(&self) -> Result<(&str, &str), ConfigError> {
        let client_id = self
            .blizzard_client_id
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("BLIZZARD_CLIENT_ID".to_string()))?;
        let client_secret = self
            .blizzard_client_secret
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("BLIZZARD_CLIENT_SECRET".to_string()))?;

        Ok((client_id, client_secret))
    }
}

/// Realm names to catalog for one region.
///
/// ```json
/// { "servers": [ { "name": "Firemaw", "houses": ["Alliance", "Horde"] } ] }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RealmWorklist {
    pub servers: Vec<RealmEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RealmEntry {
    pub name: String,
    /// Informational only, every house the API reports is catalogued
    #[serde(default)]
    pub houses: Vec<String>,
}

impl RealmWorklist {
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        tracing::info!("Reading realm worklist from {}", path.display());

        let contents = std::fs::read_to_string(path)?;

        serde_json::from_str(&contents).map_err(|source| Error::WorklistError {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn names(&self) -> Vec<String> {
        self.servers.iter().map(|s| s.name.clone()).collect()
    }
}
