use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, data::faction::FactionRepository, error::Error};

/// Install the global tracing subscriber
///
/// Filters with `RUST_LOG`, defaulting to `info`. Output is appended to `LOG_FILE` when set,
/// otherwise written to stderr.
pub fn init_tracing(config: &Config) -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|e| Error::InternalError(format!("Failed to install tracing: {}", e)))
}

/// Build the Blizzard API client with the configured credentials
pub fn build_blizzard_client(config: &Config) -> Result<blizzard::Client, Error> {
    let (client_id, client_secret) = config.blizzard_credentials()?;

    let client = blizzard::Client::builder()
        .client_id(client_id)
        .client_secret(client_secret)
        .game_version(config.game_version)
        .token_cache_path(&config.token_cache_path)
        .build()?;

    Ok(client)
}

/// Connect to the database, run migrations and seed the faction table
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    if let Some(dir) = sqlite_path(&config.database_url).and_then(|p| p.parent().map(PathBuf::from))
    {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(&dir)?;
        }
    }

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;
    FactionRepository::new(&db).seed().await?;

    tracing::info!("Connected to database");

    Ok(db)
}

/// File path of a SQLite database URL, `None` for other backends and in-memory databases
fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url.strip_prefix("sqlite:")?;
    let rest = rest.trim_start_matches("//");
    let path = rest.split('?').next()?;

    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }

    Some(PathBuf::from(path))
}
