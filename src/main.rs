use std::process::ExitCode;

use blackwater::{
    config::{Config, RealmWorklist},
    data::{auction::AuctionRepository, realm::ConnectedRealmRepository},
    error::Error,
    model::faction::Faction,
    service::{
        auction::AuctionService, item::ItemService, policy::IngestPolicy, realm::RealmService,
    },
    startup,
    util::currency::format_copper,
};
use blizzard::Region;
use chrono::{DateTime, TimeDelta, Utc};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blackwater", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the database schema and seed the faction table
    Init,
    /// Refresh the connected realm catalog from the EU and US realm worklists
    Update,
    /// Ingest auction house snapshots of every catalogued realm
    Auctions,
    /// Fetch metadata for items referenced by auctions but not yet catalogued
    Items,
    /// Delete every catalogued connected realm
    ResetRealms,
    /// Print the hourly price history of an item
    History {
        /// Blizzard item ID
        #[arg(long)]
        item: i64,
        /// alliance, horde or neutral
        #[arg(long, value_parser = parse_faction)]
        faction: Faction,
        /// Connected realm ID
        #[arg(long)]
        realm: i64,
        /// Look-back window in days
        #[arg(long, default_value_t = 7)]
        days: i64,
    },
}

fn parse_faction(value: &str) -> Result<Faction, String> {
    value.parse().map_err(|e: Error| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = startup::init_tracing(&config) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &Config) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;
    let policy = IngestPolicy::default();

    match command {
        Command::Init => {
            tracing::info!("Database initialised");
        }
        Command::Update => {
            let client = startup::build_blizzard_client(config)?;
            let regions = [
                (Region::Eu, "en_GB", &config.eu_realms_path),
                (Region::Us, "en_US", &config.us_realms_path),
            ];

            for (region, locale, path) in regions {
                let names = match RealmWorklist::from_file(path) {
                    Ok(worklist) => worklist.names(),
                    Err(e) => {
                        tracing::error!("Skipping {} realm catalog: {}", region, e);
                        continue;
                    }
                };
                let client = client.with_region(region, locale);

                RealmService::new(&db, &client, &policy)
                    .update_realms(&names)
                    .await?;
            }
        }
        Command::Auctions => {
            let client = startup::build_blizzard_client(config)?;
            AuctionService::new(&db, &client, &policy)
                .ingest_all()
                .await?;
        }
        Command::Items => {
            let client = startup::build_blizzard_client(config)?;
            ItemService::new(&db, &client, &policy)
                .cache_missing_items()
                .await?;
        }
        Command::ResetRealms => {
            let deleted = ConnectedRealmRepository::new(&db).delete_all().await?;
            tracing::info!("Deleted {} connected realms", deleted);
        }
        Command::History {
            item,
            faction,
            realm,
            days,
        } => {
            let since = (Utc::now() - TimeDelta::days(days)).timestamp();
            let history = AuctionRepository::new(&db)
                .price_history(item, faction, realm, since)
                .await?;

            if history.is_empty() {
                println!("No priced listings of item {} in the last {} days", item, days);
            }

            for point in history {
                let hour = DateTime::from_timestamp(point.hour, 0)
                    .map(|t| t.format("%Y-%m-%d %H:00").to_string())
                    .unwrap_or_else(|| point.hour.to_string());

                println!(
                    "{}  {:>16}  {:>6}",
                    hour,
                    format_copper(point.min_buyout),
                    point.total_quantity
                );
            }
        }
    }

    Ok(())
}
