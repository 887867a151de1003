//! Client for the Blizzard World of Warcraft game data API.
//!
//! Provides an authenticated HTTP client with transparent OAuth2 client credential handling,
//! typed response models for the connected realm, auction house and item endpoints, and an
//! error type distinguishing authentication, transport and decoding failures.
//!
//! ```no_run
//! # async fn example() -> Result<(), blizzard::Error> {
//! let client = blizzard::Client::builder()
//!     .client_id("client_id")
//!     .client_secret("client_secret")
//!     .region(blizzard::Region::Eu, "en_GB")
//!     .build()?;
//!
//! let search = client.realm().search("Firemaw").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod model;
pub mod region;
pub mod token;

pub use client::{Client, ClientBuilder};
pub use config::Config;
pub use error::Error;
pub use region::{GameVersion, Namespace, Region};
pub use token::{CachedToken, Clock, SystemClock, TokenProvider};

pub use reqwest::StatusCode;
