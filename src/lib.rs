//! Ingestion pipeline for World of Warcraft Classic auction house data.
//!
//! Three sequential passes share one relational store:
//! - [`service::realm`] resolves realm names into connected realm catalog rows
//! - [`service::auction`] upserts every auction house snapshot of every catalogued realm
//! - [`service::item`] backfills item metadata referenced by stored auctions

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
