//! Test fixture modules for database and HTTP mock creation.
//!
//! - `blizzard` - connected realms, auction houses, listings and items, both as API
//!   payloads served by the mock server and as database rows

pub mod blizzard;
