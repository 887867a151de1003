//! Response models for the game data endpoints used by blackwater.
//!
//! Only the fields consumed downstream are modelled, unknown fields are ignored.

pub mod auction;
pub mod common;
pub mod item;
pub mod realm;
