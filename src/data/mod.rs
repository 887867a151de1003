//! Database repositories.
//!
//! One repository per table. Repositories are generic over [`sea_orm::ConnectionTrait`] so the
//! same queries run against the connection or inside a batch transaction.

pub mod auction;
pub mod faction;
pub mod item;
pub mod realm;

#[cfg(test)]
mod tests;
