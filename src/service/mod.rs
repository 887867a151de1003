pub mod auction;
pub mod classifier;
pub mod item;
pub mod pacer;
pub mod policy;
pub mod realm;
pub mod retry;
pub mod transaction;
