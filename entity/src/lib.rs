pub mod prelude;

pub mod auction;
pub mod connected_realm;
pub mod faction;
pub mod item;
