pub use super::auction::Entity as Auction;
pub use super::connected_realm::Entity as ConnectedRealm;
pub use super::faction::Entity as Faction;
pub use super::item::Entity as Item;
