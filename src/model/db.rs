//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used throughout the services.

/// Connected realm catalog row.
///
/// # Fields (from `entity::connected_realm::Model`)
/// - `connected_realm_id` - Primary key, Blizzard connected realm ID
/// - `region` - Region code (0 = EU, 1 = US)
/// - `name` - Realm name as listed in the worklist
/// - `timezone` - Timezone reported by the connected realm detail
/// - `alliance_href` / `horde_href` / `neutral_href` - Auction house snapshot references
pub type ConnectedRealmModel = entity::connected_realm::Model;

/// Auction listing, one row per (auction_id, connected_realm_id, time_left).
pub type AuctionModel = entity::auction::Model;

/// Item catalog row, written once per item.
pub type ItemModel = entity::item::Model;

/// Static faction lookup row.
pub type FactionModel = entity::faction::Model;
