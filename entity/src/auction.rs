use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Index, IndexCreateStatement};

/// Name of the unique index over the listing key.
pub const LISTING_KEY_INDEX: &str = "idx-auction-listing_key";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub auction_id: i64,
    pub buyout: i64,
    pub quantity: i64,
    pub time_left: String,
    /// Unix seconds of the ingestion run that last wrote the row
    pub timestamp: i64,
    /// Logical reference to `item`, not enforced since items are backfilled later
    pub item_id: i64,
    pub connected_realm_id: i64,
    pub faction_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::connected_realm::Entity",
        from = "Column::ConnectedRealmId",
        to = "super::connected_realm::Column::ConnectedRealmId"
    )]
    ConnectedRealm,
    #[sea_orm(
        belongs_to = "super::faction::Entity",
        from = "Column::FactionId",
        to = "super::faction::Column::FactionId"
    )]
    Faction,
}

impl Related<super::connected_realm::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConnectedRealm.def()
    }
}

impl Related<super::faction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Unique index over (auction_id, connected_realm_id, time_left).
///
/// Upserts resolve conflicts against this index.
pub fn listing_key_index() -> IndexCreateStatement {
    Index::create()
        .name(LISTING_KEY_INDEX)
        .table(Entity)
        .col(Column::AuctionId)
        .col(Column::ConnectedRealmId)
        .col(Column::TimeLeft)
        .unique()
        .to_owned()
}
