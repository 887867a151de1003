use blizzard::model::auction::Auction;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::faction::Faction;

static HOUR_BUCKET: &str = "(timestamp / 3600) * 3600";

/// Cheapest buyout and listed quantity of an item during one hour.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct PricePoint {
    /// Unix seconds at the start of the hour
    pub hour: i64,
    pub min_buyout: i64,
    pub total_quantity: i64,
}

pub struct AuctionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuctionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upsert one listing keyed by (auction_id, connected_realm_id, time_left)
    ///
    /// A listing already stored under the same key has its buyout, quantity, item, faction
    /// and timestamp replaced.
    pub async fn upsert(
        &self,
        listing: &Auction,
        connected_realm_id: i64,
        faction: Faction,
        timestamp: i64,
    ) -> Result<(), DbErr> {
        let model = entity::auction::ActiveModel {
            auction_id: ActiveValue::Set(listing.id),
            buyout: ActiveValue::Set(listing.buyout),
            quantity: ActiveValue::Set(listing.quantity),
            time_left: ActiveValue::Set(listing.time_left.as_str().to_string()),
            timestamp: ActiveValue::Set(timestamp),
            item_id: ActiveValue::Set(listing.item.id),
            connected_realm_id: ActiveValue::Set(connected_realm_id),
            faction_id: ActiveValue::Set(faction.id()),
            ..Default::default()
        };

        entity::prelude::Auction::insert(model)
            .on_conflict(
                OnConflict::columns([
                    entity::auction::Column::AuctionId,
                    entity::auction::Column::ConnectedRealmId,
                    entity::auction::Column::TimeLeft,
                ])
                .update_columns([
                    entity::auction::Column::Buyout,
                    entity::auction::Column::Quantity,
                    entity::auction::Column::Timestamp,
                    entity::auction::Column::ItemId,
                    entity::auction::Column::FactionId,
                ])
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Hourly cheapest buyout and total quantity of an item since `since` (unix seconds)
    ///
    /// Listings without a buyout are ignored.
    pub async fn price_history(
        &self,
        item_id: i64,
        faction: Faction,
        connected_realm_id: i64,
        since: i64,
    ) -> Result<Vec<PricePoint>, DbErr> {
        entity::prelude::Auction::find()
            .select_only()
            .column_as(Expr::cust(HOUR_BUCKET), "hour")
            .column_as(Expr::cust("MIN(buyout)"), "min_buyout")
            .column_as(Expr::cust("CAST(SUM(quantity) AS BIGINT)"), "total_quantity")
            .filter(entity::auction::Column::ItemId.eq(item_id))
            .filter(entity::auction::Column::FactionId.eq(faction.id()))
            .filter(entity::auction::Column::ConnectedRealmId.eq(connected_realm_id))
            .filter(entity::auction::Column::Buyout.gt(0))
            .filter(entity::auction::Column::Timestamp.gte(since))
            .group_by(Expr::cust(HOUR_BUCKET))
            .order_by_asc(Expr::cust(HOUR_BUCKET))
            .into_model::<PricePoint>()
            .all(self.db)
            .await
    }
}
