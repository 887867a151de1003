//! Database insertion utilities.
//!
//! Rows are inserted directly through the entities, bypassing the repositories under test.
//! Auction rows reference a connected realm and a faction, both must exist first.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::TEST_AUCTION_HOUSE_IDS,
    error::TestError,
    fixtures::blizzard::{factory, BlizzardFixtures},
};

impl<'a> BlizzardFixtures<'a> {
    /// Insert a connected realm whose three house references point at the mock server.
    ///
    /// # Returns
    /// - `Ok(entity::connected_realm::Model)` - The inserted row
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_realm(
        &self,
        connected_realm_id: i64,
    ) -> Result<entity::connected_realm::Model, TestError> {
        let server_url = self.setup.server.url();
        let [alliance, horde, neutral] = TEST_AUCTION_HOUSE_IDS
            .map(|house| factory::auction_house_href(&server_url, connected_realm_id, house));

        Ok(
            entity::prelude::ConnectedRealm::insert(entity::connected_realm::ActiveModel {
                connected_realm_id: ActiveValue::Set(connected_realm_id),
                region: ActiveValue::Set(0),
                name: ActiveValue::Set("Firemaw".to_string()),
                timezone: ActiveValue::Set(Some("Europe/Paris".to_string())),
                alliance_href: ActiveValue::Set(Some(alliance)),
                horde_href: ActiveValue::Set(Some(horde)),
                neutral_href: ActiveValue::Set(Some(neutral)),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an item catalog row built from [`factory::mock_item`].
    pub async fn insert_mock_item(&self, item_id: i64) -> Result<entity::item::Model, TestError> {
        let item = factory::mock_item(item_id);

        Ok(
            entity::prelude::Item::insert(entity::item::ActiveModel {
                item_id: ActiveValue::Set(item.id),
                item_class_id: ActiveValue::Set(item.item_class.id),
                item_class: ActiveValue::Set(item.item_class.name),
                item_subclass_id: ActiveValue::Set(item.item_subclass.id),
                item_subclass: ActiveValue::Set(item.item_subclass.name),
                quality: ActiveValue::Set(item.quality.name),
                name: ActiveValue::Set(item.name),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert one auction row.
    ///
    /// # Arguments
    /// - `auction_id` - Blizzard listing ID
    /// - `item_id` - Listed item, not required to exist in the item table
    /// - `connected_realm_id` - Existing connected realm
    /// - `faction_id` - Seeded faction row (0, 1 or 2)
    /// - `buyout` - Buyout in copper
    /// - `timestamp` - Unix seconds of the ingestion run
    pub async fn insert_mock_auction(
        &self,
        auction_id: i64,
        item_id: i64,
        connected_realm_id: i64,
        faction_id: i32,
        buyout: i64,
        timestamp: i64,
    ) -> Result<entity::auction::Model, TestError> {
        Ok(
            entity::prelude::Auction::insert(entity::auction::ActiveModel {
                auction_id: ActiveValue::Set(auction_id),
                buyout: ActiveValue::Set(buyout),
                quantity: ActiveValue::Set(1),
                time_left: ActiveValue::Set("LONG".to_string()),
                timestamp: ActiveValue::Set(timestamp),
                item_id: ActiveValue::Set(item_id),
                connected_realm_id: ActiveValue::Set(connected_realm_id),
                faction_id: ActiveValue::Set(faction_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
