//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! All configured operations are queued and executed during the final `build()` call.

use blizzard::model::auction::AuctionSnapshot;
use mockito::Mock;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ActiveValue, EntityTrait, Schema,
};

use crate::{error::TestError, fixtures::blizzard::factory, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// fixture rows, and mock Blizzard endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables and indexes to create
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
    seed_factions: bool,

    // Database fixtures to insert
    realms: Vec<i64>,
    items: Vec<i64>,
    auctions: Vec<(i64, i64, i64, i32, i64, i64)>, // (auction_id, item_id, realm_id, faction_id, buyout, timestamp)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    realm_search_endpoints: Vec<(String, Vec<i64>, usize)>,
    connected_realm_endpoints: Vec<(i64, usize)>,
    auction_index_endpoints: Vec<(i64, usize)>,
    auction_snapshot_endpoints: Vec<(i64, i64, AuctionSnapshot, usize)>,
    item_endpoints: Vec<(i64, usize)>,
    item_error_endpoints: Vec<(i64, usize, usize)>, // (item_id, status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            seed_factions: false,
            realms: Vec::new(),
            items: Vec::new(),
            auctions: Vec::new(),
            mock_builders: Vec::new(),
            realm_search_endpoints: Vec::new(),
            connected_realm_endpoints: Vec::new(),
            auction_index_endpoints: Vec::new(),
            auction_snapshot_endpoints: Vec::new(),
            item_endpoints: Vec::new(),
            item_error_endpoints: Vec::new(),
        }
    }

    /// Add every table of the ingestion pipeline.
    ///
    /// Creates faction, connected_realm, item and auction, the unique listing key index, and
    /// seeds the three faction rows.
    pub fn with_auction_tables(mut self) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.extend(vec![
            schema.create_table_from_entity(entity::prelude::Faction),
            schema.create_table_from_entity(entity::prelude::ConnectedRealm),
            schema.create_table_from_entity(entity::prelude::Item),
            schema.create_table_from_entity(entity::prelude::Auction),
        ]);
        self.indexes.push(entity::auction::listing_key_index());
        self.seed_factions = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use blackwater_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), blackwater_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Item)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a connected realm whose house references point at the mock server.
    pub fn with_mock_realm(mut self, connected_realm_id: i64) -> Self {
        self.realms.push(connected_realm_id);
        self
    }

    /// Insert an item catalog row.
    pub fn with_mock_item(mut self, item_id: i64) -> Self {
        self.items.push(item_id);
        self
    }

    /// Insert an auction row, its realm must be added with `with_mock_realm`.
    pub fn with_mock_auction(
        mut self,
        auction_id: i64,
        item_id: i64,
        connected_realm_id: i64,
        faction_id: i32,
        buyout: i64,
        timestamp: i64,
    ) -> Self {
        self.auctions.push((
            auction_id,
            item_id,
            connected_realm_id,
            faction_id,
            buyout,
            timestamp,
        ));
        self
    }

    /// Add a mock connected realm search for `name` returning `connected_realm_ids`.
    pub fn with_realm_search_endpoint(
        mut self,
        name: &str,
        connected_realm_ids: Vec<i64>,
        expected_requests: usize,
    ) -> Self {
        self.realm_search_endpoints
            .push((name.to_string(), connected_realm_ids, expected_requests));
        self
    }

    /// Add a mock connected realm detail endpoint.
    pub fn with_connected_realm_endpoint(
        mut self,
        connected_realm_id: i64,
        expected_requests: usize,
    ) -> Self {
        self.connected_realm_endpoints
            .push((connected_realm_id, expected_requests));
        self
    }

    /// Add a mock auction house index endpoint.
    pub fn with_auction_index_endpoint(
        mut self,
        connected_realm_id: i64,
        expected_requests: usize,
    ) -> Self {
        self.auction_index_endpoints
            .push((connected_realm_id, expected_requests));
        self
    }

    /// Add a mock auction house snapshot endpoint.
    pub fn with_auction_snapshot_endpoint(
        mut self,
        connected_realm_id: i64,
        house_id: i64,
        snapshot: AuctionSnapshot,
        expected_requests: usize,
    ) -> Self {
        self.auction_snapshot_endpoints.push((
            connected_realm_id,
            house_id,
            snapshot,
            expected_requests,
        ));
        self
    }

    /// Add a mock item endpoint serving [`factory::mock_item`].
    pub fn with_item_endpoint(mut self, item_id: i64, expected_requests: usize) -> Self {
        self.item_endpoints.push((item_id, expected_requests));
        self
    }

    /// Add a mock item endpoint failing with `status`.
    ///
    /// Created before the endpoints of [`Self::with_item_endpoint`], so combining both for one
    /// item serves the failures first.
    pub fn with_item_error_endpoint(
        mut self,
        item_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.item_error_endpoints
            .push((item_id, status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Use this for endpoints not covered by helper methods.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables and indexes, seeds factions
    /// 2. Inserts database fixtures (realms, items, auctions)
    /// 3. Creates mock HTTP endpoints (custom endpoints first, failing item endpoints before
    ///    successful ones)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::BlizzardError)` - Mock client initialization failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        setup.with_tables(self.tables, self.indexes).await?;

        if self.seed_factions {
            let factions = [(0, "Alliance"), (1, "Horde"), (2, "Neutral")].map(|(id, name)| {
                entity::faction::ActiveModel {
                    faction_id: ActiveValue::Set(id),
                    faction_name: ActiveValue::Set(name.to_string()),
                }
            });

            entity::prelude::Faction::insert_many(factions)
                .exec_without_returning(&setup.db)
                .await?;
        }

        // 2. Insert database fixtures
        for connected_realm_id in self.realms {
            setup.blizzard().insert_mock_realm(connected_realm_id).await?;
        }

        for item_id in self.items {
            setup.blizzard().insert_mock_item(item_id).await?;
        }

        for (auction_id, item_id, realm_id, faction_id, buyout, timestamp) in self.auctions {
            setup
                .blizzard()
                .insert_mock_auction(auction_id, item_id, realm_id, faction_id, buyout, timestamp)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can queue several mocks for one path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (name, ids, expected) in self.realm_search_endpoints {
            mocks.push(
                setup
                    .blizzard()
                    .create_realm_search_endpoint(&name, &ids, expected),
            );
        }

        for (realm_id, expected) in self.connected_realm_endpoints {
            mocks.push(
                setup
                    .blizzard()
                    .create_connected_realm_endpoint(realm_id, expected),
            );
        }

        for (realm_id, expected) in self.auction_index_endpoints {
            mocks.push(
                setup
                    .blizzard()
                    .create_auction_index_endpoint(realm_id, expected),
            );
        }

        for (realm_id, house_id, snapshot, expected) in self.auction_snapshot_endpoints {
            mocks.push(setup.blizzard().create_auction_snapshot_endpoint(
                realm_id, house_id, &snapshot, expected,
            ));
        }

        // Failing item endpoints first so a success mock for the same item answers the retry
        for (item_id, status, expected) in self.item_error_endpoints {
            mocks.push(
                setup
                    .blizzard()
                    .create_item_error_endpoint(item_id, status, expected),
            );
        }

        for (item_id, expected) in self.item_endpoints {
            mocks.push(
                setup
                    .blizzard()
                    .create_item_endpoint(factory::mock_item(item_id), expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
