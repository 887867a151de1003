//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context holds an
//! in-memory SQLite database, a mock Blizzard API server and a Blizzard client pointed at it.

use chrono::{TimeDelta, Utc};
use mockito::{Mock, Server, ServerGuard};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::{
    constant::{TEST_ACCESS_TOKEN, TEST_CLIENT_ID, TEST_CLIENT_SECRET, TEST_USER_AGENT},
    error::TestError,
};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to:
/// - Database connection to an in-memory SQLite database
/// - Blizzard client configured to use the mock server
/// - Mock server for ad-hoc endpoints
/// - Collection of mock endpoints for assertion
///
/// ```ignore
/// let mut test = TestBuilder::new().with_auction_tables().build().await?;
///
/// test.blizzard().insert_mock_realm(4466).await?;
/// let endpoint = test.blizzard().create_item_endpoint(factory::mock_item(25), 1);
///
/// // ... exercise a service with &test.db and &test.client
///
/// endpoint.assert();
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Blizzard client configured to use mock server
    pub client: blizzard::Client,

    /// Mock HTTP server for Blizzard endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// The client carries a bearer token valid for one hour, requests never reach the token
    /// endpoint unless a test replaces the client.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::BlizzardError)` - Client or config builder failed
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let mock_server_url = mock_server.url();

        let config = blizzard::Config::builder()
            .api_url(&mock_server_url)
            .token_url(&format!("{}/token", mock_server_url))
            .build()?;

        let client = blizzard::Client::builder()
            .config(config)
            .user_agent(TEST_USER_AGENT)
            .client_id(TEST_CLIENT_ID)
            .client_secret(TEST_CLIENT_SECRET)
            .token(blizzard::CachedToken {
                access_token: TEST_ACCESS_TOKEN.to_string(),
                expires_at: Utc::now() + TimeDelta::hours(1),
            })
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            server: mock_server,
            db,
            client,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock server, used to build resource references.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Create database tables and indexes from schema statements.
    pub(crate) async fn with_tables(
        &self,
        tables: Vec<TableCreateStatement>,
        indexes: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in tables {
            self.db.execute(&stmt).await?;
        }

        for stmt in indexes {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
