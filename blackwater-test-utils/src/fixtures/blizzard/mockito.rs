//! Blizzard HTTP mock endpoint creation utilities.
//!
//! Each method registers a mock with the test server that verifies it was called exactly
//! `expected_requests` times.

use blizzard::model::{auction::AuctionSnapshot, item::Item};
use mockito::{Matcher, Mock};

use crate::fixtures::blizzard::{factory, BlizzardFixtures};

impl<'a> BlizzardFixtures<'a> {
    /// Create a mock connected realm search for `name` in the `en_GB` locale.
    ///
    /// Responds with one result per ID of `connected_realm_ids`, an empty slice produces a
    /// zero-result search.
    pub fn create_realm_search_endpoint(
        &mut self,
        name: &str,
        connected_realm_ids: &[i64],
        expected_requests: usize,
    ) -> Mock {
        let body = factory::mock_realm_search(connected_realm_ids);

        self.setup
            .server
            .mock("GET", "/data/wow/search/connected-realm")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("status.type".into(), "UP".into()),
                Matcher::UrlEncoded("realms.name.en_GB".into(), name.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&body).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/data/wow/connected-realm/{id}`.
    pub fn create_connected_realm_endpoint(
        &mut self,
        connected_realm_id: i64,
        expected_requests: usize,
    ) -> Mock {
        let body = factory::mock_connected_realm(&self.setup.server.url(), connected_realm_id);
        let url = format!("/data/wow/connected-realm/{}", connected_realm_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&body).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock auction house index listing the three faction houses.
    pub fn create_auction_index_endpoint(
        &mut self,
        connected_realm_id: i64,
        expected_requests: usize,
    ) -> Mock {
        let body = factory::mock_auction_house_index(&self.setup.server.url(), connected_realm_id);
        let url = format!("/data/wow/connected-realm/{}/auctions/index", connected_realm_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&body).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock snapshot of auction house `house_id`.
    pub fn create_auction_snapshot_endpoint(
        &mut self,
        connected_realm_id: i64,
        house_id: i64,
        snapshot: &AuctionSnapshot,
        expected_requests: usize,
    ) -> Mock {
        let url = format!(
            "/data/wow/connected-realm/{}/auctions/{}",
            connected_realm_id, house_id
        );

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(snapshot).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/data/wow/item/{id}`.
    pub fn create_item_endpoint(&mut self, item: Item, expected_requests: usize) -> Mock {
        let url = format!("/data/wow/item/{}", item.id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&item).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock item endpoint failing with `status`.
    pub fn create_item_error_endpoint(
        &mut self,
        item_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/data/wow/item/{}", item_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code":500,"type":"BLZWEBAPI00000500","detail":"Internal server error"}"#)
            .expect(expected_requests)
            .create()
    }
}
