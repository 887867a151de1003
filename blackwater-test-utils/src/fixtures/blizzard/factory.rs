//! Blizzard API payload factories.
//!
//! Every factory returns a model populated with fixed test values. Resource references are
//! built from the mock server URL so the client can follow them.

use blizzard::model::{
    auction::{Auction, AuctionHouseIndex, AuctionHouseRef, AuctionSnapshot, ItemRef, TimeLeft},
    common::{Link, SearchResponse, SearchResult},
    item::{Item, ItemClassRef, Quality},
    realm::{ConnectedRealm, ConnectedRealmRef, Realm},
};

use crate::constant::TEST_AUCTION_HOUSE_IDS;

/// Resource reference of a connected realm's auction house index.
pub fn auction_index_href(server_url: &str, connected_realm_id: i64) -> String {
    format!(
        "{}/data/wow/connected-realm/{}/auctions/index?namespace=dynamic-classic1x-eu",
        server_url, connected_realm_id
    )
}

/// Resource reference of one auction house snapshot.
pub fn auction_house_href(server_url: &str, connected_realm_id: i64, house_id: i64) -> String {
    format!(
        "{}/data/wow/connected-realm/{}/auctions/{}?namespace=dynamic-classic1x-eu",
        server_url, connected_realm_id, house_id
    )
}

/// Search response listing the given connected realm IDs.
pub fn mock_realm_search(connected_realm_ids: &[i64]) -> SearchResponse<ConnectedRealmRef> {
    SearchResponse {
        results: connected_realm_ids
            .iter()
            .map(|id| SearchResult {
                data: ConnectedRealmRef { id: *id },
            })
            .collect(),
    }
}

/// Connected realm detail with a single member realm in `Europe/Paris`.
pub fn mock_connected_realm(server_url: &str, connected_realm_id: i64) -> ConnectedRealm {
    ConnectedRealm {
        id: connected_realm_id,
        realms: vec![Realm {
            id: connected_realm_id,
            name: "Firemaw".into(),
            timezone: Some("Europe/Paris".to_string()),
        }],
        auctions: Link {
            href: auction_index_href(server_url, connected_realm_id),
        },
    }
}

/// Auction house index with the Alliance, Horde and Blackwater houses.
pub fn mock_auction_house_index(server_url: &str, connected_realm_id: i64) -> AuctionHouseIndex {
    let names = [
        "Alliance Auction House",
        "Horde Auction House",
        "Blackwater Auction House",
    ];

    AuctionHouseIndex {
        auctions: TEST_AUCTION_HOUSE_IDS
            .iter()
            .zip(names)
            .map(|(id, name)| AuctionHouseRef {
                key: Link {
                    href: auction_house_href(server_url, connected_realm_id, *id),
                },
                name: name.into(),
                id: *id,
            })
            .collect(),
    }
}

/// One listing with a fixed remaining-time category.
pub fn mock_auction(auction_id: i64, item_id: i64, buyout: i64, quantity: i64) -> Auction {
    Auction {
        id: auction_id,
        item: ItemRef { id: item_id },
        buyout,
        quantity,
        time_left: TimeLeft::Long,
    }
}

/// Snapshot of `count` listings with IDs `1..=count`, each listing item `25` for 1g.
pub fn mock_auction_snapshot(count: i64) -> AuctionSnapshot {
    AuctionSnapshot {
        auctions: (1..=count).map(|id| mock_auction(id, 25, 10_000, 1)).collect(),
    }
}

/// Item detail of a common one-handed sword.
pub fn mock_item(item_id: i64) -> Item {
    Item {
        id: item_id,
        name: format!("Worn Shortsword {}", item_id),
        quality: Quality {
            kind: "COMMON".to_string(),
            name: "Common".to_string(),
        },
        item_class: ItemClassRef {
            id: 2,
            name: "Weapon".to_string(),
        },
        item_subclass: ItemClassRef {
            id: 7,
            name: "Sword".to_string(),
        },
        level: 2,
        required_level: 1,
        sell_price: 7,
    }
}
