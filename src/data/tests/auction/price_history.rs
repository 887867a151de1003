//! Tests for AuctionRepository::price_history method.

use crate::model::faction::Faction;

use super::*;

/// Start of the hour containing 1_700_000_000
const HOUR: i64 = 1_699_999_200;

/// Tests grouping listings into hourly price points.
///
/// Verifies that listings of the requested item, faction and realm are grouped by the hour
/// of their timestamp with the cheapest buyout and the listed quantity, ignoring bid-only
/// listings, other factions, other items and listings older than `since`.
///
/// Expected: Ok with two ascending price points
#[tokio::test]
async fn groups_listings_by_hour() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .with_mock_realm(TEST_REALM_ID)
        .with_mock_auction(1, 25, TEST_REALM_ID, 0, 500, HOUR + 10)
        .with_mock_auction(2, 25, TEST_REALM_ID, 0, 300, HOUR + 20)
        .with_mock_auction(3, 25, TEST_REALM_ID, 0, 0, HOUR + 30)
        .with_mock_auction(4, 25, TEST_REALM_ID, 0, 800, HOUR + 3605)
        .with_mock_auction(5, 25, TEST_REALM_ID, 1, 100, HOUR + 15)
        .with_mock_auction(6, 99, TEST_REALM_ID, 0, 50, HOUR + 15)
        .with_mock_auction(7, 25, TEST_REALM_ID, 0, 1, HOUR - 30 * 86_400)
        .build()
        .await?;

    let repo = AuctionRepository::new(&test.db);
    let history = repo
        .price_history(25, Faction::Alliance, TEST_REALM_ID, HOUR - 3600)
        .await?;

    assert_eq!(
        history,
        vec![
            PricePoint {
                hour: HOUR,
                min_buyout: 300,
                total_quantity: 2,
            },
            PricePoint {
                hour: HOUR + 3600,
                min_buyout: 800,
                total_quantity: 1,
            },
        ]
    );

    Ok(())
}

/// Tests the history of an item without listings.
///
/// Expected: Ok with no price points
#[tokio::test]
async fn empty_without_listings() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .with_mock_realm(TEST_REALM_ID)
        .build()
        .await?;

    let repo = AuctionRepository::new(&test.db);
    let history = repo
        .price_history(25, Faction::Horde, TEST_REALM_ID, 0)
        .await?;

    assert!(history.is_empty());

    Ok(())
}
