//! Tests for AuctionService::persist_snapshot method.
//!
//! This module verifies batched listing writes, including the counts reported when a write
//! fails part way through a snapshot.

use blackwater::{error::Error, model::faction::Faction, service::auction::AuctionService};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};

use super::*;

/// Tests persisting a snapshot spanning several batches.
///
/// Verifies that listings are committed across batch boundaries and the report counts every
/// listing as both parsed and committed.
///
/// Expected: Ok with 5 parsed and 5 committed listings
#[tokio::test]
async fn commits_every_batch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .with_mock_realm(TEST_REALM_ID)
        .build()
        .await?;
    let policy = IngestPolicy {
        auction_batch_size: 2,
        ..test_policy()
    };
    let snapshot = factory::mock_auction_snapshot(5);

    let service = AuctionService::new(&test.db, &test.client, &policy);
    let result = service
        .persist_snapshot(
            TEST_REALM_ID,
            Faction::Alliance,
            1_700_000_000,
            &snapshot.auctions,
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let report = result.unwrap();
    assert_eq!(report.parsed, 5);
    assert_eq!(report.committed, 5);
    assert_eq!(entity::prelude::Auction::find().count(&test.db).await?, 5);

    Ok(())
}

/// Tests a write failure in the third batch of a 25,000 listing snapshot.
///
/// Verifies that with a batch size of 10,000 and the write of listing 22,000 failing, the
/// two completed batches stay committed while the open third batch is rolled back.
///
/// Expected: Err(IngestionAborted) with 25,000 parsed, 20,000 committed and 20,000 rows stored
#[tokio::test]
async fn rolls_back_open_batch_on_write_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .with_mock_realm(TEST_REALM_ID)
        .build()
        .await?;
    test.db
        .execute_unprepared(
            "CREATE TRIGGER fail_listing BEFORE INSERT ON auction \
             WHEN NEW.auction_id = 22000 \
             BEGIN SELECT RAISE(ABORT, 'listing rejected'); END;",
        )
        .await?;
    let policy = IngestPolicy {
        auction_batch_size: 10_000,
        ..test_policy()
    };
    let snapshot = factory::mock_auction_snapshot(25_000);

    let service = AuctionService::new(&test.db, &test.client, &policy);
    let result = service
        .persist_snapshot(
            TEST_REALM_ID,
            Faction::Horde,
            1_700_000_000,
            &snapshot.auctions,
        )
        .await;

    assert!(
        matches!(
            result,
            Err(Error::IngestionAborted {
                parsed: 25_000,
                committed: 20_000,
                ..
            })
        ),
        "{:?}",
        result
    );
    assert_eq!(
        entity::prelude::Auction::find().count(&test.db).await?,
        20_000
    );

    Ok(())
}

/// Tests persisting an empty snapshot.
///
/// Expected: Ok with nothing parsed or committed
#[tokio::test]
async fn empty_snapshot() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .with_mock_realm(TEST_REALM_ID)
        .build()
        .await?;
    let policy = test_policy();

    let service = AuctionService::new(&test.db, &test.client, &policy);
    let report = service
        .persist_snapshot(TEST_REALM_ID, Faction::Neutral, 1_700_000_000, &[])
        .await?;

    assert_eq!(report.parsed, 0);
    assert_eq!(report.committed, 0);

    Ok(())
}
