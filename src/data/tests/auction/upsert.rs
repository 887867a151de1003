//! Tests for AuctionRepository::upsert method.

use blizzard::model::auction::TimeLeft;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::model::faction::Faction;

use super::*;

/// Tests upserting a new listing.
///
/// Verifies that every listing field, the faction and the run timestamp are stored.
///
/// Expected: Ok with one auction row
#[tokio::test]
async fn inserts_new_listing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .with_mock_realm(TEST_REALM_ID)
        .build()
        .await?;
    let listing = factory::mock_auction(1001, 25, 12_345, 4);

    let repo = AuctionRepository::new(&test.db);
    let result = repo
        .upsert(&listing, TEST_REALM_ID, Faction::Horde, 1_700_000_000)
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let rows = entity::prelude::Auction::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].auction_id, 1001);
    assert_eq!(rows[0].item_id, 25);
    assert_eq!(rows[0].buyout, 12_345);
    assert_eq!(rows[0].quantity, 4);
    assert_eq!(rows[0].time_left, "LONG");
    assert_eq!(rows[0].faction_id, 1);
    assert_eq!(rows[0].timestamp, 1_700_000_000);

    Ok(())
}

/// Tests upserting a listing with an existing key.
///
/// Verifies that a listing with the same auction ID, realm and remaining time replaces the
/// stored values instead of adding a row.
///
/// Expected: Ok with one row holding the latest values
#[tokio::test]
async fn replaces_listing_with_same_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .with_mock_realm(TEST_REALM_ID)
        .build()
        .await?;

    let repo = AuctionRepository::new(&test.db);
    repo.upsert(
        &factory::mock_auction(1001, 25, 100, 1),
        TEST_REALM_ID,
        Faction::Alliance,
        1_700_000_000,
    )
    .await?;
    repo.upsert(
        &factory::mock_auction(1001, 25, 90, 3),
        TEST_REALM_ID,
        Faction::Alliance,
        1_700_003_600,
    )
    .await?;

    let rows = entity::prelude::Auction::find().all(&test.db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].buyout, 90);
    assert_eq!(rows[0].quantity, 3);
    assert_eq!(rows[0].timestamp, 1_700_003_600);

    Ok(())
}

/// Tests upserting a listing whose remaining time changed.
///
/// Verifies that the remaining-time category is part of the listing key.
///
/// Expected: Ok with two rows for the same auction ID
#[tokio::test]
async fn remaining_time_is_part_of_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .with_mock_realm(TEST_REALM_ID)
        .build()
        .await?;
    let long = factory::mock_auction(1001, 25, 100, 1);
    let mut short = long.clone();
    short.time_left = TimeLeft::Short;

    let repo = AuctionRepository::new(&test.db);
    repo.upsert(&long, TEST_REALM_ID, Faction::Alliance, 1_700_000_000)
        .await?;
    repo.upsert(&short, TEST_REALM_ID, Faction::Alliance, 1_700_000_000)
        .await?;

    let count = entity::prelude::Auction::find().count(&test.db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests upserting a listing of an uncatalogued realm.
///
/// Expected: Err from the connected realm foreign key
#[tokio::test]
async fn fails_for_unknown_realm() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auction_tables().build().await?;

    let repo = AuctionRepository::new(&test.db);
    let result = repo
        .upsert(
            &factory::mock_auction(1001, 25, 100, 1),
            TEST_REALM_ID,
            Faction::Alliance,
            1_700_000_000,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests upserting once the synthetic key has grown past the 32-bit range.
///
/// Verifies that rows keep being added and replaced after the row ID passes `i32::MAX`.
///
/// Expected: Ok with the new row numbered above the existing one
#[tokio::test]
async fn upserts_beyond_32_bit_row_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .with_mock_realm(TEST_REALM_ID)
        .build()
        .await?;
    let high_id = i64::from(i32::MAX) + 1;
    entity::prelude::Auction::insert(entity::auction::ActiveModel {
        id: sea_orm::ActiveValue::Set(high_id),
        auction_id: sea_orm::ActiveValue::Set(1),
        buyout: sea_orm::ActiveValue::Set(100),
        quantity: sea_orm::ActiveValue::Set(1),
        time_left: sea_orm::ActiveValue::Set("LONG".to_string()),
        timestamp: sea_orm::ActiveValue::Set(1_700_000_000),
        item_id: sea_orm::ActiveValue::Set(25),
        connected_realm_id: sea_orm::ActiveValue::Set(TEST_REALM_ID),
        faction_id: sea_orm::ActiveValue::Set(0),
    })
    .exec_without_returning(&test.db)
    .await?;

    let repo = AuctionRepository::new(&test.db);
    repo.upsert(
        &factory::mock_auction(1, 25, 900, 1),
        TEST_REALM_ID,
        Faction::Alliance,
        1_700_003_600,
    )
    .await?;
    repo.upsert(
        &factory::mock_auction(2, 25, 500, 1),
        TEST_REALM_ID,
        Faction::Alliance,
        1_700_003_600,
    )
    .await?;

    let rows = entity::prelude::Auction::find().all(&test.db).await?;
    assert_eq!(rows.len(), 2);
    let replaced = rows.iter().find(|r| r.auction_id == 1).expect("listing 1 missing");
    let added = rows.iter().find(|r| r.auction_id == 2).expect("listing 2 missing");
    assert_eq!(replaced.id, high_id);
    assert_eq!(replaced.buyout, 900);
    assert!(added.id > high_id);

    Ok(())
}
