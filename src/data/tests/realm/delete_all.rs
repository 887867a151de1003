//! Tests for ConnectedRealmRepository::delete_all method.

use super::*;

/// Tests deleting every connected realm.
///
/// Verifies that all realm rows are removed and the number of deleted rows is returned.
///
/// Expected: Ok(2) with an empty catalog afterwards
#[tokio::test]
async fn deletes_every_realm() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .with_mock_realm(TEST_REALM_ID)
        .with_mock_realm(5000)
        .build()
        .await?;

    let repo = ConnectedRealmRepository::new(&test.db);
    let deleted = repo.delete_all().await?;

    assert_eq!(deleted, 2);
    assert!(repo.all().await?.is_empty());

    Ok(())
}

/// Tests deleting realms still referenced by auctions.
///
/// Verifies that the auction foreign key prevents orphaning stored listings.
///
/// Expected: Err with the realm left in place
#[tokio::test]
async fn fails_while_auctions_reference_realm() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .with_mock_realm(TEST_REALM_ID)
        .with_mock_auction(1, 25, TEST_REALM_ID, 0, 10_000, 1_700_000_000)
        .build()
        .await?;

    let repo = ConnectedRealmRepository::new(&test.db);
    let result = repo.delete_all().await;

    assert!(result.is_err());
    assert_eq!(repo.all().await?.len(), 1);

    Ok(())
}
