//! Tests for ItemRepository::insert method.

use super::*;

/// Tests inserting a new item.
///
/// Verifies that class, subclass, quality and name are stored from the API model.
///
/// Expected: Ok with the item row present
#[tokio::test]
async fn inserts_new_item() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auction_tables().build().await?;
    let item = factory::mock_item(25);

    let repo = ItemRepository::new(&test.db);
    let result = repo.insert(25, &item).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let stored = repo.find_by_id(25).await?.expect("item not stored");
    assert_eq!(stored.name, item.name);
    assert_eq!(stored.item_class_id, 2);
    assert_eq!(stored.item_class, "Weapon");
    assert_eq!(stored.item_subclass, "Sword");
    assert_eq!(stored.quality, "Common");

    Ok(())
}

/// Tests inserting an item that is already catalogued.
///
/// Verifies that the stored row is never overwritten.
///
/// Expected: Ok with the original name kept
#[tokio::test]
async fn keeps_existing_item() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_auction_tables()
        .with_mock_item(25)
        .build()
        .await?;
    let mut item = factory::mock_item(25);
    item.name = "Renamed".to_string();

    let repo = ItemRepository::new(&test.db);
    let result = repo.insert(25, &item).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let stored = repo.find_by_id(25).await?.expect("item missing");
    assert_eq!(stored.name, factory::mock_item(25).name);

    Ok(())
}

/// Tests inserting an item whose response carries a different ID.
///
/// Verifies that the row is keyed by the requested ID so the worklist entry is resolved.
///
/// Expected: Ok with a row for the requested ID only
#[tokio::test]
async fn keys_item_by_requested_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auction_tables().build().await?;
    let item = factory::mock_item(9999);

    let repo = ItemRepository::new(&test.db);
    let result = repo.insert(25, &item).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let stored = repo.find_by_id(25).await?.expect("item not stored");
    assert_eq!(stored.name, item.name);
    assert!(repo.find_by_id(9999).await?.is_none());

    Ok(())
}
