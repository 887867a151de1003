//! Tests for ConnectedRealmRepository::upsert method.

use crate::model::db::ConnectedRealmModel;

use super::*;

fn realm(href_suffix: &str) -> ConnectedRealmModel {
    ConnectedRealmModel {
        connected_realm_id: TEST_REALM_ID,
        region: 0,
        name: "Firemaw".to_string(),
        timezone: Some("Europe/Paris".to_string()),
        alliance_href: Some(format!("https://eu.api.blizzard.com/2{}", href_suffix)),
        horde_href: Some(format!("https://eu.api.blizzard.com/6{}", href_suffix)),
        neutral_href: None,
    }
}

/// Tests upserting a new connected realm.
///
/// Verifies that the repository inserts the realm and returns the stored row.
///
/// Expected: Ok with the stored realm
#[tokio::test]
async fn inserts_new_realm() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auction_tables().build().await?;

    let repo = ConnectedRealmRepository::new(&test.db);
    let result = repo.upsert(realm("")).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let stored = result.unwrap();
    assert_eq!(stored, realm(""));
    assert_eq!(repo.all().await?.len(), 1);

    Ok(())
}

/// Tests upserting a connected realm that already exists.
///
/// Verifies that every column of the existing row is replaced rather than a second row
/// being inserted.
///
/// Expected: Ok with one row holding the new references
#[tokio::test]
async fn replaces_existing_realm() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auction_tables().build().await?;

    let repo = ConnectedRealmRepository::new(&test.db);
    repo.upsert(realm("?v=1")).await?;

    let mut updated = realm("?v=2");
    updated.name = "Flamegor".to_string();
    updated.neutral_href = Some("https://eu.api.blizzard.com/7".to_string());
    repo.upsert(updated.clone()).await?;

    let all = repo.all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], updated);

    Ok(())
}
