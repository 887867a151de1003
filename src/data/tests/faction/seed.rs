//! Tests for FactionRepository::seed method.

use super::*;

/// Tests seeding an empty faction table.
///
/// Verifies that the three auction house factions are inserted with their fixed IDs.
///
/// Expected: Ok with Alliance, Horde and Neutral stored as 0, 1 and 2
#[tokio::test]
async fn seeds_empty_table() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faction)
        .build()
        .await?;

    let repo = FactionRepository::new(&test.db);
    repo.seed().await?;

    let factions = repo.all().await?;
    let names: Vec<(i32, &str)> = factions
        .iter()
        .map(|f| (f.faction_id, f.faction_name.as_str()))
        .collect();
    assert_eq!(names, vec![(0, "Alliance"), (1, "Horde"), (2, "Neutral")]);

    Ok(())
}

/// Tests seeding twice.
///
/// Verifies that seeding an already seeded table neither fails nor duplicates rows.
///
/// Expected: Ok with 3 rows
#[tokio::test]
async fn seeding_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auction_tables().build().await?;

    let repo = FactionRepository::new(&test.db);
    let result = repo.seed().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(repo.all().await?.len(), 3);

    Ok(())
}
