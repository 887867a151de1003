//! Tests for ItemService::cache_missing_items method.
//!
//! This module verifies the item enrichment loop, including the worklist, retry of transient
//! failures and the failure budget.

use std::{sync::Arc, time::Duration};

use blackwater::{
    data::item::ItemRepository,
    error::Error,
    service::{item::ItemService, pacer::RecordingPacer},
};
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Builder with one auction listing each of `item_ids` on the test realm.
fn with_listed_items(item_ids: impl IntoIterator<Item = i64>) -> TestBuilder {
    item_ids.into_iter().fold(
        TestBuilder::new()
            .with_auction_tables()
            .with_mock_realm(TEST_REALM_ID),
        |builder, item_id| {
            builder.with_mock_auction(item_id, item_id, TEST_REALM_ID, 0, 100, 1_700_000_000)
        },
    )
}

/// Tests caching the items referenced by auctions.
///
/// Verifies that only items listed in auctions and missing from the catalog are fetched
/// and that no item outside that worklist is created.
///
/// Expected: Ok with 2 items cached
#[tokio::test]
async fn caches_only_referenced_missing_items() -> Result<(), TestError> {
    let test = with_listed_items([7, 25, 40])
        .with_mock_item(7)
        .with_item_endpoint(7, 0)
        .with_item_endpoint(25, 1)
        .with_item_endpoint(40, 1)
        .with_item_endpoint(99, 0)
        .build()
        .await?;
    let policy = test_policy();

    let service = ItemService::new(&test.db, &test.client, &policy);
    let result = service.cache_missing_items().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let report = result.unwrap();
    assert_eq!(report.pending, 2);
    assert_eq!(report.cached, 2);
    assert_eq!(report.skipped, 0);

    let mut item_ids: Vec<i64> = entity::prelude::Item::find()
        .all(&test.db)
        .await?
        .into_iter()
        .map(|item| item.item_id)
        .collect();
    item_ids.sort();
    assert_eq!(item_ids, vec![7, 25, 40]);

    test.assert_mocks();

    Ok(())
}

/// Tests an item whose first fetch fails with a server error.
///
/// Verifies that the fetch is retried once and the item cached from the second attempt.
///
/// Expected: Ok with the item cached and nothing skipped
#[tokio::test]
async fn retries_transient_failure_once() -> Result<(), TestError> {
    let test = with_listed_items([25])
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/data/wow/item/25")
                .match_query(mockito::Matcher::Any)
                .with_status(503)
                .expect(1)
                .create()
        })
        .with_item_endpoint(25, 1)
        .build()
        .await?;
    let policy = test_policy();

    let service = ItemService::new(&test.db, &test.client, &policy);
    let report = service.cache_missing_items().await?;

    assert_eq!(report.cached, 1);
    assert_eq!(report.skipped, 0);
    assert!(ItemRepository::new(&test.db).find_by_id(25).await?.is_some());

    test.assert_mocks();

    Ok(())
}

/// Tests an item whose first fetch returns not found.
///
/// Verifies that a client error status is retried once like any other non-success response
/// and the item cached from the second attempt.
///
/// Expected: Ok with the item cached after two requests
#[tokio::test]
async fn retries_not_found_item_once() -> Result<(), TestError> {
    let test = with_listed_items([25])
        .with_item_error_endpoint(25, 404, 1)
        .with_item_endpoint(25, 1)
        .build()
        .await?;
    let policy = test_policy();

    let service = ItemService::new(&test.db, &test.client, &policy);
    let report = service.cache_missing_items().await?;

    assert_eq!(report.cached, 1);
    assert_eq!(report.skipped, 0);
    assert!(ItemRepository::new(&test.db).find_by_id(25).await?.is_some());

    test.assert_mocks();

    Ok(())
}

/// Tests an item failing both attempts.
///
/// Verifies that the item is skipped after its single retry and the loop continues.
///
/// Expected: Ok with 1 item cached and 1 skipped
#[tokio::test]
async fn skips_item_failing_both_attempts() -> Result<(), TestError> {
    let test = with_listed_items([25, 40])
        .with_item_error_endpoint(25, 404, 2)
        .with_item_endpoint(40, 1)
        .build()
        .await?;
    let policy = test_policy();

    let service = ItemService::new(&test.db, &test.client, &policy);
    let report = service.cache_missing_items().await?;

    assert_eq!(report.pending, 2);
    assert_eq!(report.cached, 1);
    assert_eq!(report.skipped, 1);

    test.assert_mocks();

    Ok(())
}

/// Tests an item whose response body cannot be decoded.
///
/// Verifies that a malformed payload skips the item without a second request.
///
/// Expected: Ok with the item skipped after one request
#[tokio::test]
async fn skips_malformed_item_without_retry() -> Result<(), TestError> {
    let test = with_listed_items([25])
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/data/wow/item/25")
                .match_query(mockito::Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"id":"not a number"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let policy = test_policy();

    let service = ItemService::new(&test.db, &test.client, &policy);
    let report = service.cache_missing_items().await?;

    assert_eq!(report.cached, 0);
    assert_eq!(report.skipped, 1);

    test.assert_mocks();

    Ok(())
}

/// Tests the waits of an enrichment run.
///
/// Verifies that a retried item waits the retry delay once and that every item, retried or
/// not, is followed by the item delay.
///
/// Expected: Ok with waits of 10 s, 500 ms and 500 ms in that order
#[tokio::test]
async fn paces_fetches_and_retry() -> Result<(), TestError> {
    let test = with_listed_items([25, 40])
        .with_item_error_endpoint(25, 503, 1)
        .with_item_endpoint(25, 1)
        .with_item_endpoint(40, 1)
        .build()
        .await?;
    let pacer = Arc::new(RecordingPacer::new());
    let policy = IngestPolicy::default().with_pacer(pacer.clone());

    let service = ItemService::new(&test.db, &test.client, &policy);
    let report = service.cache_missing_items().await?;

    assert_eq!(report.cached, 2);
    assert_eq!(
        pacer.waits(),
        vec![
            Duration::from_secs(10),
            Duration::from_millis(500),
            Duration::from_millis(500)
        ]
    );
    assert_eq!(pacer.total(), Duration::from_secs(11));

    test.assert_mocks();

    Ok(())
}

/// Tests the waits around a skipped item.
///
/// Expected: Ok with the retry delay and the item delay waited for the skipped item
#[tokio::test]
async fn paces_skipped_item() -> Result<(), TestError> {
    let test = with_listed_items([25])
        .with_item_error_endpoint(25, 500, 2)
        .build()
        .await?;
    let pacer = Arc::new(RecordingPacer::new());
    let policy = IngestPolicy::default().with_pacer(pacer.clone());

    let service = ItemService::new(&test.db, &test.client, &policy);
    let report = service.cache_missing_items().await?;

    assert_eq!(report.skipped, 1);
    assert_eq!(
        pacer.waits(),
        vec![Duration::from_secs(10), Duration::from_millis(500)]
    );

    test.assert_mocks();

    Ok(())
}

/// Tests exceeding the failure budget.
///
/// Verifies that after six items fail both attempts the loop stops with a budget error and
/// never requests the seventh item.
///
/// Expected: Err(EnrichmentBudgetExceeded) with 6 failures against a budget of 5
#[tokio::test]
async fn stops_after_budget_exceeded() -> Result<(), TestError> {
    let builder = (1..=6).fold(with_listed_items(1..=7), |builder, item_id| {
        builder.with_item_error_endpoint(item_id, 500, 2)
    });
    let test = builder.with_item_endpoint(7, 0).build().await?;
    let policy = test_policy();

    let service = ItemService::new(&test.db, &test.client, &policy);
    let result = service.cache_missing_items().await;

    assert!(
        matches!(
            result,
            Err(Error::EnrichmentBudgetExceeded {
                failures: 6,
                budget: 5
            })
        ),
        "{:?}",
        result
    );
    assert_eq!(entity::prelude::Item::find().count(&test.db).await?, 0);

    test.assert_mocks();

    Ok(())
}

/// Tests items fetched before the budget is exceeded.
///
/// Verifies that items fetched earlier in the run are stored even though the loop aborts.
///
/// Expected: Err(EnrichmentBudgetExceeded) with item 1 cached
#[tokio::test]
async fn keeps_items_fetched_before_budget_exceeded() -> Result<(), TestError> {
    let builder = (2..=7).fold(with_listed_items(1..=8), |builder, item_id| {
        builder.with_item_error_endpoint(item_id, 404, 2)
    });
    let test = builder
        .with_item_endpoint(1, 1)
        .with_item_endpoint(8, 0)
        .build()
        .await?;
    let policy = test_policy();

    let service = ItemService::new(&test.db, &test.client, &policy);
    let result = service.cache_missing_items().await;

    assert!(matches!(
        result,
        Err(Error::EnrichmentBudgetExceeded { failures: 6, .. })
    ));
    assert!(ItemRepository::new(&test.db).find_by_id(1).await?.is_some());
    assert_eq!(entity::prelude::Item::find().count(&test.db).await?, 1);

    test.assert_mocks();

    Ok(())
}

/// Tests items cached in several batches.
///
/// Verifies that a worklist larger than the item batch size is stored completely.
///
/// Expected: Ok with 5 items cached using batches of 2
#[tokio::test]
async fn stores_items_in_batches() -> Result<(), TestError> {
    let builder = (1..=5).fold(with_listed_items(1..=5), |builder, item_id| {
        builder.with_item_endpoint(item_id, 1)
    });
    let test = builder.build().await?;
    let policy = IngestPolicy {
        item_batch_size: 2,
        ..test_policy()
    };

    let service = ItemService::new(&test.db, &test.client, &policy);
    let report = service.cache_missing_items().await?;

    assert_eq!(report.cached, 5);
    assert_eq!(entity::prelude::Item::find().count(&test.db).await?, 5);

    test.assert_mocks();

    Ok(())
}

/// Tests rejected API credentials during enrichment.
///
/// Expected: Err with an AuthError and no item requested
#[tokio::test]
async fn aborts_on_auth_error() -> Result<(), TestError> {
    let test = with_listed_items([25, 40])
        .with_mock_endpoint(rejecting_token_endpoint)
        .with_item_endpoint(25, 0)
        .with_item_endpoint(40, 0)
        .build()
        .await?;
    let client = unauthenticated_client(&test)?;
    let policy = test_policy();

    let service = ItemService::new(&test.db, &client, &policy);
    let result = service.cache_missing_items().await;

    assert!(
        matches!(
            result,
            Err(Error::BlizzardError(blizzard::Error::AuthError(_)))
        ),
        "{:?}",
        result
    );

    test.assert_mocks();

    Ok(())
}
