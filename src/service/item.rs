use blizzard::model::item::Item;
use sea_orm::DatabaseConnection;

use crate::{
    data::item::ItemRepository,
    error::{retry::ErrorRetryStrategy, Error},
    service::{policy::IngestPolicy, retry::RetryContext, transaction::BatchTransaction},
};

/// Outcome of one item enrichment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentReport {
    /// Items referenced by auctions but missing from the catalog when the run started
    pub pending: usize,
    /// Items written to the catalog
    pub cached: usize,
    /// Items skipped after failed fetches
    pub skipped: usize,
}

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
    client: &'a blizzard::Client,
    policy: &'a IngestPolicy,
}

impl<'a> ItemService<'a> {
    /// Creates a new instance of [`ItemService`]
    pub fn new(
        db: &'a DatabaseConnection,
        client: &'a blizzard::Client,
        policy: &'a IngestPolicy,
    ) -> Self {
        Self { db, client, policy }
    }

    /// Fetch and store every item referenced by auctions but absent from the item catalog
    ///
    /// The worklist is queried once up front. Each item gets the policy's fetch attempts,
    /// items failing all of them are skipped and counted against the failure budget, which is
    /// never reset. Fetched items are written in batches so no transaction stays open across a
    /// fetch.
    ///
    /// # Returns
    /// - `Ok(EnrichmentReport)` - The worklist was processed
    /// - `Err(Error::EnrichmentBudgetExceeded)` - More items failed than the budget allows,
    ///   items fetched before that point are stored
    /// - `Err(Error::BlizzardError)` - Authentication failed, stored items are kept
    /// - `Err(Error::DbErr)` - Querying the worklist or storing items failed
    pub async fn cache_missing_items(&self) -> Result<EnrichmentReport, Error> {
        let pending = ItemRepository::new(self.db).find_missing_item_ids().await?;
        let ctx = RetryContext::new(self.policy.item_max_attempts, self.policy.item_retry_delay)
            .with_pacer(self.policy.pacer.clone());
        let budget = self.policy.item_failure_budget;

        let mut report = EnrichmentReport {
            pending: pending.len(),
            ..Default::default()
        };
        let mut failures: u32 = 0;
        let mut buffer: Vec<(i64, Item)> = Vec::with_capacity(self.policy.item_batch_size);

        tracing::info!("Caching {} missing items", report.pending);

        for item_id in pending {
            let client = self.client;
            let result = ctx
                .execute_with_retry(&format!("item {}", item_id), move || async move {
                    client.item().get(item_id).await.map_err(Error::from)
                })
                .await;

            match result {
                Ok(item) => {
                    buffer.push((item_id, item));

                    if buffer.len() >= self.policy.item_batch_size {
                        report.cached += self.store_items(&mut buffer).await?;
                    }
                }
                Err(e) if e.to_retry_strategy() == ErrorRetryStrategy::Abort => {
                    report.cached += self.store_items(&mut buffer).await?;
                    return Err(e);
                }
                Err(e) => {
                    failures += 1;
                    report.skipped += 1;
                    tracing::warn!(
                        "Skipping item {} ({} of {} tolerated failures): {}",
                        item_id,
                        failures,
                        budget,
                        e
                    );

                    if failures > budget {
                        report.cached += self.store_items(&mut buffer).await?;
                        tracing::error!(
                            "Item enrichment aborted with {} items cached",
                            report.cached
                        );

                        return Err(Error::EnrichmentBudgetExceeded { failures, budget });
                    }
                }
            }

            self.policy.pause(self.policy.item_delay).await;
        }

        report.cached += self.store_items(&mut buffer).await?;

        tracing::info!(
            "Item enrichment finished: {} of {} items cached, {} skipped",
            report.cached,
            report.pending,
            report.skipped
        );

        Ok(report)
    }

    /// Write and drain buffered items in one transaction, returning the number written
    async fn store_items(&self, buffer: &mut Vec<(i64, Item)>) -> Result<usize, Error> {
        if buffer.is_empty() {
            return Ok(0);
        }

        let mut batch = BatchTransaction::begin(self.db, self.policy.item_batch_size).await?;

        for (item_id, item) in buffer.iter() {
            if let Err(e) = ItemRepository::new(batch.txn()?).insert(*item_id, item).await {
                batch.rollback().await?;
                return Err(e.into());
            }

            batch.record().await?;
        }

        let stored = batch.commit().await?;
        buffer.clear();

        tracing::debug!("Stored {} items", stored);

        Ok(stored)
    }
}
