use std::sync::Arc;
use std::time::Duration;

use crate::service::pacer::{Pacer, TokioPacer};

/// Delays, batch sizes and retry limits of the ingestion passes.
#[derive(Debug, Clone)]
pub struct IngestPolicy {
    /// Wait before each realm search
    pub realm_delay: Duration,
    /// Wait after each item fetch attempt, successful or not
    pub item_delay: Duration,
    /// Wait before retrying a failed item fetch
    pub item_retry_delay: Duration,
    /// Fetch attempts per item, including the first
    pub item_max_attempts: u32,
    /// Failed items tolerated before enrichment aborts
    pub item_failure_budget: u32,
    /// Listings per auction transaction
    pub auction_batch_size: usize,
    /// Items per item transaction
    pub item_batch_size: usize,
    /// Performs every wait above
    pub pacer: Arc<dyn Pacer>,
}

impl IngestPolicy {
    pub const DEFAULT_REALM_DELAY: Duration = Duration::from_millis(250);
    pub const DEFAULT_ITEM_DELAY: Duration = Duration::from_millis(500);
    pub const DEFAULT_ITEM_RETRY_DELAY: Duration = Duration::from_secs(10);
    pub const DEFAULT_ITEM_MAX_ATTEMPTS: u32 = 2;
    pub const DEFAULT_ITEM_FAILURE_BUDGET: u32 = 5;
    pub const DEFAULT_AUCTION_BATCH_SIZE: usize = 10_000;
    pub const DEFAULT_ITEM_BATCH_SIZE: usize = 50;

    /// Same limits without any waiting, for tests.
    pub fn without_delays(self) -> Self {
        Self {
            realm_delay: Duration::ZERO,
            item_delay: Duration::ZERO,
            item_retry_delay: Duration::ZERO,
            ..self
        }
    }

    pub fn with_pacer(self, pacer: Arc<dyn Pacer>) -> Self {
        Self { pacer, ..self }
    }

    /// Wait `duration` through the configured pacer.
    pub async fn pause(&self, duration: Duration) {
        self.pacer.pause(duration).await;
    }
}

impl Default for IngestPolicy {
    fn default() -> Self {
        Self {
            realm_delay: Self::DEFAULT_REALM_DELAY,
            item_delay: Self::DEFAULT_ITEM_DELAY,
            item_retry_delay: Self::DEFAULT_ITEM_RETRY_DELAY,
            item_max_attempts: Self::DEFAULT_ITEM_MAX_ATTEMPTS,
            item_failure_budget: Self::DEFAULT_ITEM_FAILURE_BUDGET,
            auction_batch_size: Self::DEFAULT_AUCTION_BATCH_SIZE,
            item_batch_size: Self::DEFAULT_ITEM_BATCH_SIZE,
            pacer: Arc::new(TokioPacer),
        }
    }
}
