use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    error::{retry::ErrorRetryStrategy, Error},
    service::pacer::{Pacer, TokioPacer},
};

/// Retry logic for a single fallible operation
pub struct RetryContext {
    /// Max attempts before failure, including the first
    max_attempts: u32,
    /// Fixed wait between attempts
    retry_delay: Duration,
    pacer: Arc<dyn Pacer>,
}

impl RetryContext {
    pub fn new(max_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            retry_delay,
            pacer: Arc::new(TokioPacer),
        }
    }

    pub fn with_pacer(mut self, pacer: Arc<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    /// Execute an operation, retrying errors whose strategy is [`ErrorRetryStrategy::Retry`]
    ///
    /// Errors with any other strategy are returned immediately, as is the last error once
    /// `max_attempts` is reached.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "item 2589")
    /// - `operation`: Async function performing one attempt
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let mut attempt_count = 0;

        loop {
            attempt_count += 1;

            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count,
                self.max_attempts
            );

            let e = match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => e,
            };

            match e.to_retry_strategy() {
                ErrorRetryStrategy::Fail | ErrorRetryStrategy::Abort => {
                    tracing::error!("Permanent error for {}: {}", description, e);
                    return Err(e);
                }
                ErrorRetryStrategy::Retry => {
                    if attempt_count >= self.max_attempts {
                        tracing::error!(
                            "Max attempts ({}) exceeded for {}: {}",
                            self.max_attempts,
                            description,
                            e
                        );
                        return Err(e);
                    }

                    tracing::warn!(
                        "Retrying {} (attempt {}/{}) after {:?}: {}",
                        description,
                        attempt_count + 1,
                        self.max_attempts,
                        self.retry_delay,
                        e
                    );

                    self.pacer.pause(self.retry_delay).await;
                }
            }
        }
    }
}
