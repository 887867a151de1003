//! Waits between API requests.
//!
//! Every delay of the ingestion passes goes through a [`Pacer`]. Production code sleeps on the
//! tokio timer, tests substitute a [`RecordingPacer`] to check the exact sequence of waits
//! without slowing down.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;

pub type Pause<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// Source of the waits between requests, replaceable in tests.
pub trait Pacer: Debug + Send + Sync {
    fn pause(&self, duration: Duration) -> Pause<'_>;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPacer;

impl Pacer for TokioPacer {
    fn pause(&self, duration: Duration) -> Pause<'_> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Returns immediately and remembers every requested wait in order.
#[derive(Debug, Default)]
pub struct RecordingPacer {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits requested so far, in request order.
    pub fn waits(&self) -> Vec<Duration> {
        match self.waits.lock() {
            Ok(waits) => waits.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Sum of every requested wait.
    pub fn total(&self) -> Duration {
        self.waits().into_iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&self, duration: Duration) -> Pause<'_> {
        match self.waits.lock() {
            Ok(mut waits) => waits.push(duration),
            Err(poisoned) => poisoned.into_inner().push(duration),
        }

        Box::pin(std::future::ready(()))
    }
}
