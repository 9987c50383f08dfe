//! Sync Queue Use Case
//!
//! Background worker that runs syncs one at a time. Pending work is
//! deduplicated per item: enqueueing an item that is already waiting only
//! swaps in the newer copy. Failed syncs are retried a bounded number of
//! times with a fixed backoff.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use relcon_domain::entities::{ContentRef, Embeddable};
use relcon_domain::error::{Error, Result};

use crate::ports::services::RelatedContentServiceInterface;

/// Default attempts per item
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default wait between attempts
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(30);

/// Default channel capacity
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Retry and buffering policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncQueueConfig {
    /// Attempts per item, including the first
    pub max_attempts: u32,
    /// Wait between attempts
    pub backoff: Duration,
    /// Channel capacity
    pub capacity: usize,
}

impl Default for SyncQueueConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
            capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// Counters returned when the worker stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    /// Items synced successfully (including skipped blank items)
    pub succeeded: usize,
    /// Items that exhausted their attempts
    pub failed: usize,
    /// Extra attempts made after a failure
    pub retries: usize,
}

type PendingMap = Arc<Mutex<HashMap<ContentRef, Arc<dyn Embeddable>>>>;

/// Deduplicating background sync queue
///
/// Shared behind an `Arc`; [`shutdown`](Self::shutdown) closes it for every
/// holder.
pub struct SyncQueue {
    sender: Mutex<Option<mpsc::Sender<ContentRef>>>,
    pending: PendingMap,
    worker: Mutex<Option<JoinHandle<QueueStats>>>,
}

impl SyncQueue {
    /// Spawn the worker on the current tokio runtime
    pub fn start(service: Arc<dyn RelatedContentServiceInterface>, config: SyncQueueConfig) -> Self {
        let (sender, receiver) = mpsc::channel(config.capacity.max(1));
        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
        let worker = tokio::spawn(run_worker(service, config, Arc::clone(&pending), receiver));

        Self {
            sender: Mutex::new(Some(sender)),
            pending,
            worker: Mutex::new(Some(worker)),
        }
    }

    /// Queue an item for sync
    ///
    /// Returns `false` when the item was already waiting; the newer copy
    /// replaces the queued one.
    pub async fn enqueue(&self, item: Arc<dyn Embeddable>) -> Result<bool> {
        let Some(sender) = self.sender.lock().await.clone() else {
            return Err(Error::internal("Sync queue has been shut down"));
        };
        let key = item.content_ref();
        {
            let mut pending = self.pending.lock().await;
            if pending.insert(key.clone(), item).is_some() {
                debug!(content = %key, "Item already queued; replaced pending copy");
                return Ok(false);
            }
        }

        if sender.send(key.clone()).await.is_err() {
            self.pending.lock().await.remove(&key);
            return Err(Error::internal("Sync queue worker has stopped"));
        }
        Ok(true)
    }

    /// Items waiting to be processed
    pub async fn pending(&self) -> usize {
        self.pending.lock().await.len()
    }

    /// Stop accepting work, drain what is queued and return the counters
    pub async fn shutdown(&self) -> Result<QueueStats> {
        self.sender.lock().await.take();
        let worker = self
            .worker
            .lock()
            .await
            .take()
            .ok_or_else(|| Error::internal("Sync queue has already been shut down"))?;
        worker
            .await
            .map_err(|e| Error::internal(format!("Sync queue worker failed: {e}")))
    }
}

async fn run_worker(
    service: Arc<dyn RelatedContentServiceInterface>,
    config: SyncQueueConfig,
    pending: PendingMap,
    mut receiver: mpsc::Receiver<ContentRef>,
) -> QueueStats {
    let mut stats = QueueStats::default();
    let max_attempts = config.max_attempts.max(1);

    while let Some(key) = receiver.recv().await {
        let Some(item) = pending.lock().await.remove(&key) else {
            continue;
        };

        let mut attempt = 1;
        loop {
            match service.sync(item.as_ref()).await {
                Ok(outcome) => {
                    debug!(content = %key, attempt, ?outcome, "Queued sync finished");
                    stats.succeeded += 1;
                    break;
                }
                Err(e) if attempt < max_attempts => {
                    warn!(
                        content = %key,
                        attempt,
                        error = %e,
                        "Queued sync failed; retrying in {:?}",
                        config.backoff
                    );
                    stats.retries += 1;
                    attempt += 1;
                    tokio::time::sleep(config.backoff).await;
                }
                Err(e) => {
                    warn!(content = %key, attempt, error = %e, "Queued sync gave up");
                    stats.failed += 1;
                    break;
                }
            }
        }
    }

    info!(
        succeeded = stats.succeeded,
        failed = stats.failed,
        retries = stats.retries,
        "Sync queue drained"
    );
    stats
}
