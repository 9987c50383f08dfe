//! Bulk embedding and rebuild runner
//!
//! Walks every item of the selected content types, in chunks, and embeds,
//! syncs or enqueues each one. Per-item failures are logged and counted;
//! only configuration problems abort the run.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use relcon_domain::entities::{ContentItem, Embeddable};
use relcon_domain::error::{Error, Result};

use crate::ports::services::{ContentSource, RelatedContentServiceInterface, SyncOutcome};
use crate::use_cases::sync_queue::SyncQueue;

/// Default items per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// What to do with each selected item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulkMode {
    /// Store embeddings only
    EmbedOnly,
    /// Embed and relink inline
    Sync,
    /// Hand each item to the sync queue
    Enqueue,
}

/// Bulk run options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkOptions {
    /// Content types to process; empty means the configured candidate types
    pub types: Vec<String>,
    /// Process items that already have an embedding
    pub force: bool,
    /// Items per chunk
    pub chunk_size: usize,
    /// Per-item action
    pub mode: BulkMode,
}

impl BulkOptions {
    /// Options for `mode` with defaults for everything else
    pub fn new(mode: BulkMode) -> Self {
        Self {
            types: Vec::new(),
            force: false,
            chunk_size: DEFAULT_CHUNK_SIZE,
            mode,
        }
    }
}

/// Counters for one bulk run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkReport {
    /// Items embedded, synced or enqueued
    pub processed: usize,
    /// Items skipped (already embedded, blank text, already queued)
    pub skipped: usize,
    /// Items that failed
    pub errored: usize,
}

enum ItemResult {
    Processed,
    Skipped,
}

/// Bulk runner over a content source
pub struct BulkRunner {
    service: Arc<dyn RelatedContentServiceInterface>,
    queue: Option<Arc<SyncQueue>>,
}

impl BulkRunner {
    /// Runner that can embed and sync inline
    pub fn new(service: Arc<dyn RelatedContentServiceInterface>) -> Self {
        Self {
            service,
            queue: None,
        }
    }

    /// Allow [`BulkMode::Enqueue`] through `queue`
    pub fn with_queue(mut self, queue: Arc<SyncQueue>) -> Self {
        self.queue = Some(queue);
        self
    }

    /// Content types a run will cover
    pub fn resolve_types(&self, options: &BulkOptions) -> Result<Vec<String>> {
        let types = if options.types.is_empty() {
            self.service.config().candidate_types.clone()
        } else {
            options.types.clone()
        };
        if types.is_empty() {
            return Err(Error::config(
                "No content types to process: pass a type or configure similarity.candidate_types",
            ));
        }
        Ok(types)
    }

    /// Process every selected item
    pub async fn run(&self, source: &dyn ContentSource, options: &BulkOptions) -> Result<BulkReport> {
        let types = self.resolve_types(options)?;
        if options.mode == BulkMode::Enqueue && self.queue.is_none() {
            return Err(Error::config("Enqueue mode requires a sync queue"));
        }
        let chunk_size = options.chunk_size.max(1);

        let mut report = BulkReport::default();
        for content_type in &types {
            let items = source.items(content_type).await?;
            info!(content_type = %content_type, total = items.len(), "Processing content type");

            for (index, chunk) in items.chunks(chunk_size).enumerate() {
                for item in chunk {
                    match self.process(item, options).await {
                        Ok(ItemResult::Processed) => report.processed += 1,
                        Ok(ItemResult::Skipped) => report.skipped += 1,
                        Err(e) => {
                            warn!(content = %item.content_ref(), error = %e, "Bulk item failed");
                            report.errored += 1;
                        }
                    }
                }
                info!(
                    content_type = %content_type,
                    chunk = index + 1,
                    processed = report.processed,
                    skipped = report.skipped,
                    errored = report.errored,
                    "Chunk complete"
                );
            }
        }

        info!(
            processed = report.processed,
            skipped = report.skipped,
            errored = report.errored,
            "Bulk run finished"
        );
        Ok(report)
    }

    async fn process(&self, item: &ContentItem, options: &BulkOptions) -> Result<ItemResult> {
        if !options.force && self.service.has_embedding(&item.content_ref()).await? {
            return Ok(ItemResult::Skipped);
        }

        match options.mode {
            BulkMode::EmbedOnly => Ok(match self.service.generate_embedding(item).await? {
                Some(_) => ItemResult::Processed,
                None => ItemResult::Skipped,
            }),
            BulkMode::Sync => Ok(match self.service.sync(item).await? {
                SyncOutcome::Synced { .. } => ItemResult::Processed,
                SyncOutcome::Skipped => ItemResult::Skipped,
            }),
            BulkMode::Enqueue => {
                let queue = self
                    .queue
                    .as_ref()
                    .ok_or_else(|| Error::config("Enqueue mode requires a sync queue"))?;
                Ok(if queue.enqueue(Arc::new(item.clone())).await? {
                    ItemResult::Processed
                } else {
                    ItemResult::Skipped
                })
            }
        }
    }
}
