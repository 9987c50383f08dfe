//! Application Use Cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`SimilarityEngine`] | Embedding, linking and graph reads |
//! | [`SyncQueue`] | Deduplicating background worker with retries |
//! | [`SyncTriggers`] | Save/delete hooks |
//! | [`BulkRunner`] | Chunked embed/rebuild over a content source |

/// Bulk embedding and rebuild runner
pub mod bulk_runner;
/// Similarity engine
pub mod similarity_engine;
/// Background sync queue
pub mod sync_queue;
/// Save/delete hooks
pub mod sync_triggers;

pub use bulk_runner::{BulkMode, BulkOptions, BulkReport, BulkRunner, DEFAULT_CHUNK_SIZE};
pub use similarity_engine::SimilarityEngine;
pub use sync_queue::{QueueStats, SyncQueue, SyncQueueConfig};
pub use sync_triggers::{ChangeHint, SyncDispatch, SyncTriggers, TriggerOutcome};
