//! Save and delete hooks
//!
//! Host code calls [`SyncTriggers::on_saved`] after persisting a content
//! item and [`SyncTriggers::on_deleted`] after removing one.

use std::sync::Arc;

use tracing::debug;

use relcon_domain::entities::{ContentRef, Embeddable};
use relcon_domain::error::Result;

use crate::ports::services::{RelatedContentServiceInterface, SyncOutcome};
use crate::use_cases::sync_queue::SyncQueue;

/// What changed in a save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeHint {
    /// At least one embeddable field changed (or the item is new)
    EmbeddableFieldsChanged,
    /// Only fields outside the embeddable text changed
    OtherFieldsChanged,
}

/// What a trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// No sync needed
    Unchanged,
    /// Synced inline
    Synced(SyncOutcome),
    /// Handed to the queue
    Enqueued,
}

/// How saves are synced
#[derive(Clone)]
pub enum SyncDispatch {
    /// Sync before `on_saved` returns
    Inline,
    /// Enqueue and return immediately
    Queued(Arc<SyncQueue>),
}

/// Save/delete hooks around the related-content service
pub struct SyncTriggers {
    service: Arc<dyn RelatedContentServiceInterface>,
    dispatch: SyncDispatch,
}

impl SyncTriggers {
    /// Create triggers that sync inline or through a queue
    pub fn new(service: Arc<dyn RelatedContentServiceInterface>, dispatch: SyncDispatch) -> Self {
        Self { service, dispatch }
    }

    /// React to a saved item
    ///
    /// Syncs when embeddable fields changed or the item has no embedding yet.
    pub async fn on_saved(
        &self,
        item: Arc<dyn Embeddable>,
        hint: ChangeHint,
    ) -> Result<TriggerOutcome> {
        let content = item.content_ref();
        let needs_sync = match hint {
            ChangeHint::EmbeddableFieldsChanged => true,
            ChangeHint::OtherFieldsChanged => !self.service.has_embedding(&content).await?,
        };
        if !needs_sync {
            debug!(content = %content, "Save did not touch embeddable fields");
            return Ok(TriggerOutcome::Unchanged);
        }

        match &self.dispatch {
            SyncDispatch::Inline => Ok(TriggerOutcome::Synced(
                self.service.sync(item.as_ref()).await?,
            )),
            SyncDispatch::Queued(queue) => {
                queue.enqueue(item).await?;
                Ok(TriggerOutcome::Enqueued)
            }
        }
    }

    /// React to a deleted item: drop its embedding and links in both roles
    pub async fn on_deleted(&self, content: &ContentRef) -> Result<()> {
        self.service.remove(content).await
    }
}
