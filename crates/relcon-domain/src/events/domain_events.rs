//! Event Publisher Domain Port
//!
//! Lets the engine announce graph changes without coupling to a transport
//! (tokio broadcast, nothing at all).

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::ContentRef;
use crate::error::Result;

/// Events published by the related-content engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DomainEvent {
    /// Outgoing links of an item were recomputed
    RelatedContentSynced {
        /// Source item
        content: ContentRef,
        /// Number of links now stored for it
        link_count: usize,
    },
    /// An embedding was created or replaced
    EmbeddingGenerated {
        /// Owner of the embedding
        content: ContentRef,
        /// Model that produced it
        model: String,
    },
    /// An item's embedding and every link touching it were removed
    ContentRemoved {
        /// Removed item
        content: ContentRef,
    },
}

/// Domain Port for Publishing System Events
///
/// # Example
///
/// ```rust,no_run
/// use relcon_domain::events::{DomainEvent, EventPublisher};
/// use relcon_domain::ContentRef;
///
/// async fn announce(publisher: &dyn EventPublisher) -> relcon_domain::Result<()> {
///     publisher
///         .publish(DomainEvent::ContentRemoved {
///             content: ContentRef::new("post", "7"),
///         })
///         .await
/// }
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an event to all subscribers
    ///
    /// Success means the event was handed off, not that anyone received it.
    async fn publish(&self, event: DomainEvent) -> Result<()>;

    /// Check if there are any active subscribers
    fn has_subscribers(&self) -> bool;
}

/// Shared event publisher for dependency injection
pub type SharedEventPublisher = Arc<dyn EventPublisher>;
