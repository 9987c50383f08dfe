//! In-process event fan-out over `tokio::sync::broadcast`
//!
//! Delivery is best effort: a full channel overwrites the oldest events and
//! a slow subscriber observes a lag instead of blocking the engine.
//!
//! ```ignore
//! let events = TokioEventPublisher::new();
//! let mut feed = events.subscribe_stream();
//! events.publish(DomainEvent::ContentRemoved { content }).await?;
//! let first = feed.next().await;
//! ```

use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use futures::Stream;
use futures::stream;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{trace, warn};

use relcon_domain::error::Result;
use relcon_domain::events::{DomainEvent, EventPublisher};

use crate::constants::EVENT_BUS_BUFFER_SIZE;

/// Events as an async stream
pub type DomainEventStream = Pin<Box<dyn Stream<Item = DomainEvent> + Send>>;

/// Broadcast-backed publisher, cheap to clone
#[derive(Clone)]
pub struct TokioEventPublisher {
    tx: Arc<broadcast::Sender<DomainEvent>>,
    capacity: usize,
}

impl TokioEventPublisher {
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_BUFFER_SIZE)
    }

    /// `capacity` events are retained for lagging subscribers (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx: Arc::new(tx),
            capacity,
        }
    }

    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.tx.subscribe()
    }

    /// Stream that logs and skips lagged events; ends when every publisher
    /// clone is dropped
    pub fn subscribe_stream(&self) -> DomainEventStream {
        Box::pin(stream::unfold(self.tx.subscribe(), |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => break Some((event, rx)),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "event subscriber lagged");
                    }
                    Err(RecvError::Closed) => break None,
                }
            }
        }))
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for TokioEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TokioEventPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioEventPublisher")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[async_trait]
impl EventPublisher for TokioEventPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<()> {
        // send only fails when nobody is subscribed
        let delivered = self.tx.send(event).unwrap_or(0);
        trace!(delivered, "event published");
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        self.subscriber_count() > 0
    }
}
