//! Publisher used when nobody listens
//!
//! ```rust
//! use relcon_domain::events::EventPublisher;
//! use relcon_providers::events::NullEventPublisher;
//!
//! assert!(!NullEventPublisher::new().has_subscribers());
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use relcon_domain::error::Result;
use relcon_domain::events::{DomainEvent, EventPublisher};

/// Drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventPublisher;

impl NullEventPublisher {
    pub fn new() -> Self {
        Self
    }

    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self)
    }
}

#[async_trait]
impl EventPublisher for NullEventPublisher {
    async fn publish(&self, _: DomainEvent) -> Result<()> {
        Ok(())
    }

    fn has_subscribers(&self) -> bool {
        false
    }
}
