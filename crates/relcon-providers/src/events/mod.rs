//! Event Publisher Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | NullEventPublisher | Stand-in | Discards all events |
//! | TokioEventPublisher | In-Process | Tokio broadcast channel |

pub mod null;
pub mod tokio;

pub use self::null::NullEventPublisher;
pub use self::tokio::{DomainEventStream, TokioEventPublisher};

pub use relcon_domain::events::{DomainEvent, EventPublisher};
