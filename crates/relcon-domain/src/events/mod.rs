//! Domain Events
//!
//! Immutable facts about the related-content graph that other parts of the
//! system can react to.
//!
//! | Event | Description |
//! |-------|-------------|
//! | [`DomainEvent`] | Everything the engine announces |
//! | [`EventPublisher`] | Interface for publishing domain events |

/// Domain event definitions and publisher interface
pub mod domain_events;

pub use domain_events::{DomainEvent, EventPublisher, SharedEventPublisher};
