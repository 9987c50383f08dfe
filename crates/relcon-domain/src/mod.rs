//! # Relcon Domain Layer
//!
//! Core types and contracts for the related-content engine. Nothing in this
//! crate talks to the network or the filesystem; it defines what the outer
//! layers must provide.
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entities`] | [`ContentRef`], [`StoredEmbedding`], [`RelatedLink`], the [`Embeddable`] capability |
//! | [`value_objects`] | [`Embedding`], [`Candidate`], [`RelatedItem`], [`SimilarityConfig`] |
//! | [`ports`] | Embedding provider and store traits |
//! | [`events`] | [`DomainEvent`] and the [`EventPublisher`] port |
//! | [`error`] | Domain [`Error`] and [`Result`] alias |

/// Domain constants
pub mod constants;
/// Domain entities with identity
pub mod entities;
/// Error handling types
pub mod error;
/// Domain events and publisher port
pub mod events;
/// Ports (traits) implemented by outer layers
pub mod ports;
/// Immutable value objects
pub mod value_objects;

pub use entities::{ContentItem, ContentRef, Embeddable, RelatedLink, StoredEmbedding};
pub use error::{Error, Result};
pub use events::{DomainEvent, EventPublisher, SharedEventPublisher};
pub use value_objects::{
    Candidate, Embedding, EmbeddingProviderKind, NeighborQuery, RankingStrategy, RelatedItem,
    SimilarityConfig, StorageBackendKind, cosine_similarity,
};
