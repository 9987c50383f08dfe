//! Application Ports
//!
//! - **registry/** - auto-registration of embedding providers
//! - **services.rs** - application service interfaces and the content source
//!
//! The persistence and provider traits live in `relcon_domain::ports`;
//! they are re-exported here for convenience.

/// Provider registry for dynamic provider discovery
pub mod registry;
/// Application service interfaces
pub mod services;

pub use registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
    list_embedding_providers, resolve_embedding_provider,
};
pub use relcon_domain::ports::{
    EmbeddingProvider, EmbeddingStore, RelatedLinkStore, SharedEmbeddingProvider,
};
pub use services::{ContentSource, EngineStats, RelatedContentServiceInterface, SyncOutcome};
