//! # Relcon Provider Implementations
//!
//! Every user-selectable implementation of a `relcon-domain` port.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | OpenAI, Ollama, Null |
//! | Embedding store | `EmbeddingStore` | InMemory, Filesystem |
//! | Link store | `RelatedLinkStore` | InMemory, Filesystem |
//! | Events | `EventPublisher` | Tokio, Null |
//! | Content | `ContentSource` | JSON Lines file |
//!
//! Embedding providers register themselves in the application layer's
//! linkme registry. Linking this crate is enough to make them resolvable;
//! binaries and tests that only resolve by name should add
//! `extern crate relcon_providers;`.

pub use relcon_domain::error::{Error, Result};
pub use relcon_domain::ports::{EmbeddingProvider, EmbeddingStore, RelatedLinkStore};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
pub mod embedding;

/// Embedding and related link stores
pub mod store;

/// Event publisher implementations
pub mod events;

/// Content sources for bulk runs
pub mod source;

pub use embedding::{NullEmbeddingProvider, OllamaEmbeddingProvider, OpenAIEmbeddingProvider};
pub use events::{NullEventPublisher, TokioEventPublisher};
pub use source::JsonlContentSource;
pub use store::{
    FilesystemEmbeddingStore, FilesystemRelatedLinkStore, InMemoryEmbeddingStore,
    InMemoryRelatedLinkStore,
};
