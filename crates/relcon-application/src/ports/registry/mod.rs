//! Provider Registry System
//!
//! Compile-time registration of embedding providers through `linkme`
//! distributed slices, resolved by name at startup.
//!
//! ```text
//! 1. Provider defines:  #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//!                       static ENTRY: EmbeddingProviderEntry = ...
//! 2. Registry declares: #[linkme::distributed_slice]
//!                       pub static EMBEDDING_PROVIDERS: [Entry] = [..]
//! 3. Resolver queries:  EMBEDDING_PROVIDERS.iter()
//! 4. Config selects:    provider = "ollama" -> OllamaEmbeddingProvider
//! ```
//!
//! ## Registering a Provider (in relcon-providers)
//!
//! ```ignore
//! use relcon_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static OLLAMA_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "ollama",
//!     description: "Ollama local embedding provider",
//!     factory: ollama_factory,
//! };
//! ```

/// Embedding provider registry
pub mod embedding;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
    list_embedding_providers, resolve_embedding_provider,
};
