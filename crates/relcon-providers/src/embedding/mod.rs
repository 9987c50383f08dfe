//! Embedding Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Notes |
//! |----------|------|-------|
//! | NullEmbeddingProvider | Stand-in | Zero vectors, no network |
//! | OllamaEmbeddingProvider | Local | `/api/embeddings`, one request per text |
//! | OpenAIEmbeddingProvider | Cloud | `/embeddings`, batched input |
//!
//! Every provider registers itself in the
//! [`EMBEDDING_PROVIDERS`](relcon_application::ports::registry::EMBEDDING_PROVIDERS)
//! slice under its lowercase name.

pub mod helpers;
pub mod null;
pub mod ollama;
pub mod openai;

pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
pub use ollama::OllamaEmbeddingProvider;
pub use openai::OpenAIEmbeddingProvider;
