use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Semantic Embedding Interface
///
/// Transforms text into a fixed-length vector. Implementations range from
/// hosted OpenAI-compatible APIs to a local Ollama instance and a
/// zero-vector stand-in.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers only
/// need to implement `embed_batch()`.
///
/// # Example
///
/// ```ignore
/// let embedding = provider.embed("Rust ownership explained").await?;
/// assert_eq!(embedding.vector.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts, in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Length of every vector this provider returns
    fn dimensions(&self) -> usize;

    /// Model identifier recorded on stored embeddings
    fn model(&self) -> &str;

    /// Provider identifier (e.g. "openai", "ollama", "null")
    fn provider_name(&self) -> &str;
}

/// Shared embedding provider for dependency injection
pub type SharedEmbeddingProvider = Arc<dyn EmbeddingProvider>;
