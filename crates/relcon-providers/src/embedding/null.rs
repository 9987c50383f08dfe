//! Null embedding provider
//!
//! Returns zero vectors of the configured dimension. Used when embeddings
//! are disabled or the selected provider is not configured; every similarity
//! it produces is `0.0`.

use std::sync::Arc;

use async_trait::async_trait;

use relcon_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use relcon_domain::error::Result;
use relcon_domain::ports::EmbeddingProvider;
use relcon_domain::value_objects::Embedding;

use crate::constants::{EMBEDDING_DIMENSION_NULL, NULL_MODEL_NAME};

/// Null embedding provider
///
/// # Example
///
/// ```rust
/// use relcon_providers::embedding::NullEmbeddingProvider;
/// use relcon_domain::ports::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 1536);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a null provider with the default dimension
    pub fn new() -> Self {
        Self::with_dimensions(EMBEDDING_DIMENSION_NULL)
    }

    /// Create a null provider producing vectors of `dimensions` zeros
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|_| Embedding {
                vector: vec![0.0; self.dimensions],
                model: NULL_MODEL_NAME.to_string(),
                dimensions: self.dimensions,
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        NULL_MODEL_NAME
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

fn null_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    Ok(Arc::new(NullEmbeddingProvider::with_dimensions(
        config.dimensions.unwrap_or(EMBEDDING_DIMENSION_NULL),
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider (zero vectors, no network access)",
    factory: null_factory,
};
