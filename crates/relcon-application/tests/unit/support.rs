//! Shared fixtures: a lookup-table provider and an engine over in-memory stores

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use relcon_application::SimilarityEngine;
use relcon_domain::error::{Error, Result};
use relcon_domain::ports::EmbeddingProvider;
use relcon_domain::{ContentItem, Embedding, SimilarityConfig};
use relcon_providers::{InMemoryEmbeddingStore, InMemoryRelatedLinkStore, NullEventPublisher};

/// Provider returning fixed vectors keyed by the embedded text
///
/// Unknown text is an embedding error. The first `failures` calls fail.
pub struct FixedVectorProvider {
    vectors: HashMap<String, Vec<f64>>,
    dimensions: usize,
    calls: AtomicUsize,
    failures: AtomicUsize,
}

impl FixedVectorProvider {
    pub fn new(pairs: &[(&str, Vec<f64>)]) -> Self {
        let dimensions = pairs.first().map_or(2, |(_, v)| v.len());
        Self {
            vectors: pairs
                .iter()
                .map(|(text, v)| (text.to_string(), v.clone()))
                .collect(),
            dimensions,
            calls: AtomicUsize::new(0),
            failures: AtomicUsize::new(0),
        }
    }

    pub fn failing_first(self, failures: usize) -> Self {
        self.failures.store(failures, Ordering::SeqCst);
        self
    }

    /// Calls that reached the lookup, failed or not
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for FixedVectorProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(Error::embedding("provider temporarily unavailable"));
        }
        texts
            .iter()
            .map(|text| {
                self.vectors
                    .get(text)
                    .map(|vector| Embedding {
                        vector: vector.clone(),
                        model: "fixed".to_string(),
                        dimensions: self.dimensions,
                    })
                    .ok_or_else(|| Error::embedding(format!("no vector for '{text}'")))
            })
            .collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        "fixed"
    }

    fn provider_name(&self) -> &str {
        "fixed"
    }
}

/// Engine plus handles on everything it was built from
pub struct Harness {
    pub engine: Arc<SimilarityEngine>,
    pub provider: Arc<FixedVectorProvider>,
    pub embeddings: Arc<InMemoryEmbeddingStore>,
    pub links: Arc<InMemoryRelatedLinkStore>,
}

pub fn harness(provider: FixedVectorProvider, config: SimilarityConfig) -> Harness {
    let provider = Arc::new(provider);
    let embeddings = Arc::new(InMemoryEmbeddingStore::new());
    let links = Arc::new(InMemoryRelatedLinkStore::new());
    let engine = SimilarityEngine::new(
        Some(provider.clone()),
        embeddings.clone(),
        links.clone(),
        NullEventPublisher::new_shared(),
        config,
    )
    .expect("valid config");
    Harness {
        engine: Arc::new(engine),
        provider,
        embeddings,
        links,
    }
}

/// Item whose whole embeddable text is `text`
pub fn item(content_type: &str, id: &str, text: &str) -> ContentItem {
    ContentItem::new(content_type, id, vec![text.to_string()])
}

/// Unit vector at `cos` similarity to `[1, 0]`
pub fn at_cos(cos: f64) -> Vec<f64> {
    vec![cos, (1.0 - cos * cos).sqrt()]
}
