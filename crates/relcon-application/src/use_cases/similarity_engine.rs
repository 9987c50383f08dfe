//! Similarity Engine Use Case
//!
//! Turns content into embeddings and maintains the related-content graph:
//! multi-type neighbor search with per-type quotas, atomic replacement of an
//! item's outgoing links, and bidirectional reads over the stored edges.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use relcon_domain::constants::DEFAULT_RELATED_OF_TYPE_LIMIT;
use relcon_domain::entities::{ContentRef, Embeddable, RelatedLink, StoredEmbedding};
use relcon_domain::error::{Error, Result};
use relcon_domain::events::{DomainEvent, SharedEventPublisher};
use relcon_domain::ports::{EmbeddingStore, RelatedLinkStore, SharedEmbeddingProvider};
use relcon_domain::value_objects::{
    Candidate, Embedding, NeighborQuery, RelatedItem, SimilarityConfig, rank_order,
};

use crate::ports::services::{EngineStats, RelatedContentServiceInterface, SyncOutcome};

/// Related-content engine
///
/// Holds no state of its own; everything lives in the two stores. Syncs of
/// different items may run concurrently. Callers serialize syncs of the
/// same item (the [`SyncQueue`](crate::use_cases::SyncQueue) does).
pub struct SimilarityEngine {
    provider: Option<SharedEmbeddingProvider>,
    embeddings: Arc<dyn EmbeddingStore>,
    links: Arc<dyn RelatedLinkStore>,
    events: SharedEventPublisher,
    config: SimilarityConfig,
}

impl fmt::Debug for SimilarityEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimilarityEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SimilarityEngine {
    /// Create an engine, validating `config`
    ///
    /// `provider` may be `None`: reads still work, while embedding
    /// operations fail with a configuration error.
    pub fn new(
        provider: Option<SharedEmbeddingProvider>,
        embeddings: Arc<dyn EmbeddingStore>,
        links: Arc<dyn RelatedLinkStore>,
        events: SharedEventPublisher,
        config: SimilarityConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            provider,
            embeddings,
            links,
            events,
            config,
        })
    }

    /// The configured provider, if any
    pub fn provider(&self) -> Option<&SharedEmbeddingProvider> {
        self.provider.as_ref()
    }

    fn require_provider(&self) -> Result<&SharedEmbeddingProvider> {
        self.provider
            .as_ref()
            .ok_or_else(|| Error::config("No embedding provider is configured"))
    }

    /// Embed `text`, rejecting vectors whose length disagrees with their
    /// declared dimensions
    async fn embed_text(&self, text: &str) -> Result<Embedding> {
        let embedding = self.require_provider()?.embed(text).await?;
        if !embedding.is_consistent() {
            return Err(Error::embedding(format!(
                "Provider returned {} values for {} dimensions",
                embedding.vector.len(),
                embedding.dimensions
            )));
        }
        Ok(embedding)
    }

    async fn publish(&self, event: DomainEvent) {
        if let Err(e) = self.events.publish(event).await {
            warn!(error = %e, "Failed to publish domain event");
        }
    }

    /// Query one type for candidates
    async fn candidates_of_type(
        &self,
        source: &ContentRef,
        vector: &[f64],
        content_type: &str,
        limit: usize,
    ) -> Result<Vec<Candidate>> {
        let mut query = NeighborQuery::new(vector.to_vec(), limit)
            .with_type(content_type)
            .with_threshold(self.config.similarity_threshold);
        if source.is_type(content_type) {
            query = query.excluding(source.clone());
        }

        let hits = self.embeddings.nearest_neighbors(&query).await?;
        debug!(
            source = %source,
            content_type,
            limit,
            found = hits.len(),
            "Queried candidates"
        );
        Ok(hits)
    }

    /// Merge both link directions into ranked neighbors of `item`
    async fn collect_related(
        &self,
        item: &ContentRef,
        content_type: Option<&str>,
        limit: usize,
    ) -> Result<Vec<RelatedItem>> {
        let outgoing = self.links.list_by_source(item).await?;
        let incoming = self.links.list_by_related(item).await?;
        Ok(merge_related(item, outgoing.iter().chain(incoming.iter()), content_type, limit))
    }
}

/// Dedup by other endpoint keeping the max similarity, then rank and cut
fn merge_related<'a>(
    item: &ContentRef,
    links: impl Iterator<Item = &'a RelatedLink>,
    content_type: Option<&str>,
    limit: usize,
) -> Vec<RelatedItem> {
    let mut best: HashMap<&ContentRef, f64> = HashMap::new();
    for link in links {
        let Some(other) = link.other_endpoint(item) else {
            continue;
        };
        if other == item || content_type.is_some_and(|t| !other.is_type(t)) {
            continue;
        }
        best.entry(other)
            .and_modify(|s| *s = s.max(link.similarity))
            .or_insert(link.similarity);
    }

    let mut related: Vec<RelatedItem> = best
        .into_iter()
        .map(|(content, similarity)| RelatedItem {
            content: content.clone(),
            similarity,
        })
        .collect();
    related.sort_by(|a, b| rank_order(a.similarity, &a.content, b.similarity, &b.content));
    related.truncate(limit);
    related
}

#[async_trait]
impl RelatedContentServiceInterface for SimilarityEngine {
    async fn generate_embedding(&self, item: &dyn Embeddable) -> Result<Option<StoredEmbedding>> {
        let owner = item.content_ref();
        let text = item.embeddable_text();
        if text.trim().is_empty() {
            debug!(content = %owner, "Skipping item with no embeddable text");
            return Ok(None);
        }

        let embedding = self.embed_text(&text).await?;
        let stored = self
            .embeddings
            .upsert(
                &owner,
                embedding.vector,
                &embedding.model,
                embedding.dimensions,
            )
            .await?;

        self.publish(DomainEvent::EmbeddingGenerated {
            content: owner,
            model: stored.model.clone(),
        })
        .await;
        Ok(Some(stored))
    }

    async fn sync(&self, item: &dyn Embeddable) -> Result<SyncOutcome> {
        let Some(stored) = self.generate_embedding(item).await? else {
            return Ok(SyncOutcome::Skipped);
        };
        let owner = stored.owner.clone();

        let candidates = self.find_similar(&owner, Some(&stored)).await?;
        let link_count = self.links.replace_for_source(&owner, &candidates).await?;
        info!(content = %owner, link_count, "Synced related content");

        self.publish(DomainEvent::RelatedContentSynced {
            content: owner,
            link_count,
        })
        .await;
        Ok(SyncOutcome::Synced { link_count })
    }

    async fn find_similar(
        &self,
        source: &ContentRef,
        embedding: Option<&StoredEmbedding>,
    ) -> Result<Vec<Candidate>> {
        let vector = match embedding {
            Some(stored) => stored.vector.clone(),
            None => match self.embeddings.get(source).await? {
                Some(stored) => stored.vector,
                None => return Ok(Vec::new()),
            },
        };

        let types = self.config.resolve_types(&source.content_type);
        let per_type = self.config.per_type_limit(types.len());

        let mut merged = Vec::new();
        for content_type in &types {
            merged.extend(
                self.candidates_of_type(source, &vector, content_type, per_type)
                    .await?,
            );
        }

        merged.sort_by(|a, b| rank_order(a.similarity, &a.content, b.similarity, &b.content));
        merged.truncate(self.config.max_related_items);
        Ok(merged)
    }

    async fn get_related(
        &self,
        item: &ContentRef,
        limit: Option<usize>,
    ) -> Result<Vec<RelatedItem>> {
        self.collect_related(item, None, limit.unwrap_or(self.config.max_related_items))
            .await
    }

    async fn get_related_of_type(
        &self,
        item: &ContentRef,
        content_type: &str,
        limit: Option<usize>,
    ) -> Result<Vec<RelatedItem>> {
        self.collect_related(
            item,
            Some(content_type),
            limit.unwrap_or(DEFAULT_RELATED_OF_TYPE_LIMIT),
        )
        .await
    }

    async fn search(&self, query: &str, types: &[String], limit: usize) -> Result<Vec<Candidate>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::invalid_argument("Search query cannot be empty"));
        }

        let embedding = self.embed_text(query).await?;
        let hits = self
            .embeddings
            .nearest_neighbors(&NeighborQuery::new(embedding.vector, limit).with_types(types.to_vec()))
            .await?;
        debug!(found = hits.len(), "Search completed");
        Ok(hits)
    }

    async fn remove(&self, content: &ContentRef) -> Result<()> {
        let had_embedding = self.embeddings.delete_by_owner(content).await?;
        let removed_links = self.links.delete_by_endpoint(content).await?;
        info!(content = %content, had_embedding, removed_links, "Removed content");

        self.publish(DomainEvent::ContentRemoved {
            content: content.clone(),
        })
        .await;
        Ok(())
    }

    async fn has_embedding(&self, content: &ContentRef) -> Result<bool> {
        self.embeddings.exists(content).await
    }

    async fn stats(&self) -> Result<EngineStats> {
        Ok(EngineStats {
            embeddings: self.embeddings.count().await?,
            links: self.links.count().await?,
        })
    }

    fn config(&self) -> &SimilarityConfig {
        &self.config
    }
}
