//! Application Service Port Interfaces
//!
//! Contracts implemented by the application services. Sync triggers, the
//! queue worker and the bulk runner depend on these traits rather than on
//! the concrete engine.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use relcon_domain::entities::{ContentItem, ContentRef, Embeddable, StoredEmbedding};
use relcon_domain::error::Result;
use relcon_domain::value_objects::{Candidate, RelatedItem, SimilarityConfig};

// ============================================================================
// Related Content Service Interface
// ============================================================================

/// Result of one sync pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncOutcome {
    /// Embeddable text was blank; nothing was written
    Skipped,
    /// Embedding stored and outgoing links replaced
    Synced {
        /// Links now stored for the item
        link_count: usize,
    },
}

/// Store-level counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Stored embeddings
    pub embeddings: usize,
    /// Stored directed links
    pub links: usize,
}

/// Related Content Service Interface
///
/// Embedding generation, similarity linking and graph reads.
#[async_trait]
pub trait RelatedContentServiceInterface: Send + Sync {
    /// Embed and store an item without touching its links
    ///
    /// `Ok(None)` when the embeddable text is blank.
    async fn generate_embedding(&self, item: &dyn Embeddable) -> Result<Option<StoredEmbedding>>;

    /// Embed an item and replace its outgoing links
    async fn sync(&self, item: &dyn Embeddable) -> Result<SyncOutcome>;

    /// Ranked candidates for `source`, reading its stored embedding when
    /// none is supplied
    async fn find_similar(
        &self,
        source: &ContentRef,
        embedding: Option<&StoredEmbedding>,
    ) -> Result<Vec<Candidate>>;

    /// Neighbors through either link direction
    async fn get_related(&self, item: &ContentRef, limit: Option<usize>)
    -> Result<Vec<RelatedItem>>;

    /// Neighbors of one content type through either link direction
    async fn get_related_of_type(
        &self,
        item: &ContentRef,
        content_type: &str,
        limit: Option<usize>,
    ) -> Result<Vec<RelatedItem>>;

    /// Free-text semantic search over stored embeddings
    async fn search(&self, query: &str, types: &[String], limit: usize) -> Result<Vec<Candidate>>;

    /// Delete an item's embedding and every link touching it
    async fn remove(&self, content: &ContentRef) -> Result<()>;

    /// Whether an item already has an embedding
    async fn has_embedding(&self, content: &ContentRef) -> Result<bool>;

    /// Store counters
    async fn stats(&self) -> Result<EngineStats>;

    /// Linking configuration
    fn config(&self) -> &SimilarityConfig;
}

// ============================================================================
// Content Source Interface
// ============================================================================

/// Where bulk operations read content from
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Every item of `content_type`, in source order
    async fn items(&self, content_type: &str) -> Result<Vec<ContentItem>>;
}
