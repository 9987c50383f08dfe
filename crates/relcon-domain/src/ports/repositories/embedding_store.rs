use async_trait::async_trait;

use crate::entities::{ContentRef, StoredEmbedding};
use crate::error::Result;
use crate::value_objects::{Candidate, NeighborQuery};

/// Embedding Persistence Interface
///
/// Holds at most one embedding per owner. Implementations must reject a
/// vector whose length differs from `dimensions` and must return neighbors
/// ordered by similarity descending, ties broken by owner ascending.
///
/// # Example
///
/// ```ignore
/// store.upsert(&owner, vector, "nomic-embed-text", 768).await?;
/// let hits = store
///     .nearest_neighbors(&NeighborQuery::new(query, 5).with_type("post"))
///     .await?;
/// ```
#[async_trait]
pub trait EmbeddingStore: Send + Sync {
    /// Insert or overwrite the embedding of `owner`
    async fn upsert(
        &self,
        owner: &ContentRef,
        vector: Vec<f64>,
        model: &str,
        dimensions: usize,
    ) -> Result<StoredEmbedding>;

    /// Cosine nearest neighbors filtered by the query
    async fn nearest_neighbors(&self, query: &NeighborQuery) -> Result<Vec<Candidate>>;

    /// Embedding of `owner`, if any
    async fn get(&self, owner: &ContentRef) -> Result<Option<StoredEmbedding>>;

    /// Remove the embedding of `owner`; `true` if one existed
    async fn delete_by_owner(&self, owner: &ContentRef) -> Result<bool>;

    /// Whether `owner` has an embedding
    async fn exists(&self, owner: &ContentRef) -> Result<bool> {
        Ok(self.get(owner).await?.is_some())
    }

    /// Number of stored embeddings
    async fn count(&self) -> Result<usize>;

    /// Backend identifier (e.g. "memory", "filesystem")
    fn store_name(&self) -> &str;
}
