//! In-memory embedding and related link stores
//!
//! Data is not persisted and will be lost on restart. The filesystem stores
//! wrap these and add snapshots.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::RwLock;

use relcon_domain::entities::{ContentRef, RelatedLink, StoredEmbedding};
use relcon_domain::error::Result;
use relcon_domain::ports::{EmbeddingStore, RelatedLinkStore};
use relcon_domain::value_objects::{
    Candidate, NeighborQuery, compute_norm, cosine_similarity_with_norm, rank_order,
};

/// In-memory embedding store
///
/// One entry per owner in a concurrent hash map. Neighbor queries are an
/// exact scan with bounded top-k selection.
#[derive(Clone, Default)]
pub struct InMemoryEmbeddingStore {
    embeddings: Arc<DashMap<ContentRef, StoredEmbedding>>,
}

impl InMemoryEmbeddingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `embeddings`
    pub fn from_embeddings(embeddings: impl IntoIterator<Item = StoredEmbedding>) -> Self {
        let map = DashMap::new();
        for embedding in embeddings {
            map.insert(embedding.owner.clone(), embedding);
        }
        Self {
            embeddings: Arc::new(map),
        }
    }

    /// Every stored embedding, ordered by owner
    pub fn snapshot(&self) -> Vec<StoredEmbedding> {
        let mut all: Vec<StoredEmbedding> =
            self.embeddings.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| a.owner.cmp(&b.owner));
        all
    }

    /// Insert an already validated embedding
    pub(crate) fn insert_stored(&self, stored: StoredEmbedding) {
        self.embeddings.insert(stored.owner.clone(), stored);
    }
}

#[async_trait]
impl EmbeddingStore for InMemoryEmbeddingStore {
    async fn upsert(
        &self,
        owner: &ContentRef,
        vector: Vec<f64>,
        model: &str,
        dimensions: usize,
    ) -> Result<StoredEmbedding> {
        let stored = StoredEmbedding::new(owner.clone(), vector, model, dimensions)?;
        self.insert_stored(stored.clone());
        Ok(stored)
    }

    async fn nearest_neighbors(&self, query: &NeighborQuery) -> Result<Vec<Candidate>> {
        if query.limit == 0 {
            return Ok(Vec::new());
        }

        // Precompute query norm once
        let query_norm = compute_norm(&query.vector);

        // Min-heap of the best `limit` items: O(n log k). The caller's limit
        // may exceed the store size by any amount.
        let capacity = query.limit.min(self.embeddings.len()).saturating_add(1);
        let mut heap: BinaryHeap<ScoredItem> = BinaryHeap::with_capacity(capacity);

        for entry in self.embeddings.iter() {
            let owner = entry.key();
            if !query.admits(owner) {
                continue;
            }
            let similarity =
                cosine_similarity_with_norm(&query.vector, &entry.value().vector, query_norm);
            if !query.passes(similarity) {
                continue;
            }

            let item = ScoredItem {
                score: similarity,
                owner: owner.clone(),
            };
            if heap.len() < query.limit {
                heap.push(item);
            } else if heap.peek().is_some_and(|worst| item < *worst) {
                heap.pop();
                heap.push(item);
            }
        }

        // Ascending heap order is best first
        Ok(heap
            .into_sorted_vec()
            .into_iter()
            .map(|item| Candidate::new(item.owner, item.score))
            .collect())
    }

    async fn get(&self, owner: &ContentRef) -> Result<Option<StoredEmbedding>> {
        Ok(self.embeddings.get(owner).map(|e| e.value().clone()))
    }

    async fn delete_by_owner(&self, owner: &ContentRef) -> Result<bool> {
        Ok(self.embeddings.remove(owner).is_some())
    }

    async fn exists(&self, owner: &ContentRef) -> Result<bool> {
        Ok(self.embeddings.contains_key(owner))
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.embeddings.len())
    }

    fn store_name(&self) -> &str {
        "memory"
    }
}

/// Scored item for heap-based top-k selection
///
/// Orders worse items as greater, so `BinaryHeap` keeps the worst on top:
/// lower similarity is worse, and among equals the larger owner is worse.
#[derive(PartialEq)]
struct ScoredItem {
    score: f64,
    owner: ContentRef,
}

impl Eq for ScoredItem {}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        rank_order(self.score, &self.owner, other.score, &other.owner)
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Directed edges with a reverse index
///
/// `by_source` owns the links, sorted by rank; `by_related` maps a related
/// endpoint to the sources pointing at it.
#[derive(Clone, Default)]
pub(crate) struct LinkTable {
    by_source: HashMap<ContentRef, Vec<RelatedLink>>,
    by_related: HashMap<ContentRef, HashSet<ContentRef>>,
}

impl LinkTable {
    fn remove_source(&mut self, source: &ContentRef) -> usize {
        let Some(links) = self.by_source.remove(source) else {
            return 0;
        };
        for link in &links {
            if let Some(sources) = self.by_related.get_mut(&link.related) {
                sources.remove(source);
                if sources.is_empty() {
                    self.by_related.remove(&link.related);
                }
            }
        }
        links.len()
    }

    fn insert_source(&mut self, source: &ContentRef, mut links: Vec<RelatedLink>) {
        if links.is_empty() {
            return;
        }
        links.sort_by(|a, b| rank_order(a.similarity, &a.related, b.similarity, &b.related));
        for link in &links {
            self.by_related
                .entry(link.related.clone())
                .or_default()
                .insert(source.clone());
        }
        self.by_source.insert(source.clone(), links);
    }

    fn incoming(&self, related: &ContentRef) -> Vec<RelatedLink> {
        let Some(sources) = self.by_related.get(related) else {
            return Vec::new();
        };
        let mut links: Vec<RelatedLink> = sources
            .iter()
            .filter_map(|source| self.by_source.get(source))
            .flat_map(|links| links.iter().filter(|l| &l.related == related).cloned())
            .collect();
        links.sort_by(|a, b| rank_order(a.similarity, &a.source, b.similarity, &b.source));
        links
    }

    fn count(&self) -> usize {
        self.by_source.values().map(Vec::len).sum()
    }

    /// Swap the outgoing edges of `source` for `candidates`
    pub(crate) fn replace(&mut self, source: &ContentRef, candidates: &[Candidate]) -> usize {
        let links = dedup_by_related(
            candidates
                .iter()
                .map(|candidate| RelatedLink::from_candidate(source, candidate))
                .collect(),
        );
        let written = links.len();
        self.remove_source(source);
        self.insert_source(source, links);
        written
    }

    /// Drop every edge with `content` at either end
    pub(crate) fn delete_endpoint(&mut self, content: &ContentRef) -> usize {
        let mut removed = self.remove_source(content);
        let sources = self.by_related.remove(content).unwrap_or_default();
        for source in sources {
            if let Some(links) = self.by_source.get_mut(&source) {
                let before = links.len();
                links.retain(|link| !link.touches(content));
                removed += before - links.len();
                if links.is_empty() {
                    self.by_source.remove(&source);
                }
            }
        }
        removed
    }

    /// Every link, ordered by source then rank
    pub(crate) fn snapshot(&self) -> Vec<RelatedLink> {
        let mut sources: Vec<&ContentRef> = self.by_source.keys().collect();
        sources.sort();
        sources
            .into_iter()
            .filter_map(|s| self.by_source.get(s))
            .flat_map(|links| links.iter().cloned())
            .collect()
    }
}

/// In-memory related link store
///
/// Both indexes sit behind one lock, so a replace is a single critical
/// section and readers see the old edge set or the new one.
#[derive(Clone, Default)]
pub struct InMemoryRelatedLinkStore {
    table: Arc<RwLock<LinkTable>>,
}

impl InMemoryRelatedLinkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `links`
    pub fn from_links(links: impl IntoIterator<Item = RelatedLink>) -> Self {
        let mut grouped: HashMap<ContentRef, Vec<RelatedLink>> = HashMap::new();
        for link in links {
            grouped.entry(link.source.clone()).or_default().push(link);
        }
        let mut table = LinkTable::default();
        for (source, links) in grouped {
            table.insert_source(&source, dedup_by_related(links));
        }
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    /// Every stored link, ordered by source then rank
    pub async fn snapshot(&self) -> Vec<RelatedLink> {
        self.table.read().await.snapshot()
    }

    /// Apply `mutate` to a copy of the table, hand the copy's links to
    /// `persist`, and install the copy only once `persist` succeeds
    ///
    /// The write lock is held throughout, so readers see either the old
    /// table or the persisted new one.
    pub(crate) async fn commit_with<R, Fut>(
        &self,
        mutate: impl FnOnce(&mut LinkTable) -> R,
        persist: impl FnOnce(Vec<RelatedLink>) -> Fut,
    ) -> Result<R>
    where
        Fut: Future<Output = Result<()>>,
    {
        let mut table = self.table.write().await;
        let mut staged = table.clone();
        let out = mutate(&mut staged);
        persist(staged.snapshot()).await?;
        *table = staged;
        Ok(out)
    }
}

/// Keep one link per related endpoint, the highest-similarity one
fn dedup_by_related(mut links: Vec<RelatedLink>) -> Vec<RelatedLink> {
    links.sort_by(|a, b| rank_order(a.similarity, &a.related, b.similarity, &b.related));
    let mut seen = HashSet::new();
    links.retain(|link| seen.insert(link.related.clone()));
    links
}

#[async_trait]
impl RelatedLinkStore for InMemoryRelatedLinkStore {
    async fn replace_for_source(
        &self,
        source: &ContentRef,
        candidates: &[Candidate],
    ) -> Result<usize> {
        Ok(self.table.write().await.replace(source, candidates))
    }

    async fn list_by_source(&self, source: &ContentRef) -> Result<Vec<RelatedLink>> {
        let table = self.table.read().await;
        Ok(table.by_source.get(source).cloned().unwrap_or_default())
    }

    async fn list_by_related(&self, related: &ContentRef) -> Result<Vec<RelatedLink>> {
        Ok(self.table.read().await.incoming(related))
    }

    async fn delete_by_endpoint(&self, content: &ContentRef) -> Result<usize> {
        Ok(self.table.write().await.delete_endpoint(content))
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.table.read().await.count())
    }
}
