//! Filesystem-backed embedding and related link stores
//!
//! Each store keeps its working set in the matching in-memory store and
//! rewrites one JSON snapshot on every mutation. The snapshot is built from
//! the state as it will be after the change, written to a temporary file and
//! renamed over the previous one; only then is the change applied in memory.
//! A failed write therefore leaves both the file and the readers' view on
//! the previous state.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use relcon_domain::entities::{ContentRef, RelatedLink, StoredEmbedding};
use relcon_domain::error::Result;
use relcon_domain::ports::{EmbeddingStore, RelatedLinkStore};
use relcon_domain::value_objects::{Candidate, NeighborQuery};

use crate::constants::{EMBEDDINGS_FILE, LINKS_FILE, SNAPSHOT_TMP_EXTENSION};
use crate::store::in_memory::{InMemoryEmbeddingStore, InMemoryRelatedLinkStore};

// File utility helpers
mod file_utils {
    use relcon_domain::error::{Error, Result};
    use serde::{Serialize, de::DeserializeOwned};
    use std::path::Path;

    use crate::constants::SNAPSHOT_TMP_EXTENSION;

    pub async fn exists(path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    pub async fn read_json<T: DeserializeOwned>(path: &Path, description: &str) -> Result<T> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to read {description}"), e))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::store(format!("Failed to parse {description}: {e}")))
    }

    /// Write JSON to `path.tmp`, then rename it over `path`
    pub async fn write_json_atomic<T: Serialize>(
        path: &Path,
        data: &T,
        description: &str,
    ) -> Result<()> {
        let content = serde_json::to_vec_pretty(data)
            .map_err(|e| Error::store(format!("Failed to serialize {description}: {e}")))?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(format!("Failed to create directory for {description}"), e)
            })?;
        }

        let tmp = path.with_extension(format!(
            "{}.{SNAPSHOT_TMP_EXTENSION}",
            path.extension().and_then(|e| e.to_str()).unwrap_or_default()
        ));
        tokio::fs::write(&tmp, content)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to write {description}"), e))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to replace {description}"), e))
    }
}

async fn load_or_default<T>(path: &Path, description: &str) -> Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    if file_utils::exists(path).await {
        file_utils::read_json(path, description).await
    } else {
        Ok(Vec::new())
    }
}

/// Filesystem embedding store
pub struct FilesystemEmbeddingStore {
    inner: InMemoryEmbeddingStore,
    path: PathBuf,
    // Serializes mutate-then-snapshot so the newest state is written last
    write_lock: Mutex<()>,
}

impl FilesystemEmbeddingStore {
    /// Open the store under `data_dir`, loading an existing snapshot
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let path = data_dir.as_ref().join(EMBEDDINGS_FILE);
        let embeddings: Vec<StoredEmbedding> = load_or_default(&path, "embedding snapshot").await?;
        debug!(path = %path.display(), count = embeddings.len(), "Loaded embedding snapshot");

        Ok(Self {
            inner: InMemoryEmbeddingStore::from_embeddings(embeddings),
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Snapshot file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, embeddings: &[StoredEmbedding]) -> Result<()> {
        file_utils::write_json_atomic(&self.path, &embeddings, "embedding snapshot").await
    }
}

#[async_trait]
impl EmbeddingStore for FilesystemEmbeddingStore {
    async fn upsert(
        &self,
        owner: &ContentRef,
        vector: Vec<f64>,
        model: &str,
        dimensions: usize,
    ) -> Result<StoredEmbedding> {
        let _guard = self.write_lock.lock().await;
        let stored = StoredEmbedding::new(owner.clone(), vector, model, dimensions)?;

        let mut next = self.inner.snapshot();
        next.retain(|e| &e.owner != owner);
        next.push(stored.clone());
        next.sort_by(|a, b| a.owner.cmp(&b.owner));
        self.persist(&next).await?;

        self.inner.insert_stored(stored.clone());
        Ok(stored)
    }

    async fn nearest_neighbors(&self, query: &NeighborQuery) -> Result<Vec<Candidate>> {
        self.inner.nearest_neighbors(query).await
    }

    async fn get(&self, owner: &ContentRef) -> Result<Option<StoredEmbedding>> {
        self.inner.get(owner).await
    }

    async fn delete_by_owner(&self, owner: &ContentRef) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut next = self.inner.snapshot();
        let before = next.len();
        next.retain(|e| &e.owner != owner);
        if next.len() == before {
            return Ok(false);
        }
        self.persist(&next).await?;
        self.inner.delete_by_owner(owner).await
    }

    async fn exists(&self, owner: &ContentRef) -> Result<bool> {
        self.inner.exists(owner).await
    }

    async fn count(&self) -> Result<usize> {
        self.inner.count().await
    }

    fn store_name(&self) -> &str {
        "filesystem"
    }
}

/// Filesystem related link store
///
/// Writers are serialized by the inner table's write lock.
pub struct FilesystemRelatedLinkStore {
    inner: InMemoryRelatedLinkStore,
    path: PathBuf,
}

impl FilesystemRelatedLinkStore {
    /// Open the store under `data_dir`, loading an existing snapshot
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let path = data_dir.as_ref().join(LINKS_FILE);
        let links: Vec<RelatedLink> = load_or_default(&path, "related link snapshot").await?;
        debug!(path = %path.display(), count = links.len(), "Loaded related link snapshot");

        Ok(Self {
            inner: InMemoryRelatedLinkStore::from_links(links),
            path,
        })
    }

    /// Snapshot file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, links: Vec<RelatedLink>) -> Result<()> {
        file_utils::write_json_atomic(&self.path, &links, "related link snapshot").await
    }
}

#[async_trait]
impl RelatedLinkStore for FilesystemRelatedLinkStore {
    async fn replace_for_source(
        &self,
        source: &ContentRef,
        candidates: &[Candidate],
    ) -> Result<usize> {
        self.inner
            .commit_with(
                |table| table.replace(source, candidates),
                |links| self.persist(links),
            )
            .await
    }

    async fn list_by_source(&self, source: &ContentRef) -> Result<Vec<RelatedLink>> {
        self.inner.list_by_source(source).await
    }

    async fn list_by_related(&self, related: &ContentRef) -> Result<Vec<RelatedLink>> {
        self.inner.list_by_related(related).await
    }

    async fn delete_by_endpoint(&self, content: &ContentRef) -> Result<usize> {
        if self.inner.list_by_source(content).await?.is_empty()
            && self.inner.list_by_related(content).await?.is_empty()
        {
            return Ok(0);
        }
        self.inner
            .commit_with(
                |table| table.delete_endpoint(content),
                |links| self.persist(links),
            )
            .await
    }

    async fn count(&self) -> Result<usize> {
        self.inner.count().await
    }
}
