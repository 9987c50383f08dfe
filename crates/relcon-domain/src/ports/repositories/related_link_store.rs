use async_trait::async_trait;

use crate::entities::{ContentRef, RelatedLink};
use crate::error::Result;
use crate::value_objects::Candidate;

/// Related Link Persistence Interface
///
/// Stores directed edges unique on `(source, related)`. Both list methods
/// return links ordered by similarity descending.
#[async_trait]
pub trait RelatedLinkStore: Send + Sync {
    /// Atomically replace every outgoing edge of `source`
    ///
    /// Readers observe either the old set or the new one. Returns the number
    /// of edges written.
    async fn replace_for_source(
        &self,
        source: &ContentRef,
        candidates: &[Candidate],
    ) -> Result<usize>;

    /// Edges whose source is `source`
    async fn list_by_source(&self, source: &ContentRef) -> Result<Vec<RelatedLink>>;

    /// Edges whose related endpoint is `related`
    async fn list_by_related(&self, related: &ContentRef) -> Result<Vec<RelatedLink>>;

    /// Remove every edge touching `content`; returns the number removed
    async fn delete_by_endpoint(&self, content: &ContentRef) -> Result<usize>;

    /// Total number of edges
    async fn count(&self) -> Result<usize>;
}
