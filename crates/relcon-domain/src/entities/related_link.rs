//! Directed similarity edge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::ContentRef;
use crate::value_objects::Candidate;

/// Entity: directed edge `source -> related` with a similarity score
///
/// `(source, related)` is unique. The reversed edge is a separate record,
/// since each sync pass only writes the source's outgoing edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedLink {
    /// Item whose sync produced the edge
    pub source: ContentRef,
    /// Item found similar to the source
    pub related: ContentRef,
    /// Cosine similarity at sync time (not clamped)
    pub similarity: f64,
    /// When the edge was written
    pub created_at: DateTime<Utc>,
}

impl RelatedLink {
    /// Build an edge from a source and one of its candidates
    pub fn from_candidate(source: &ContentRef, candidate: &Candidate) -> Self {
        Self {
            source: source.clone(),
            related: candidate.content.clone(),
            similarity: candidate.similarity,
            created_at: Utc::now(),
        }
    }

    /// The endpoint that is not `me`, if `me` is one of the two
    pub fn other_endpoint(&self, me: &ContentRef) -> Option<&ContentRef> {
        if &self.source == me {
            Some(&self.related)
        } else if &self.related == me {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Whether either endpoint is `content`
    pub fn touches(&self, content: &ContentRef) -> bool {
        &self.source == content || &self.related == content
    }
}
