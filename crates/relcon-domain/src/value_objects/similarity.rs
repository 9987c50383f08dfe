//! Similarity value objects and cosine scoring

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::entities::ContentRef;

/// Value Object: transient search hit
///
/// Produced by nearest-neighbor queries and consumed by ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Matched content item
    pub content: ContentRef,
    /// Cosine similarity to the query vector
    pub similarity: f64,
}

impl Candidate {
    /// Create a candidate
    pub fn new(content: ContentRef, similarity: f64) -> Self {
        Self {
            content,
            similarity,
        }
    }
}

/// Value Object: neighbor of an item found through either link direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedItem {
    /// The other endpoint
    pub content: ContentRef,
    /// Highest similarity among the edges joining the two items
    pub similarity: f64,
}

/// Parameters of a nearest-neighbor query
///
/// `owner_types` empty means every type. `threshold` of `None` disables
/// the similarity floor (free-text search uses that).
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborQuery {
    /// Query vector
    pub vector: Vec<f64>,
    /// Restrict to these owner types
    pub owner_types: Vec<String>,
    /// Owner never returned (the item being synced)
    pub exclude: Option<ContentRef>,
    /// Minimum similarity, inclusive
    pub threshold: Option<f64>,
    /// Maximum number of results
    pub limit: usize,
}

impl NeighborQuery {
    /// Query across all types with no threshold
    pub fn new(vector: Vec<f64>, limit: usize) -> Self {
        Self {
            vector,
            owner_types: Vec::new(),
            exclude: None,
            threshold: None,
            limit,
        }
    }

    /// Restrict to one owner type
    pub fn with_type(mut self, owner_type: impl Into<String>) -> Self {
        self.owner_types = vec![owner_type.into()];
        self
    }

    /// Restrict to several owner types
    pub fn with_types(mut self, owner_types: Vec<String>) -> Self {
        self.owner_types = owner_types;
        self
    }

    /// Exclude one owner
    pub fn excluding(mut self, owner: ContentRef) -> Self {
        self.exclude = Some(owner);
        self
    }

    /// Set the inclusive similarity floor
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Whether an owner passes the type and exclusion filters
    pub fn admits(&self, owner: &ContentRef) -> bool {
        if self.exclude.as_ref() == Some(owner) {
            return false;
        }
        self.owner_types.is_empty() || self.owner_types.iter().any(|t| owner.is_type(t))
    }

    /// Whether a similarity passes the threshold
    pub fn passes(&self, similarity: f64) -> bool {
        self.threshold.is_none_or(|t| similarity >= t)
    }
}

/// Cosine similarity, `1 - cosine_distance`
///
/// Mismatched lengths and zero-norm vectors score `0.0`.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    cosine_similarity_with_norm(a, b, compute_norm(a))
}

/// Cosine similarity with a precomputed norm for `a`
pub fn cosine_similarity_with_norm(a: &[f64], b: &[f64], norm_a: f64) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_b = compute_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

/// Compute the L2 norm of a vector
pub fn compute_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Ranking order: similarity descending, then content ascending
pub fn rank_order(a_sim: f64, a: &ContentRef, b_sim: f64, b: &ContentRef) -> Ordering {
    b_sim
        .partial_cmp(&a_sim)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.cmp(b))
}
