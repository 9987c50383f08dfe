//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector returned by a provider |
//! | [`Candidate`] | Transient `(content, similarity)` search hit |
//! | [`RelatedItem`] | Neighbor found through either link direction |
//! | [`NeighborQuery`] | Nearest-neighbor query parameters |
//! | [`SimilarityConfig`] | Threshold, fan-out and ranking policy |

/// Similarity configuration value objects
pub mod config;
/// Semantic embedding value objects
pub mod embedding;
/// Similarity value objects and cosine scoring
pub mod similarity;
/// Provider and backend kinds
pub mod types;

pub use config::{RankingStrategy, SimilarityConfig};
pub use embedding::Embedding;
pub use similarity::{
    Candidate, NeighborQuery, RelatedItem, compute_norm, cosine_similarity,
    cosine_similarity_with_norm, rank_order,
};
pub use types::{EmbeddingProviderKind, StorageBackendKind};
