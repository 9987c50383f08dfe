//! Persistence Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingStore | One embedding per owner, nearest-neighbor queries |
//! | RelatedLinkStore | Directed similarity edges with two lookup directions |

/// Embedding store port
pub mod embedding_store;
/// Related link store port
pub mod related_link_store;

pub use embedding_store::EmbeddingStore;
pub use related_link_store::RelatedLinkStore;
