//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers. The domain
//! defines them; `relcon-providers` implements them.
//!
//! - **providers/** - external services (embedding generation)
//! - **repositories/** - persistence of embeddings and related links

/// External service provider ports
pub mod providers;
/// Persistence ports
pub mod repositories;

pub use providers::{EmbeddingProvider, SharedEmbeddingProvider};
pub use repositories::{EmbeddingStore, RelatedLinkStore};
