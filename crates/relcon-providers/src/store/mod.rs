//! Embedding and Related Link Store Implementations
//!
//! | Store | Persistence | Notes |
//! |-------|-------------|-------|
//! | InMemoryEmbeddingStore | none | DashMap, exact cosine scan |
//! | InMemoryRelatedLinkStore | none | one lock over both indexes |
//! | FilesystemEmbeddingStore | JSON snapshot | wraps the in-memory store |
//! | FilesystemRelatedLinkStore | JSON snapshot | wraps the in-memory store |

pub mod filesystem;
pub mod in_memory;

pub use filesystem::{FilesystemEmbeddingStore, FilesystemRelatedLinkStore};
pub use in_memory::{InMemoryEmbeddingStore, InMemoryRelatedLinkStore};
