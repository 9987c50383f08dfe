//! Domain layer constants
//!
//! Defaults that shape linking behaviour. Provider and infrastructure
//! constants live in their own crates.

// ============================================================================
// SIMILARITY DOMAIN CONSTANTS
// ============================================================================

/// Default number of related items kept per source
pub const DEFAULT_MAX_RELATED_ITEMS: usize = 10;

/// Default minimum similarity for a candidate to become a link
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Default limit for typed related lookups
pub const DEFAULT_RELATED_OF_TYPE_LIMIT: usize = 5;

/// Default limit for free-text search
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

// ============================================================================
// EMBEDDING DOMAIN CONSTANTS
// ============================================================================

/// Default embedding dimensions (text-embedding-3-small)
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;

/// Separator between embeddable fields
pub const EMBEDDABLE_FIELD_SEPARATOR: &str = "\n\n";
