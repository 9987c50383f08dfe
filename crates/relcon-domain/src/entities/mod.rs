//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`ContentRef`] | `(type, id)` identity of a content item |
//! | [`StoredEmbedding`] | One embedding per content item |
//! | [`RelatedLink`] | Directed similarity edge between two items |

/// Content identity and the embeddable capability
pub mod content;
/// Persisted embedding entity
pub mod embedding;
/// Directed similarity edge
pub mod related_link;

pub use content::{ContentItem, ContentRef, Embeddable, strip_tags};
pub use embedding::StoredEmbedding;
pub use related_link::RelatedLink;
