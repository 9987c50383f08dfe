//! Provider output before it is attached to an owner

use serde::{Deserialize, Serialize};

/// Vector a provider produced for one text
///
/// Attached to an owner it becomes a
/// [`StoredEmbedding`](crate::entities::StoredEmbedding).
///
/// ```rust
/// use relcon_domain::Embedding;
///
/// let e = Embedding::new(vec![0.1, 0.2, 0.3], "text-embedding-3-small");
/// assert_eq!(e.dimensions, 3);
/// assert!(e.is_consistent());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    pub vector: Vec<f64>,
    /// Model identifier reported by the provider
    pub model: String,
    pub dimensions: usize,
}

impl Embedding {
    /// Embedding whose declared dimensions equal the vector length
    pub fn new(vector: Vec<f64>, model: impl Into<String>) -> Self {
        Self {
            dimensions: vector.len(),
            vector,
            model: model.into(),
        }
    }

    /// Declared dimensions agree with the vector
    pub fn is_consistent(&self) -> bool {
        self.dimensions == self.vector.len()
    }
}
