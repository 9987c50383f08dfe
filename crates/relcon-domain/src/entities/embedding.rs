//! Persisted embedding entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::ContentRef;
use crate::error::{Error, Result};

/// Entity: the embedding owned by one content item
///
/// ## Business Rules
///
/// - At most one per owner; re-embedding overwrites in place
/// - `vector.len() == dimensions` always holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEmbedding {
    /// Owning content item
    pub owner: ContentRef,
    /// Embedding vector
    pub vector: Vec<f64>,
    /// Model that produced the vector
    pub model: String,
    /// Vector length
    pub dimensions: usize,
    /// Last write time
    pub updated_at: DateTime<Utc>,
}

impl StoredEmbedding {
    /// Create an embedding, rejecting a vector whose length differs from `dimensions`
    pub fn new(
        owner: ContentRef,
        vector: Vec<f64>,
        model: impl Into<String>,
        dimensions: usize,
    ) -> Result<Self> {
        if vector.len() != dimensions {
            return Err(Error::invalid_argument(format!(
                "Embedding for {owner} has {} values but declares {dimensions} dimensions",
                vector.len()
            )));
        }
        Ok(Self {
            owner,
            vector,
            model: model.into(),
            dimensions,
            updated_at: Utc::now(),
        })
    }
}
