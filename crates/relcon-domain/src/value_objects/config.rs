//! Similarity configuration value objects

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_RELATED_ITEMS, DEFAULT_SIMILARITY_THRESHOLD};
use crate::error::{Error, Result};

/// How candidates from several types are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RankingStrategy {
    /// Each type contributes at most `ceil(max / types)` candidates before
    /// the merged top-K is taken. A prolific type cannot crowd out the
    /// others, so the result is not always the global top-K.
    #[default]
    PerTypeQuota,
    /// Each type may contribute up to `max` candidates; the merged list is
    /// the true global top-K.
    Global,
}

/// Linking behaviour, read-only after construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Maximum related items stored per source
    pub max_related_items: usize,
    /// Minimum similarity (inclusive), in `[0, 1]`
    pub similarity_threshold: f64,
    /// Ordered set of types searched for candidates; empty = source type only
    pub candidate_types: Vec<String>,
    /// Fan-out policy across candidate types
    pub ranking: RankingStrategy,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            max_related_items: DEFAULT_MAX_RELATED_ITEMS,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            candidate_types: Vec::new(),
            ranking: RankingStrategy::default(),
        }
    }
}

impl SimilarityConfig {
    /// Check ranges
    pub fn validate(&self) -> Result<()> {
        if self.max_related_items == 0 {
            return Err(Error::config("max_related_items must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::config(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }

    /// Types searched for a source of `source_type`, duplicates removed
    pub fn resolve_types(&self, source_type: &str) -> Vec<String> {
        if self.candidate_types.is_empty() {
            return vec![source_type.to_string()];
        }
        let mut types: Vec<String> = Vec::with_capacity(self.candidate_types.len());
        for t in &self.candidate_types {
            if !types.contains(t) {
                types.push(t.clone());
            }
        }
        types
    }

    /// Raw candidates requested from each type
    pub fn per_type_limit(&self, type_count: usize) -> usize {
        match self.ranking {
            RankingStrategy::PerTypeQuota => self.max_related_items.div_ceil(type_count.max(1)),
            RankingStrategy::Global => self.max_related_items,
        }
    }
}
