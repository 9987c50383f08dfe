//! Unit tests for embedding entities and value objects

use relcon_domain::{ContentRef, Embedding, StoredEmbedding};

#[test]
fn test_stored_embedding_accepts_matching_dimensions() {
    let stored = StoredEmbedding::new(ContentRef::new("post", "1"), vec![0.1, 0.2], "m", 2)
        .expect("dimensions match");
    assert_eq!(stored.dimensions, 2);
    assert_eq!(stored.model, "m");
}

#[test]
fn test_stored_embedding_rejects_mismatched_dimensions() {
    let err = StoredEmbedding::new(ContentRef::new("post", "1"), vec![0.1], "m", 3)
        .expect_err("length mismatch must fail");
    assert!(err.is_invalid_argument());
}

#[test]
fn test_embedding_consistency() {
    let embedding = Embedding {
        vector: vec![0.0; 4],
        model: "null".to_string(),
        dimensions: 3,
    };
    assert!(!embedding.is_consistent());
}
