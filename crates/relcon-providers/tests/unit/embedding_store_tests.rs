//! Tests for the in-memory embedding store

use relcon_domain::ports::EmbeddingStore;
use relcon_domain::{ContentRef, NeighborQuery};
use relcon_providers::InMemoryEmbeddingStore;

fn post(id: &str) -> ContentRef {
    ContentRef::new("post", id)
}

async fn seeded() -> InMemoryEmbeddingStore {
    let store = InMemoryEmbeddingStore::new();
    store.upsert(&post("a"), vec![1.0, 0.0], "m", 2).await.unwrap();
    store.upsert(&post("b"), vec![0.9, 0.1], "m", 2).await.unwrap();
    store.upsert(&post("c"), vec![0.0, 1.0], "m", 2).await.unwrap();
    store
        .upsert(&ContentRef::new("event", "e"), vec![1.0, 0.0], "m", 2)
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn test_upsert_is_idempotent() {
    let store = InMemoryEmbeddingStore::new();
    store.upsert(&post("a"), vec![1.0, 0.0], "m", 2).await.unwrap();
    store.upsert(&post("a"), vec![0.0, 1.0], "m2", 2).await.unwrap();

    assert_eq!(store.count().await.unwrap(), 1);
    let stored = store.get(&post("a")).await.unwrap().expect("present");
    assert_eq!(stored.vector, vec![0.0, 1.0]);
    assert_eq!(stored.model, "m2");
}

#[tokio::test]
async fn test_upsert_rejects_length_mismatch() {
    let store = InMemoryEmbeddingStore::new();
    let err = store
        .upsert(&post("a"), vec![1.0], "m", 2)
        .await
        .expect_err("mismatch");
    assert!(err.is_invalid_argument());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_nearest_neighbors_orders_and_filters_by_type() {
    let store = seeded().await;
    let hits = store
        .nearest_neighbors(&NeighborQuery::new(vec![1.0, 0.0], 10).with_type("post"))
        .await
        .unwrap();

    let owners: Vec<&str> = hits.iter().map(|c| c.content.content_id.as_str()).collect();
    assert_eq!(owners, vec!["a", "b", "c"]);
    assert!((hits[0].similarity - 1.0).abs() < 1e-9);
    assert!(hits[2].similarity.abs() < 1e-9);
}

#[tokio::test]
async fn test_nearest_neighbors_excludes_owner() {
    let store = seeded().await;
    let hits = store
        .nearest_neighbors(
            &NeighborQuery::new(vec![1.0, 0.0], 10)
                .with_type("post")
                .excluding(post("a")),
        )
        .await
        .unwrap();
    assert!(hits.iter().all(|c| c.content != post("a")));
}

#[tokio::test]
async fn test_threshold_is_inclusive_and_monotonic() {
    let store = seeded().await;
    let mut previous = usize::MAX;
    for threshold in [0.0, 0.5, 0.9, 1.0] {
        let hits = store
            .nearest_neighbors(&NeighborQuery::new(vec![1.0, 0.0], 10).with_threshold(threshold))
            .await
            .unwrap();
        assert!(hits.iter().all(|c| c.similarity >= threshold));
        assert!(hits.len() <= previous);
        previous = hits.len();
    }
}

#[tokio::test]
async fn test_limit_keeps_best_with_deterministic_ties() {
    let store = seeded().await;
    // post:a and event:e tie at 1.0; event sorts first
    let hits = store
        .nearest_neighbors(&NeighborQuery::new(vec![1.0, 0.0], 2))
        .await
        .unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].content, ContentRef::new("event", "e"));
    assert_eq!(hits[1].content, post("a"));
}

#[tokio::test]
async fn test_zero_limit_and_zero_vectors() {
    let store = seeded().await;
    assert!(store
        .nearest_neighbors(&NeighborQuery::new(vec![1.0, 0.0], 0))
        .await
        .unwrap()
        .is_empty());

    let hits = store
        .nearest_neighbors(&NeighborQuery::new(vec![0.0, 0.0], 10))
        .await
        .unwrap();
    assert_eq!(hits.len(), 4);
    assert!(hits.iter().all(|c| c.similarity == 0.0));
}

#[tokio::test]
async fn test_delete_and_exists() {
    let store = seeded().await;
    assert!(store.exists(&post("a")).await.unwrap());
    assert!(store.delete_by_owner(&post("a")).await.unwrap());
    assert!(!store.delete_by_owner(&post("a")).await.unwrap());
    assert!(!store.exists(&post("a")).await.unwrap());
}

#[tokio::test]
async fn test_limit_far_above_store_size_returns_every_match() {
    let store = seeded().await;
    for limit in [usize::MAX, 1 << 60] {
        let hits = store
            .nearest_neighbors(&NeighborQuery::new(vec![1.0, 0.0], limit))
            .await
            .unwrap();
        assert_eq!(hits.len(), 4);
    }
}
