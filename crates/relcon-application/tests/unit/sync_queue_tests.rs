//! Tests for the background sync queue

use std::sync::Arc;
use std::time::Duration;

use relcon_application::{SyncQueue, SyncQueueConfig};
use relcon_domain::ContentRef;
use relcon_domain::ports::EmbeddingStore;

use crate::support::{FixedVectorProvider, harness, item};

fn provider() -> FixedVectorProvider {
    FixedVectorProvider::new(&[
        ("first draft", vec![1.0, 0.0]),
        ("final draft", vec![0.0, 1.0]),
        ("other", vec![0.5, 0.5]),
    ])
}

fn config() -> SyncQueueConfig {
    SyncQueueConfig {
        max_attempts: 3,
        backoff: Duration::from_secs(30),
        capacity: 16,
    }
}

#[tokio::test(start_paused = true)]
async fn test_pending_item_is_replaced_not_duplicated() {
    let h = harness(provider(), Default::default());
    let queue = SyncQueue::start(h.engine.clone(), config());

    assert!(queue.enqueue(Arc::new(item("post", "a", "first draft"))).await.unwrap());
    assert!(!queue.enqueue(Arc::new(item("post", "a", "final draft"))).await.unwrap());
    assert!(queue.enqueue(Arc::new(item("post", "b", "other"))).await.unwrap());
    assert_eq!(queue.pending().await, 2);

    let stats = queue.shutdown().await.unwrap();
    assert_eq!(stats.succeeded, 2);
    assert_eq!(h.provider.calls(), 2);

    let stored = h
        .embeddings
        .get(&ContentRef::new("post", "a"))
        .await
        .unwrap()
        .expect("embedded");
    assert_eq!(stored.vector, vec![0.0, 1.0]);
}

#[tokio::test(start_paused = true)]
async fn test_transient_failures_are_retried() {
    let h = harness(provider().failing_first(2), Default::default());
    let queue = SyncQueue::start(h.engine.clone(), config());

    queue
        .enqueue(Arc::new(item("post", "a", "first draft")))
        .await
        .unwrap();
    let stats = queue.shutdown().await.unwrap();

    assert_eq!(stats.succeeded, 1);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.retries, 2);
    assert_eq!(h.provider.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_gives_up_after_max_attempts() {
    let h = harness(provider().failing_first(10), Default::default());
    let queue = SyncQueue::start(h.engine.clone(), config());

    queue
        .enqueue(Arc::new(item("post", "a", "first draft")))
        .await
        .unwrap();
    queue
        .enqueue(Arc::new(item("post", "b", "other")))
        .await
        .unwrap();
    let stats = queue.shutdown().await.unwrap();

    assert_eq!(stats.failed, 2);
    assert_eq!(stats.retries, 4);
    assert_eq!(h.provider.calls(), 6);
    assert_eq!(h.embeddings.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_enqueue_after_shutdown_fails() {
    let h = harness(provider(), Default::default());
    let queue = SyncQueue::start(h.engine.clone(), config());
    queue.shutdown().await.unwrap();

    assert!(
        queue
            .enqueue(Arc::new(item("post", "a", "first draft")))
            .await
            .is_err()
    );
    assert!(queue.shutdown().await.is_err());
}
