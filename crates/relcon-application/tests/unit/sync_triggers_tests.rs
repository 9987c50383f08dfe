//! Tests for the save/delete hooks

use std::sync::Arc;

use relcon_application::{
    ChangeHint, RelatedContentServiceInterface, SyncDispatch, SyncOutcome, SyncQueue,
    SyncQueueConfig, SyncTriggers, TriggerOutcome,
};
use relcon_domain::ContentRef;

use crate::support::{FixedVectorProvider, at_cos, harness, item};

fn provider() -> FixedVectorProvider {
    FixedVectorProvider::new(&[("alpha", vec![1.0, 0.0]), ("beta", at_cos(0.9))])
}

#[tokio::test]
async fn test_new_item_syncs_even_without_embeddable_change() {
    let h = harness(provider(), Default::default());
    let triggers = SyncTriggers::new(h.engine.clone(), SyncDispatch::Inline);

    let outcome = triggers
        .on_saved(Arc::new(item("post", "a", "alpha")), ChangeHint::OtherFieldsChanged)
        .await
        .unwrap();
    assert_eq!(outcome, TriggerOutcome::Synced(SyncOutcome::Synced { link_count: 0 }));
}

#[tokio::test]
async fn test_unrelated_field_change_skips_embedded_item() {
    let h = harness(provider(), Default::default());
    let triggers = SyncTriggers::new(h.engine.clone(), SyncDispatch::Inline);
    let a = Arc::new(item("post", "a", "alpha"));
    triggers
        .on_saved(a.clone(), ChangeHint::EmbeddableFieldsChanged)
        .await
        .unwrap();

    let outcome = triggers
        .on_saved(a, ChangeHint::OtherFieldsChanged)
        .await
        .unwrap();
    assert_eq!(outcome, TriggerOutcome::Unchanged);
    assert_eq!(h.provider.calls(), 1);
}

#[tokio::test]
async fn test_queued_dispatch_defers_sync() {
    let h = harness(provider(), Default::default());
    let queue = Arc::new(SyncQueue::start(h.engine.clone(), SyncQueueConfig::default()));
    let triggers = SyncTriggers::new(h.engine.clone(), SyncDispatch::Queued(queue.clone()));

    let outcome = triggers
        .on_saved(Arc::new(item("post", "a", "alpha")), ChangeHint::EmbeddableFieldsChanged)
        .await
        .unwrap();
    assert_eq!(outcome, TriggerOutcome::Enqueued);

    let stats = queue.shutdown().await.unwrap();
    assert_eq!(stats.succeeded, 1);
    assert!(
        h.engine
            .has_embedding(&ContentRef::new("post", "a"))
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_delete_removes_embedding_and_links() {
    let h = harness(provider(), Default::default());
    let triggers = SyncTriggers::new(h.engine.clone(), SyncDispatch::Inline);
    for (id, text) in [("a", "alpha"), ("b", "beta")] {
        triggers
            .on_saved(Arc::new(item("post", id, text)), ChangeHint::EmbeddableFieldsChanged)
            .await
            .unwrap();
    }
    assert_eq!(h.engine.stats().await.unwrap().links, 1);

    triggers.on_deleted(&ContentRef::new("post", "a")).await.unwrap();

    let stats = h.engine.stats().await.unwrap();
    assert_eq!(stats.embeddings, 1);
    assert_eq!(stats.links, 0);
}
