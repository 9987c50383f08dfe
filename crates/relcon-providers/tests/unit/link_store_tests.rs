//! Tests for the in-memory related link store

use relcon_domain::ports::RelatedLinkStore;
use relcon_domain::{Candidate, ContentRef};
use relcon_providers::InMemoryRelatedLinkStore;

fn post(id: &str) -> ContentRef {
    ContentRef::new("post", id)
}

#[tokio::test]
async fn test_replace_overwrites_previous_set() {
    let store = InMemoryRelatedLinkStore::new();
    store
        .replace_for_source(
            &post("a"),
            &[Candidate::new(post("b"), 0.9), Candidate::new(post("c"), 0.8)],
        )
        .await
        .unwrap();
    store
        .replace_for_source(&post("a"), &[Candidate::new(post("d"), 0.7)])
        .await
        .unwrap();

    let links = store.list_by_source(&post("a")).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].related, post("d"));
    assert!(store.list_by_related(&post("b")).await.unwrap().is_empty());
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_replace_with_empty_set_clears_source() {
    let store = InMemoryRelatedLinkStore::new();
    store
        .replace_for_source(&post("a"), &[Candidate::new(post("b"), 0.9)])
        .await
        .unwrap();
    let written = store.replace_for_source(&post("a"), &[]).await.unwrap();

    assert_eq!(written, 0);
    assert!(store.list_by_source(&post("a")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_candidates_keep_highest_similarity() {
    let store = InMemoryRelatedLinkStore::new();
    let written = store
        .replace_for_source(
            &post("a"),
            &[Candidate::new(post("b"), 0.6), Candidate::new(post("b"), 0.8)],
        )
        .await
        .unwrap();

    assert_eq!(written, 1);
    let links = store.list_by_source(&post("a")).await.unwrap();
    assert_eq!(links[0].similarity, 0.8);
}

#[tokio::test]
async fn test_lists_are_sorted_descending() {
    let store = InMemoryRelatedLinkStore::new();
    store
        .replace_for_source(
            &post("a"),
            &[Candidate::new(post("c"), 0.6), Candidate::new(post("b"), 0.9)],
        )
        .await
        .unwrap();
    store
        .replace_for_source(&post("x"), &[Candidate::new(post("b"), 0.7)])
        .await
        .unwrap();

    let outgoing = store.list_by_source(&post("a")).await.unwrap();
    assert_eq!(outgoing[0].related, post("b"));
    assert_eq!(outgoing[1].related, post("c"));

    let incoming = store.list_by_related(&post("b")).await.unwrap();
    assert_eq!(incoming.len(), 2);
    assert_eq!(incoming[0].source, post("a"));
    assert_eq!(incoming[1].source, post("x"));
}

#[tokio::test]
async fn test_delete_by_endpoint_cascades_both_roles() {
    let store = InMemoryRelatedLinkStore::new();
    store
        .replace_for_source(
            &post("a"),
            &[Candidate::new(post("b"), 0.9), Candidate::new(post("c"), 0.8)],
        )
        .await
        .unwrap();
    store
        .replace_for_source(&post("b"), &[Candidate::new(post("a"), 0.9)])
        .await
        .unwrap();
    store
        .replace_for_source(&post("c"), &[Candidate::new(post("b"), 0.5)])
        .await
        .unwrap();

    let removed = store.delete_by_endpoint(&post("b")).await.unwrap();

    assert_eq!(removed, 3);
    assert!(store.list_by_source(&post("b")).await.unwrap().is_empty());
    assert!(store.list_by_related(&post("b")).await.unwrap().is_empty());
    let remaining = store.list_by_source(&post("a")).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].related, post("c"));
    assert!(store.list_by_source(&post("c")).await.unwrap().is_empty());
}
