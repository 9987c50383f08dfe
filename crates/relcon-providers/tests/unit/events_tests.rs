//! Tests for event publishers

use futures::StreamExt;
use relcon_domain::events::{DomainEvent, EventPublisher};
use relcon_domain::ContentRef;
use relcon_providers::{NullEventPublisher, TokioEventPublisher};

#[tokio::test]
async fn test_null_publisher_accepts_everything() {
    let publisher = NullEventPublisher::new();
    publisher
        .publish(DomainEvent::ContentRemoved {
            content: ContentRef::new("post", "1"),
        })
        .await
        .unwrap();
    assert!(!publisher.has_subscribers());
}

#[tokio::test]
async fn test_tokio_publisher_delivers_to_stream() {
    let publisher = TokioEventPublisher::with_capacity(8);
    assert!(!publisher.has_subscribers());

    let mut stream = publisher.subscribe_stream();
    assert!(publisher.has_subscribers());

    let event = DomainEvent::RelatedContentSynced {
        content: ContentRef::new("post", "1"),
        link_count: 3,
    };
    publisher.publish(event.clone()).await.unwrap();

    assert_eq!(stream.next().await, Some(event));
}

#[tokio::test]
async fn test_tokio_publisher_without_subscribers_is_ok() {
    let publisher = TokioEventPublisher::new();
    publisher
        .publish(DomainEvent::EmbeddingGenerated {
            content: ContentRef::new("post", "1"),
            model: "null".to_string(),
        })
        .await
        .expect("publishing with no receivers still succeeds");
}
