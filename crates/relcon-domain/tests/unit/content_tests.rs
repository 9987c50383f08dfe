//! Unit tests for content identity and embeddable text

use std::collections::HashSet;

use relcon_domain::{ContentItem, ContentRef, Embeddable};

#[test]
fn test_content_ref_display() {
    let content = ContentRef::new("post", "42");
    assert_eq!(content.to_string(), "post:42");
}

#[test]
fn test_content_ref_identity() {
    let mut set = HashSet::new();
    set.insert(ContentRef::new("post", "1"));
    set.insert(ContentRef::new("post", "1"));
    set.insert(ContentRef::new("event", "1"));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_content_ref_ordering_is_type_then_id() {
    let mut refs = vec![
        ContentRef::new("post", "2"),
        ContentRef::new("event", "9"),
        ContentRef::new("post", "1"),
    ];
    refs.sort();
    assert_eq!(
        refs,
        vec![
            ContentRef::new("event", "9"),
            ContentRef::new("post", "1"),
            ContentRef::new("post", "2"),
        ]
    );
}

#[test]
fn test_content_item_embeddable_text_joins_fields() {
    let item = ContentItem::new(
        "post",
        "1",
        vec![
            "Title".to_string(),
            "<p>Body <b>text</b></p>".to_string(),
            "   ".to_string(),
            "Tags".to_string(),
        ],
    );

    assert_eq!(item.content_ref(), ContentRef::new("post", "1"));
    assert_eq!(item.embeddable_text(), "Title\n\nBody text\n\nTags");
}

#[test]
fn test_content_item_without_fields_is_empty() {
    let item = ContentItem::new("post", "1", Vec::new());
    assert!(item.embeddable_text().is_empty());
}

#[test]
fn test_content_item_deserializes_from_jsonl_shape() {
    let item: ContentItem =
        serde_json::from_str(r#"{"type":"post","id":"7","fields":["Hello"]}"#)
            .expect("valid item");
    assert_eq!(item.content_type, "post");
    assert_eq!(item.content_id, "7");
    assert_eq!(item.fields, vec!["Hello".to_string()]);

    let bare: ContentItem =
        serde_json::from_str(r#"{"type":"post","id":"8"}"#).expect("fields default");
    assert!(bare.fields.is_empty());
}
