//! Unit tests for related link entities

use relcon_domain::{Candidate, ContentRef, RelatedLink};

#[test]
fn test_link_from_candidate() {
    let a = ContentRef::new("post", "a");
    let b = ContentRef::new("post", "b");
    let link = RelatedLink::from_candidate(&a, &Candidate::new(b.clone(), 0.9));

    assert_eq!(link.source, a);
    assert_eq!(link.related, b);
    assert_eq!(link.similarity, 0.9);
}

#[test]
fn test_other_endpoint() {
    let a = ContentRef::new("post", "a");
    let b = ContentRef::new("event", "b");
    let c = ContentRef::new("post", "c");
    let link = RelatedLink::from_candidate(&a, &Candidate::new(b.clone(), 0.7));

    assert_eq!(link.other_endpoint(&a), Some(&b));
    assert_eq!(link.other_endpoint(&b), Some(&a));
    assert_eq!(link.other_endpoint(&c), None);
    assert!(link.touches(&b));
    assert!(!link.touches(&c));
}
