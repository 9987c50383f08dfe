//! Unit tests for provider and backend kinds

use relcon_domain::{EmbeddingProviderKind, StorageBackendKind};

#[test]
fn test_provider_kind_from_string() {
    assert_eq!(
        EmbeddingProviderKind::from_string("OpenAI"),
        Some(EmbeddingProviderKind::OpenAI)
    );
    assert_eq!(
        EmbeddingProviderKind::from_string("ollama"),
        Some(EmbeddingProviderKind::Ollama)
    );
    assert_eq!(EmbeddingProviderKind::from_string("milvus"), None);
}

#[test]
fn test_provider_kind_display_round_trips_through_from_string() {
    for name in EmbeddingProviderKind::supported_providers() {
        let kind = EmbeddingProviderKind::from_string(name).expect("supported name");
        assert_eq!(kind.to_string(), *name);
    }
}

#[test]
fn test_provider_kind_serde_lowercase() {
    let kind: EmbeddingProviderKind = serde_json::from_str("\"null\"").expect("valid kind");
    assert_eq!(kind, EmbeddingProviderKind::Null);
    assert_eq!(
        serde_json::to_string(&EmbeddingProviderKind::OpenAI).expect("serializes"),
        "\"openai\""
    );
}

#[test]
fn test_storage_backend_kind() {
    assert_eq!(StorageBackendKind::default(), StorageBackendKind::Filesystem);
    assert_eq!(
        StorageBackendKind::from_string("in-memory"),
        Some(StorageBackendKind::Memory)
    );
    assert_eq!(StorageBackendKind::Memory.to_string(), "memory");
}
