//! Tests for embedding providers and their registration

use relcon_application::ports::registry::{
    EmbeddingProviderConfig, list_embedding_providers, resolve_embedding_provider,
};
use relcon_domain::ports::EmbeddingProvider;
use relcon_providers::NullEmbeddingProvider;

#[tokio::test]
async fn test_null_provider_returns_zero_vectors() {
    let provider = NullEmbeddingProvider::with_dimensions(8);
    let embedding = provider.embed("anything").await.expect("null never fails");

    assert_eq!(embedding.vector, vec![0.0; 8]);
    assert_eq!(embedding.dimensions, 8);
    assert_eq!(embedding.model, "null");
}

#[tokio::test]
async fn test_null_provider_batch_preserves_count() {
    let provider = NullEmbeddingProvider::new();
    let texts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let embeddings = provider.embed_batch(&texts).await.unwrap();

    assert_eq!(embeddings.len(), 3);
    assert!(embeddings.iter().all(|e| e.vector.len() == 1536));
}

#[test]
fn test_all_providers_registered() {
    let names: Vec<&str> = list_embedding_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    for expected in ["null", "openai", "ollama"] {
        assert!(names.contains(&expected), "missing {expected} in {names:?}");
    }
}

#[test]
fn test_resolve_null_uses_configured_dimensions() {
    let provider =
        resolve_embedding_provider(&EmbeddingProviderConfig::new("null").with_dimensions(64))
            .expect("null resolves");
    assert_eq!(provider.dimensions(), 64);
    assert_eq!(provider.provider_name(), "null");
}

#[test]
fn test_resolve_openai_requires_api_key() {
    let err = resolve_embedding_provider(&EmbeddingProviderConfig::new("openai"))
        .err()
        .expect("missing key must fail");
    assert!(err.contains("api_key"));
}

#[test]
fn test_resolve_openai_with_key() {
    let provider = resolve_embedding_provider(
        &EmbeddingProviderConfig::new("openai")
            .with_api_key("sk-test")
            .with_dimensions(256),
    )
    .expect("configured openai resolves");
    assert_eq!(provider.model(), "text-embedding-3-small");
    assert_eq!(provider.dimensions(), 256);
}

#[test]
fn test_resolve_ollama_defaults() {
    let provider = resolve_embedding_provider(
        &EmbeddingProviderConfig::new("ollama").with_base_url("http://localhost:11434"),
    )
    .expect("ollama resolves");
    assert_eq!(provider.model(), "nomic-embed-text");
    assert_eq!(provider.dimensions(), 768);
}

#[test]
fn test_resolve_unknown_provider_lists_available() {
    let err = resolve_embedding_provider(&EmbeddingProviderConfig::new("voyage"))
        .err()
        .expect("unknown provider");
    assert!(err.contains("Unknown embedding provider 'voyage'"));
}
