//! Compile-time registry of embedding backends
//!
//! Each backend crate contributes an [`EmbeddingProviderEntry`] to
//! [`EMBEDDING_PROVIDERS`]; lookup happens by name when the context is built.

use std::sync::Arc;

use relcon_domain::ports::EmbeddingProvider;

/// Settings handed to a backend factory
///
/// Backends read the fields they understand. Unset fields mean "use the
/// backend default".
#[derive(Debug, Clone, Default)]
pub struct EmbeddingProviderConfig {
    /// Registered backend name
    pub provider: String,
    pub model: Option<String>,
    pub api_key: Option<String>,
    /// Endpoint root, without the `/embeddings` suffix
    pub base_url: Option<String>,
    pub dimensions: Option<usize>,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl EmbeddingProviderConfig {
    /// Settings for `provider` with every optional field unset
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Self::default()
        }
    }

    pub fn with_model(self, model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            ..self
        }
    }

    pub fn with_api_key(self, key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            ..self
        }
    }

    pub fn with_base_url(self, url: impl Into<String>) -> Self {
        Self {
            base_url: Some(url.into()),
            ..self
        }
    }

    pub fn with_dimensions(self, dimensions: usize) -> Self {
        Self {
            dimensions: Some(dimensions),
            ..self
        }
    }

    pub fn with_timeout_secs(self, secs: u64) -> Self {
        Self {
            timeout_secs: Some(secs),
            ..self
        }
    }
}

/// Builds a backend from settings, or explains why it cannot
pub type EmbeddingProviderFactory =
    fn(&EmbeddingProviderConfig) -> Result<Arc<dyn EmbeddingProvider>, String>;

/// One registered backend
pub struct EmbeddingProviderEntry {
    /// Lookup key, matched against [`EmbeddingProviderConfig::provider`]
    pub name: &'static str,
    /// Shown by `relcon providers`
    pub description: &'static str,
    pub factory: EmbeddingProviderFactory,
}

#[linkme::distributed_slice]
pub static EMBEDDING_PROVIDERS: [EmbeddingProviderEntry] = [..];

/// Build the backend named by `config.provider`
///
/// Fails with a message listing the registered names when nothing matches,
/// or with the factory's own message when it rejects the settings.
pub fn resolve_embedding_provider(
    config: &EmbeddingProviderConfig,
) -> Result<Arc<dyn EmbeddingProvider>, String> {
    match EMBEDDING_PROVIDERS
        .iter()
        .find(|entry| entry.name == config.provider)
    {
        Some(entry) => (entry.factory)(config),
        None => {
            let names: Vec<&str> = EMBEDDING_PROVIDERS.iter().map(|e| e.name).collect();
            Err(format!(
                "Unknown embedding provider '{}'. Available providers: {names:?}",
                config.provider
            ))
        }
    }
}

/// `(name, description)` for every registered backend, in link order
pub fn list_embedding_providers() -> Vec<(&'static str, &'static str)> {
    EMBEDDING_PROVIDERS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
