//! Bootstrap
//!
//! Turns an [`AppConfig`] into a running engine: picks the embedding
//! provider, opens the stores and wires the event publisher.

use std::sync::Arc;

use tracing::{info, warn};

use relcon_application::{
    EmbeddingProviderConfig, RelatedContentServiceInterface, SimilarityEngine, SyncDispatch,
    SyncQueue, SyncTriggers, resolve_embedding_provider,
};
use relcon_domain::error::{Error, Result};
use relcon_domain::ports::{EmbeddingStore, RelatedLinkStore, SharedEmbeddingProvider};
use relcon_domain::{EmbeddingProviderKind, StorageBackendKind};
use relcon_providers::{
    FilesystemEmbeddingStore, FilesystemRelatedLinkStore, InMemoryEmbeddingStore,
    InMemoryRelatedLinkStore, TokioEventPublisher,
};

use crate::config::{AppConfig, EmbeddingSettings, StorageSettings};

/// Registry config for the provider `settings` select
///
/// `Ok(None)` means no provider (`provider = "none"`). A provider missing
/// its required setting falls back to the null provider when
/// `fallback_to_null` is set and is a configuration error otherwise.
pub fn select_embedding_provider(
    settings: &EmbeddingSettings,
) -> Result<Option<EmbeddingProviderConfig>> {
    let null = || {
        EmbeddingProviderConfig::new(EmbeddingProviderKind::Null.to_string())
            .with_dimensions(settings.dimensions)
    };

    if settings.provider == EmbeddingProviderKind::None {
        return Ok(None);
    }
    if !settings.enabled {
        info!("Embedding disabled; using the null provider");
        return Ok(Some(null()));
    }

    let missing = match settings.provider {
        EmbeddingProviderKind::OpenAI => {
            let openai = &settings.openai;
            match openai.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty()) {
                Some(api_key) => {
                    return Ok(Some(
                        EmbeddingProviderConfig::new(settings.provider.to_string())
                            .with_api_key(api_key)
                            .with_base_url(&openai.base_url)
                            .with_model(&openai.model)
                            .with_dimensions(openai.dimensions)
                            .with_timeout_secs(openai.timeout_secs),
                    ));
                }
                None => "embedding.openai.api_key",
            }
        }
        EmbeddingProviderKind::Ollama => {
            let ollama = &settings.ollama;
            match ollama.base_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
                Some(base_url) => {
                    return Ok(Some(
                        EmbeddingProviderConfig::new(settings.provider.to_string())
                            .with_base_url(base_url)
                            .with_model(&ollama.model)
                            .with_dimensions(ollama.dimensions)
                            .with_timeout_secs(ollama.timeout_secs),
                    ));
                }
                None => "embedding.ollama.base_url",
            }
        }
        EmbeddingProviderKind::Null | EmbeddingProviderKind::None => return Ok(Some(null())),
    };

    if settings.fallback_to_null {
        warn!(
            provider = %settings.provider,
            missing,
            "Embedding provider is not configured; falling back to the null provider"
        );
        Ok(Some(null()))
    } else {
        Err(Error::config(format!(
            "Embedding provider '{}' requires {missing}",
            settings.provider
        )))
    }
}

/// Build the selected provider through the registry
pub fn create_embedding_provider(
    settings: &EmbeddingSettings,
) -> Result<Option<SharedEmbeddingProvider>> {
    let Some(config) = select_embedding_provider(settings)? else {
        info!("No embedding provider configured; embedding operations are unavailable");
        return Ok(None);
    };
    let provider = resolve_embedding_provider(&config).map_err(Error::config)?;
    info!(
        provider = provider.provider_name(),
        model = provider.model(),
        dimensions = provider.dimensions(),
        "Embedding provider ready"
    );
    Ok(Some(provider))
}

async fn open_stores(
    storage: &StorageSettings,
) -> Result<(Arc<dyn EmbeddingStore>, Arc<dyn RelatedLinkStore>)> {
    let (embeddings, links): (Arc<dyn EmbeddingStore>, Arc<dyn RelatedLinkStore>) =
        match storage.backend {
            StorageBackendKind::Memory => (
                Arc::new(InMemoryEmbeddingStore::new()),
                Arc::new(InMemoryRelatedLinkStore::new()),
            ),
            StorageBackendKind::Filesystem => (
                Arc::new(FilesystemEmbeddingStore::open(&storage.data_dir).await?),
                Arc::new(FilesystemRelatedLinkStore::open(&storage.data_dir).await?),
            ),
        };
    info!(
        store = embeddings.store_name(),
        data_dir = %storage.data_dir.display(),
        embeddings = embeddings.count().await?,
        links = links.count().await?,
        "Stores opened"
    );
    Ok((embeddings, links))
}

/// Everything a host needs, built from one configuration
pub struct RelconContext {
    config: AppConfig,
    engine: Arc<SimilarityEngine>,
    events: Arc<TokioEventPublisher>,
}

impl RelconContext {
    /// Select the provider, open the stores and build the engine
    pub async fn build(config: AppConfig) -> Result<Self> {
        let provider = create_embedding_provider(&config.embedding)?;
        let (embeddings, links) = open_stores(&config.storage).await?;
        let events = TokioEventPublisher::new_shared();
        let engine = SimilarityEngine::new(
            provider,
            embeddings,
            links,
            events.clone(),
            config.similarity.clone(),
        )?;
        Ok(Self {
            config,
            engine: Arc::new(engine),
            events,
        })
    }

    /// The configuration this context was built from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The engine as its concrete type
    pub fn engine(&self) -> Arc<SimilarityEngine> {
        Arc::clone(&self.engine)
    }

    /// The engine behind its service interface
    pub fn service(&self) -> Arc<dyn RelatedContentServiceInterface> {
        self.engine.clone()
    }

    /// Publisher receiving the engine's domain events
    pub fn events(&self) -> Arc<TokioEventPublisher> {
        Arc::clone(&self.events)
    }

    /// Start a sync queue with the configured policy
    pub fn start_queue(&self) -> Arc<SyncQueue> {
        Arc::new(SyncQueue::start(
            self.service(),
            self.config.queue.to_queue_config(),
        ))
    }

    /// Save/delete hooks, queued when `queue` is given
    pub fn triggers(&self, queue: Option<Arc<SyncQueue>>) -> SyncTriggers {
        let dispatch = match queue {
            Some(queue) => SyncDispatch::Queued(queue),
            None => SyncDispatch::Inline,
        };
        SyncTriggers::new(self.service(), dispatch)
    }
}
