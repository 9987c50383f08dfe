//! Local Ollama backend
//!
//! `/api/embeddings` accepts a single prompt, so a batch is sent as one
//! request per text, in order.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use relcon_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use relcon_domain::error::Result;
use relcon_domain::ports::EmbeddingProvider;
use relcon_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OLLAMA_NOMIC, OLLAMA_DEFAULT_BASE_URL,
    OLLAMA_DEFAULT_MODEL, OLLAMA_TIMEOUT_SECS,
};
use crate::embedding::helpers::{constructor, ensure_dimensions, parse_vector};
use crate::utils::HttpResponseUtils;

const PROVIDER_LABEL: &str = "Ollama";

#[derive(Serialize)]
struct PromptRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

/// Embeds through an Ollama server
///
/// ```rust,no_run
/// use std::time::Duration;
/// use relcon_providers::embedding::OllamaEmbeddingProvider;
///
/// let ollama = OllamaEmbeddingProvider::new(
///     "http://localhost:11434".to_string(),
///     "nomic-embed-text".to_string(),
///     768,
///     Duration::from_secs(120),
///     reqwest::Client::new(),
/// );
/// assert_eq!(ollama.base_url(), "http://localhost:11434");
/// ```
pub struct OllamaEmbeddingProvider {
    endpoint: String,
    model: String,
    dimensions: usize,
    timeout: Duration,
    client: Client,
}

impl OllamaEmbeddingProvider {
    pub fn new(
        base_url: String,
        model: String,
        dimensions: usize,
        timeout: Duration,
        client: Client,
    ) -> Self {
        Self {
            endpoint: constructor::get_effective_url(Some(&base_url), OLLAMA_DEFAULT_BASE_URL),
            model,
            dimensions,
            timeout,
            client,
        }
    }

    /// Server root, trailing slash removed
    pub fn base_url(&self) -> &str {
        &self.endpoint
    }

    async fn embed_one(&self, text: &str) -> Result<Embedding> {
        let body = PromptRequest {
            model: &self.model,
            prompt: text,
        };
        let response = self
            .client
            .post(format!("{}/api/embeddings", self.endpoint))
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(PROVIDER_LABEL, self.timeout, e))?;

        let json = HttpResponseUtils::check_and_parse(response, PROVIDER_LABEL).await?;
        let vector = parse_vector(PROVIDER_LABEL, &json["embedding"])?;
        ensure_dimensions(PROVIDER_LABEL, &vector, self.dimensions)?;
        Ok(Embedding::new(vector, self.model.clone()))
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        debug!(model = %self.model, count = texts.len(), "ollama embed");
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.embed_one(text).await?);
        }
        Ok(out)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}

fn build_ollama(
    settings: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let Some(base_url) = constructor::validate_url(settings.base_url.clone()) else {
        return Err("Ollama requires base_url".to_string());
    };
    let timeout = constructor::timeout_or(settings.timeout_secs, OLLAMA_TIMEOUT_SECS);
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Ollama HTTP client: {e}"))?;

    Ok(Arc::new(OllamaEmbeddingProvider::new(
        base_url,
        settings
            .model
            .clone()
            .unwrap_or_else(|| OLLAMA_DEFAULT_MODEL.to_string()),
        settings.dimensions.unwrap_or(EMBEDDING_DIMENSION_OLLAMA_NOMIC),
        timeout,
        client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OLLAMA: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "ollama",
    description: "Ollama local embedding provider (nomic-embed-text by default)",
    factory: build_ollama,
};
