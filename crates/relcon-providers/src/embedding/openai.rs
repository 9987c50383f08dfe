//! OpenAI-compatible backend
//!
//! One `POST {base_url}/embeddings` per batch. Any server speaking the same
//! protocol (Azure deployments, local proxies) works through `base_url`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use relcon_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use relcon_domain::error::{Error, Result};
use relcon_domain::ports::EmbeddingProvider;
use relcon_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OPENAI_SMALL, OPENAI_DEFAULT_BASE_URL,
    OPENAI_DEFAULT_MODEL, OPENAI_TIMEOUT_SECS,
};
use crate::embedding::helpers::{constructor, ensure_dimensions, parse_vector};
use crate::utils::HttpResponseUtils;

const PROVIDER_LABEL: &str = "OpenAI";

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a [String],
    dimensions: usize,
    encoding_format: &'static str,
}

/// Embeds through an OpenAI-compatible API
///
/// ```rust,no_run
/// use std::time::Duration;
/// use relcon_providers::embedding::OpenAIEmbeddingProvider;
///
/// let openai = OpenAIEmbeddingProvider::new(
///     "sk-your-api-key".to_string(),
///     None,
///     "text-embedding-3-small".to_string(),
///     1536,
///     Duration::from_secs(60),
///     reqwest::Client::new(),
/// );
/// assert_eq!(openai.base_url(), "https://api.openai.com/v1");
/// ```
pub struct OpenAIEmbeddingProvider {
    bearer: String,
    endpoint: Option<String>,
    model: String,
    dimensions: usize,
    timeout: Duration,
    client: Client,
}

impl OpenAIEmbeddingProvider {
    /// `base_url` of `None` targets api.openai.com; `dimensions` is both
    /// requested from the API and enforced on the response.
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        dimensions: usize,
        timeout: Duration,
        client: Client,
    ) -> Self {
        Self {
            bearer: format!("Bearer {}", constructor::validate_api_key(&api_key)),
            endpoint: constructor::validate_url(base_url),
            model,
            dimensions,
            timeout,
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(OPENAI_DEFAULT_BASE_URL)
    }

    fn request<'a>(&'a self, texts: &'a [String]) -> EmbeddingsRequest<'a> {
        EmbeddingsRequest {
            model: &self.model,
            input: texts,
            dimensions: self.dimensions,
            encoding_format: "float",
        }
    }

    fn to_embedding(&self, item: &Value) -> Result<Embedding> {
        let vector = parse_vector(PROVIDER_LABEL, &item["embedding"])?;
        ensure_dimensions(PROVIDER_LABEL, &vector, self.dimensions)?;
        Ok(Embedding::new(vector, self.model.clone()))
    }

    /// `data` items in input order; the API tags each with `index`
    fn ordered_items(&self, body: &Value, expected: usize) -> Result<Vec<Value>> {
        let mut items = body["data"]
            .as_array()
            .cloned()
            .ok_or_else(|| Error::embedding("OpenAI response is missing the data array"))?;
        if items.len() != expected {
            return Err(Error::embedding(format!(
                "OpenAI returned {} embeddings for {expected} inputs",
                items.len()
            )));
        }
        items.sort_by_key(|item| item["index"].as_u64().unwrap_or(u64::MAX));
        Ok(items)
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        debug!(model = %self.model, count = texts.len(), "openai embed");

        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url()))
            .header(AUTHORIZATION, &self.bearer)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&self.request(texts))
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(PROVIDER_LABEL, self.timeout, e))?;
        let body = HttpResponseUtils::check_and_parse(response, PROVIDER_LABEL).await?;

        self.ordered_items(&body, texts.len())?
            .iter()
            .map(|item| self.to_embedding(item))
            .collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

fn build_openai(
    settings: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let Some(api_key) = settings
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
    else {
        return Err("OpenAI requires api_key".to_string());
    };
    let timeout = constructor::timeout_or(settings.timeout_secs, OPENAI_TIMEOUT_SECS);
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("OpenAI HTTP client: {e}"))?;

    Ok(Arc::new(OpenAIEmbeddingProvider::new(
        api_key,
        settings.base_url.clone(),
        settings
            .model
            .clone()
            .unwrap_or_else(|| OPENAI_DEFAULT_MODEL.to_string()),
        settings.dimensions.unwrap_or(EMBEDDING_DIMENSION_OPENAI_SMALL),
        timeout,
        client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OPENAI: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "openai",
    description: "OpenAI-compatible embedding API (text-embedding-3-small by default)",
    factory: build_openai,
};
