//! Configuration sections

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use relcon_application::SyncQueueConfig;
use relcon_application::use_cases::sync_queue::{
    DEFAULT_BACKOFF, DEFAULT_MAX_ATTEMPTS, DEFAULT_QUEUE_CAPACITY,
};
use relcon_domain::constants::DEFAULT_EMBEDDING_DIMENSIONS;
use relcon_domain::{EmbeddingProviderKind, SimilarityConfig, StorageBackendKind};
use relcon_providers::constants::{
    EMBEDDING_DIMENSION_OLLAMA_NOMIC, EMBEDDING_DIMENSION_OPENAI_SMALL, OLLAMA_DEFAULT_BASE_URL,
    OLLAMA_DEFAULT_MODEL, OLLAMA_TIMEOUT_SECS, OPENAI_DEFAULT_BASE_URL, OPENAI_DEFAULT_MODEL,
    OPENAI_TIMEOUT_SECS,
};

use crate::constants::{DEFAULT_DATA_DIR_NAME, DEFAULT_LOG_LEVEL, FALLBACK_DATA_DIR};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Embedding provider selection
    pub embedding: EmbeddingSettings,
    /// Linking behaviour
    pub similarity: SimilarityConfig,
    /// Store backend
    pub storage: StorageSettings,
    /// Background sync queue
    pub queue: QueueSettings,
    /// Logging
    pub logging: LoggingConfig,
}

/// Embedding provider selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Provider to use
    pub provider: EmbeddingProviderKind,
    /// `false` selects the null provider regardless of `provider`
    pub enabled: bool,
    /// Use the null provider when the selected one lacks required settings
    pub fallback_to_null: bool,
    /// Dimensions of the null provider's vectors
    pub dimensions: usize,
    /// OpenAI-compatible API settings
    pub openai: OpenAiSettings,
    /// Ollama settings
    pub ollama: OllamaSettings,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderKind::default(),
            enabled: true,
            fallback_to_null: true,
            dimensions: DEFAULT_EMBEDDING_DIMENSIONS,
            openai: OpenAiSettings::default(),
            ollama: OllamaSettings::default(),
        }
    }
}

/// OpenAI-compatible API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    /// Bearer token; `OPENAI_API_KEY` is used when unset
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Embedding model
    pub model: String,
    /// Requested output dimensions
    pub dimensions: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: OPENAI_DEFAULT_BASE_URL.to_string(),
            model: OPENAI_DEFAULT_MODEL.to_string(),
            dimensions: EMBEDDING_DIMENSION_OPENAI_SMALL,
            timeout_secs: OPENAI_TIMEOUT_SECS,
        }
    }
}

/// Ollama settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaSettings {
    /// Server URL
    pub base_url: Option<String>,
    /// Embedding model
    pub model: String,
    /// Model output dimensions
    pub dimensions: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            base_url: Some(OLLAMA_DEFAULT_BASE_URL.to_string()),
            model: OLLAMA_DEFAULT_MODEL.to_string(),
            dimensions: EMBEDDING_DIMENSION_OLLAMA_NOMIC,
            timeout_secs: OLLAMA_TIMEOUT_SECS,
        }
    }
}

/// Store backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Backend kind
    pub backend: StorageBackendKind,
    /// Directory holding the filesystem snapshots
    pub data_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackendKind::default(),
            data_dir: dirs::data_local_dir()
                .map(|d| d.join(DEFAULT_DATA_DIR_NAME))
                .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR)),
        }
    }
}

/// Background sync queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    /// Attempts per item, including the first
    pub max_attempts: u32,
    /// Seconds between attempts
    pub backoff_secs: u64,
    /// Channel capacity
    pub capacity: usize,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_secs: DEFAULT_BACKOFF.as_secs(),
            capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl QueueSettings {
    /// Queue policy for [`SyncQueue::start`](relcon_application::SyncQueue::start)
    pub fn to_queue_config(&self) -> SyncQueueConfig {
        SyncQueueConfig {
            max_attempts: self.max_attempts,
            backoff: Duration::from_secs(self.backoff_secs),
            capacity: self.capacity,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Also log to a daily-rolling file at this path
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
