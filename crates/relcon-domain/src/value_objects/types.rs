//! Backend selectors read from configuration
//!
//! Unknown names fail while the configuration is deserialized, before any
//! backend is built.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which embedding backend to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProviderKind {
    /// OpenAI-compatible `/embeddings` endpoint
    #[default]
    OpenAI,
    Ollama,
    /// Zero vectors; every similarity is 0
    Null,
    /// No backend; reads work, embedding fails with a config error
    None,
}

impl EmbeddingProviderKind {
    const ALL: [Self; 4] = [Self::OpenAI, Self::Ollama, Self::Null, Self::None];

    /// Registry name of the backend
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Ollama => "ollama",
            Self::Null => "null",
            Self::None => "none",
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_string(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    pub fn supported_providers() -> &'static [&'static str] {
        &["openai", "ollama", "null", "none"]
    }
}

impl fmt::Display for EmbeddingProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where embeddings and links live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendKind {
    /// Lost when the process exits
    Memory,
    /// JSON snapshots under `storage.data_dir`
    #[default]
    Filesystem,
}

impl StorageBackendKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Filesystem => "filesystem",
        }
    }

    /// Accepts `in-memory` as an alias of `memory`
    pub fn from_string(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Some(Self::Memory),
            "filesystem" => Some(Self::Filesystem),
            _ => None,
        }
    }
}

impl fmt::Display for StorageBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
