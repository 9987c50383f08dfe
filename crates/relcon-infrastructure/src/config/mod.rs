//! Configuration
//!
//! [`AppConfig`] is assembled by [`ConfigLoader`] from defaults, an optional
//! TOML file and `RELCON_` environment variables.

/// Figment-based loader and validation
pub mod loader;
/// Configuration sections
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, EmbeddingSettings, LoggingConfig, OllamaSettings, OpenAiSettings, QueueSettings,
    StorageSettings,
};
