//! Configuration loader
//!
//! Sources are merged in this order, later ones overriding earlier:
//! 1. `AppConfig::default()`
//! 2. A TOML file: the explicit path, else `relcon.toml` in the working
//!    directory, else `<config dir>/relcon/relcon.toml`
//! 3. Environment variables prefixed `RELCON_`, nested keys split on `__`
//!    (`RELCON_SIMILARITY__SIMILARITY_THRESHOLD=0.7`)

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::{info, warn};

use relcon_domain::EmbeddingProviderKind;
use relcon_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    OPENAI_API_KEY_ENV,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader with the default search path and `RELCON_` prefix
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read this file instead of searching; it must exist
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// The explicit configuration file, if one was given
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load, apply environment fallbacks and validate
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config(format!(
                        "Configuration file not found: {}",
                        path.display()
                    )));
                }
                info!(path = %path.display(), "Loading configuration file");
                figment = figment.merge(Toml::file(path));
            }
            None => {
                if let Some(path) = Self::find_default_config_path() {
                    info!(path = %path.display(), "Loading configuration file");
                    figment = figment.merge(Toml::file(path));
                }
            }
        }

        figment = figment.merge(Env::prefixed(&self.env_prefix).split(CONFIG_ENV_SEPARATOR));

        let mut config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;
        apply_env_fallbacks(&mut config, |key| env::var(key).ok());
        validate_app_config(&config)?;
        Ok(config)
    }

    /// Write `config` as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;
        Ok(())
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(cwd) = env::current_dir() {
            candidates.push(cwd.join(DEFAULT_CONFIG_FILENAME));
        }
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }
        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill settings that have a conventional environment variable
///
/// `lookup` is `std::env::var` in production.
pub fn apply_env_fallbacks(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    let openai = &mut config.embedding.openai;
    if openai.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
        if let Some(key) = lookup(OPENAI_API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            openai.api_key = Some(key);
        }
    }
}

/// Validate every section
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    config.similarity.validate()?;
    validate_embedding_config(config)?;
    validate_queue_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    let embedding = &config.embedding;
    if embedding.dimensions == 0 {
        return Err(Error::config("embedding.dimensions must be at least 1"));
    }
    match embedding.provider {
        EmbeddingProviderKind::OpenAI if embedding.openai.dimensions == 0 => Err(Error::config(
            "embedding.openai.dimensions must be at least 1",
        )),
        EmbeddingProviderKind::Ollama if embedding.ollama.dimensions == 0 => Err(Error::config(
            "embedding.ollama.dimensions must be at least 1",
        )),
        _ => Ok(()),
    }
}

fn validate_queue_config(config: &AppConfig) -> Result<()> {
    if config.queue.max_attempts == 0 {
        return Err(Error::config("queue.max_attempts must be at least 1"));
    }
    if config.queue.capacity == 0 {
        warn!("queue.capacity of 0 is raised to 1");
    }
    Ok(())
}
