//! Error type shared by every relcon crate

use thiserror::Error;

/// Boxed cause attached to the contextual variants
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias over [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Failure raised anywhere in the related-content pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Bare I/O failure propagated with `?`
    #[error("I/O error: {0}")]
    Stdio(#[from] std::io::Error),

    /// I/O failure with a description of what was being done
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Malformed or unserializable JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Caller input that cannot be acted on, such as a blank query
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Embedding or link store failure
    #[error("Store error: {message}")]
    Store { message: String },

    /// Provider rejected the request or returned an unusable vector
    #[error("Embedding provider error: {message}")]
    Embedding { message: String },

    /// Provider unreachable or timed out
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Bad or missing settings; the CLI exits with status 2
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Configuration failure caused by `source` (unreadable file, parse error)
    pub fn configuration_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// I/O failure while `message` was being attempted
    pub fn io_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Transport failure from the HTTP client
    pub fn network_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Provider-side failure, including transport
    pub fn is_embedding(&self) -> bool {
        matches!(self, Self::Embedding { .. } | Self::Network { .. })
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::Internal { message }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        message.to_string().into()
    }
}
