//! Provider Constants
//!
//! Constants specific to provider implementations. Domain defaults live in
//! `relcon_domain::constants`.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension
pub const EMBEDDING_DIMENSION_NULL: usize = 1536;

/// Null embedding provider model name
pub const NULL_MODEL_NAME: &str = "null";

/// OpenAI default API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI default embedding model
pub const OPENAI_DEFAULT_MODEL: &str = "text-embedding-3-small";

/// OpenAI text-embedding-3-small dimension
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI request timeout in seconds
pub const OPENAI_TIMEOUT_SECS: u64 = 60;

/// Ollama default server URL
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Ollama default embedding model
pub const OLLAMA_DEFAULT_MODEL: &str = "nomic-embed-text";

/// Ollama nomic-embed-text dimension
pub const EMBEDDING_DIMENSION_OLLAMA_NOMIC: usize = 768;

/// Ollama request timeout in seconds (local models can be slow to load)
pub const OLLAMA_TIMEOUT_SECS: u64 = 120;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Prefix of timeout error messages
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// STORE CONSTANTS
// ============================================================================

/// Embedding snapshot file name
pub const EMBEDDINGS_FILE: &str = "embeddings.json";

/// Related link snapshot file name
pub const LINKS_FILE: &str = "related_links.json";

/// Extension appended to snapshot files while they are being written
pub const SNAPSHOT_TMP_EXTENSION: &str = "tmp";

// ============================================================================
// EVENT CONSTANTS
// ============================================================================

/// Broadcast channel capacity
pub const EVENT_BUS_BUFFER_SIZE: usize = 1024;
