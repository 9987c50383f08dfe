//! Common helpers for embedding providers

use relcon_domain::error::{Error, Result};

/// Common constructor patterns used by embedding providers
pub mod constructor {
    use std::time::Duration;

    /// Trim an API key
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Trim a base URL and drop trailing slashes
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }

    /// Get effective URL with fallback to default
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| default_url.to_string())
    }

    /// Timeout from optional seconds with a provider default
    pub fn timeout_or(secs: Option<u64>, default_secs: u64) -> Duration {
        Duration::from_secs(secs.unwrap_or(default_secs))
    }
}

/// Parse a JSON array of numbers into a vector
pub fn parse_vector(provider: &str, value: &serde_json::Value) -> Result<Vec<f64>> {
    value
        .as_array()
        .ok_or_else(|| Error::embedding(format!("{provider} response is missing the embedding array")))?
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| Error::embedding(format!("{provider} returned a non-numeric value")))
        })
        .collect()
}

/// Reject a vector whose length differs from the provider's dimensions
pub fn ensure_dimensions(provider: &str, vector: &[f64], expected: usize) -> Result<()> {
    if vector.len() == expected {
        Ok(())
    } else {
        Err(Error::embedding(format!(
            "{provider} returned {} dimensions, expected {expected}",
            vector.len()
        )))
    }
}
