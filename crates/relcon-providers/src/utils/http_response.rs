//! HTTP Response Utilities
//!
//! Helpers for turning provider HTTP responses into JSON or domain errors.

use relcon_domain::error::{Error, Result};
use reqwest::Response;

/// Format error message for embedding provider
fn embedding_error(provider: &str, context: &str, details: &str) -> Error {
    Error::embedding(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// Non-2xx statuses become [`Error::Embedding`] carrying the status
    /// class (authentication, rate limit, server) and the response body.
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::status_error(provider_name, status.as_u16(), &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| embedding_error(provider_name, "response parse failed", &e.to_string()))
    }

    /// Map a failed status code to an embedding error
    pub fn status_error(provider_name: &str, code: u16, body: &str) -> Error {
        match code {
            401 => embedding_error(provider_name, "authentication failed", body),
            429 => embedding_error(provider_name, "rate limit exceeded", body),
            500..=599 => embedding_error(provider_name, &format!("server error ({code})"), body),
            _ => embedding_error(provider_name, &format!("request failed ({code})"), body),
        }
    }

    /// Map a transport failure to a network error
    pub fn transport_error(
        provider_name: &str,
        timeout: std::time::Duration,
        error: reqwest::Error,
    ) -> Error {
        let message = if error.is_timeout() {
            format!(
                "{provider_name} {} {timeout:?}",
                crate::constants::ERROR_MSG_REQUEST_TIMEOUT
            )
        } else {
            format!("{provider_name} HTTP request failed: {error}")
        };
        Error::network_with_source(message, error)
    }
}
