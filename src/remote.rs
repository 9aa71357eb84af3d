//! Remote review client
//!
//! The review backend is an opaque HTTP service: POST the code, get the
//! critique back as text. Behind a trait so tests can script responses.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Errors from a review request. Carried as strings so the error can
/// cross the worker channel as part of a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// Connection, DNS, timeout or body read failure
    #[error("transport error: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status
    #[error("review endpoint returned status {0}")]
    Status(u16),
}

/// Something that can review code
pub trait ReviewBackend: Send + Sync {
    fn review_code(&self, code: &str) -> Result<String, ReviewError>;
}

#[derive(Serialize)]
struct ReviewRequest<'a> {
    code: &'a str,
}

/// Blocking HTTP client for the review endpoint
pub struct HttpReviewClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpReviewClient {
    /// Default request timeout. Reviews go through an LLM on the other
    /// side, so this is generous.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Create a client for the given endpoint base URL
    /// (e.g. `http://localhost:3000`)
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ReviewError> {
        Self::with_timeout(endpoint, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ReviewError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("critique/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ReviewError::Transport(e.to_string()))?;

        let mut endpoint = endpoint.into();
        while endpoint.ends_with('/') {
            endpoint.pop();
        }

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ReviewBackend for HttpReviewClient {
    fn review_code(&self, code: &str) -> Result<String, ReviewError> {
        let url = format!("{}/ai/get-review", self.endpoint);
        tracing::debug!("Requesting review from {} ({} bytes)", url, code.len());

        let response = self
            .client
            .post(&url)
            .json(&ReviewRequest { code })
            .send()
            .map_err(|e| ReviewError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReviewError::Status(status.as_u16()));
        }

        response
            .text()
            .map_err(|e| ReviewError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trailing_slash_stripped() {
        let client = HttpReviewClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000");

        let client = HttpReviewClient::new("http://localhost:3000").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&ReviewRequest { code: "let x = 1;" }).unwrap();
        assert_eq!(body, r#"{"code":"let x = 1;"}"#);
    }

    #[test]
    fn test_error_display() {
        let e = ReviewError::Status(500);
        assert_eq!(e.to_string(), "review endpoint returned status 500");

        let e = ReviewError::Transport("connection refused".to_string());
        assert!(e.to_string().contains("connection refused"));
    }
}
