//! Suggestion upstream: the service that actually generates messages.
//!
//! DESIGN
//! ======
//! The generator is opaque: it is POSTed with no body and answers
//! `{ "message": "a||b||c" }`. The server relays that string untouched, so
//! splitting stays a client concern. `SuggestionSource` is the seam route
//! handlers depend on; `HttpSuggestionSource` is the reqwest implementation.

use serde::Deserialize;

use crate::config::UpstreamTimeouts;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while talking to the suggestion upstream.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP request to the upstream failed.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The upstream returned a non-success HTTP status.
    #[error("upstream response error: status {status}")]
    Status { status: u16, body: String },

    /// The upstream body was not `{ "message": string }`.
    #[error("upstream response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl UpstreamError {
    /// Response body the upstream sent with a failing status, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } if !body.is_empty() => Some(body.as_str()),
            _ => None,
        }
    }
}

// =============================================================================
// SOURCE
// =============================================================================

/// Anything that can produce a `||`-joined suggestion string.
#[async_trait::async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggest(&self) -> Result<String, UpstreamError>;
}

pub struct HttpSuggestionSource {
    http: reqwest::Client,
    url: String,
}

impl HttpSuggestionSource {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(url: String, timeouts: UpstreamTimeouts) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl SuggestionSource for HttpSuggestionSource {
    async fn suggest(&self) -> Result<String, UpstreamError> {
        let response = self
            .http
            .post(&self.url)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(UpstreamError::Status { status, body: text });
        }

        parse_reply(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct UpstreamReply {
    message: String,
}

/// Extract the `message` field from an upstream body.
///
/// # Errors
///
/// Returns [`UpstreamError::Parse`] when the body is not the expected shape.
pub fn parse_reply(text: &str) -> Result<String, UpstreamError> {
    let reply: UpstreamReply = serde_json::from_str(text).map_err(|e| UpstreamError::Parse(e.to_string()))?;
    Ok(reply.message)
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
