//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the suggestion fetch is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed fetch degrades
//! to an error toast without breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SuggestResponse, SuggestionFetchError};
use crate::state::suggestions::split_suggestions;

/// Route the page posts to for suggestions.
pub const SUGGEST_MESSAGES_ENDPOINT: &str = "/api/suggest-messages";

/// Decode a suggestion response body into the ordered suggestion list.
///
/// # Errors
///
/// Returns [`SuggestionFetchError::Parse`] if the body is not
/// `{ "message": string }`.
pub fn parse_suggest_body(body: &str) -> Result<Vec<String>, SuggestionFetchError> {
    let parsed: SuggestResponse =
        serde_json::from_str(body).map_err(|e| SuggestionFetchError::Parse(e.to_string()))?;
    Ok(split_suggestions(&parsed.message))
}

/// Fetch suggested messages via `POST /api/suggest-messages`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body is malformed. Always errors during SSR.
pub async fn fetch_suggestions() -> Result<Vec<String>, SuggestionFetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SUGGEST_MESSAGES_ENDPOINT)
            .send()
            .await
            .map_err(|e| SuggestionFetchError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(SuggestionFetchError::Status(resp.status()));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| SuggestionFetchError::Request(e.to_string()))?;
        parse_suggest_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SuggestionFetchError::Unavailable)
    }
}
