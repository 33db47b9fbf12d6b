//! Wire types for the suggestion endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of a successful `POST /api/suggest-messages` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestResponse {
    /// Suggestions joined by `||`.
    pub message: String,
}

/// Why a suggestion fetch produced nothing. Reported as a toast; the form
/// keeps working without suggestions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SuggestionFetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("suggest request failed: {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Parse(String),

    #[error("not available on server")]
    Unavailable,
}
