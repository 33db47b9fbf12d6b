//! Suggested-message list and fetch bookkeeping.
//!
//! The suggestion endpoint answers with one string holding every suggestion
//! joined by `||`. The list is replaced wholesale on each successful fetch
//! and left alone when a fetch fails.

#[cfg(test)]
#[path = "suggestions_test.rs"]
mod suggestions_test;

use crate::net::types::SuggestionFetchError;

/// Literal separator between suggestions in the endpoint's `message` field.
pub const SUGGESTION_DELIMITER: &str = "||";

/// Split a raw suggestion string into its parts, in order and untrimmed.
///
/// An empty response means "no suggestions" and yields an empty list rather
/// than a single empty entry.
pub fn split_suggestions(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(SUGGESTION_DELIMITER).map(str::to_owned).collect()
}

/// Suggestion panel state.
#[derive(Clone, Debug, Default)]
pub struct SuggestionState {
    pub items: Vec<String>,
    pub loading: bool,
}

impl SuggestionState {
    /// Mark a fetch as started. Returns `false` if one is already in flight,
    /// in which case the caller should not issue another request.
    pub fn begin_fetch(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Record the outcome of the in-flight fetch.
    pub fn finish_fetch(&mut self, result: Result<Vec<String>, SuggestionFetchError>) {
        self.loading = false;
        if let Ok(items) = result {
            self.items = items;
        }
    }
}
