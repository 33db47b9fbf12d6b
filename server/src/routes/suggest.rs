//! Suggested-message route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use murmur_client::net::types::SuggestResponse;

use crate::state::AppState;
use crate::upstream::UpstreamError;

/// Map an upstream failure to the status the page sees.
pub(crate) fn upstream_error_to_status(err: &UpstreamError) -> StatusCode {
    match err {
        UpstreamError::Request(_) | UpstreamError::Status { .. } | UpstreamError::Parse(_) => StatusCode::BAD_GATEWAY,
        UpstreamError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/suggest-messages` — relay the upstream's `||`-joined suggestions.
///
/// Responds `503` when no upstream is configured.
pub async fn suggest_messages(State(state): State<AppState>) -> Result<Json<SuggestResponse>, StatusCode> {
    let Some(source) = state.suggestions.as_ref() else {
        tracing::debug!("suggestion request with no upstream configured");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    match source.suggest().await {
        Ok(message) => Ok(Json(SuggestResponse { message })),
        Err(e) => {
            tracing::warn!(error = %e, body = e.body().unwrap_or_default(), "suggestion upstream failed");
            Err(upstream_error_to_status(&e))
        }
    }
}

#[cfg(test)]
#[path = "suggest_test.rs"]
mod tests;
