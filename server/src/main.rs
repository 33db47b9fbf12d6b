mod config;
mod routes;
mod state;
mod upstream;

use std::sync::Arc;

use config::ServerConfig;
use upstream::{HttpSuggestionSource, SuggestionSource};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().expect("invalid server configuration");

    // Suggestions are optional: the page still works without them.
    let suggestions = match config.suggest_upstream_url.clone() {
        Some(url) => match HttpSuggestionSource::new(url, config.timeouts) {
            Ok(source) => {
                tracing::info!(url = source.url(), "suggestion upstream configured");
                Some(Arc::new(source) as Arc<dyn SuggestionSource>)
            }
            Err(e) => {
                tracing::warn!(error = %e, "suggestion upstream unusable — suggestions disabled");
                None
            }
        },
        None => {
            tracing::warn!("SUGGEST_UPSTREAM_URL not set — suggestions disabled");
            None
        }
    };

    let state = state::AppState::new(suggestions);

    let app = routes::app(state).expect("failed to build router");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "murmur listening");
    axum::serve(listener, app).await.expect("server failed");
}
