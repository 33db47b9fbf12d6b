//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only holds the optional suggestion source; the page keeps no server-side
//! state.

use std::sync::Arc;

use crate::upstream::SuggestionSource;

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub suggestions: Option<Arc<dyn SuggestionSource>>,
}

impl AppState {
    #[must_use]
    pub fn new(suggestions: Option<Arc<dyn SuggestionSource>>) -> Self {
        Self { suggestions }
    }
}
