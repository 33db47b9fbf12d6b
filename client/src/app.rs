//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::public_profile::{PROFILE_PARAMS_KEY, PublicProfilePage};
use crate::state::toast::ToastState;

/// Capabilities of the message form, provided as context by [`App`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormOptions {
    /// Offer server-generated message suggestions under the form.
    pub suggestions_enabled: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self { suggestions_enabled: true }
    }
}

impl FormOptions {
    /// Query parameter that lets a link turn suggestions on or off.
    pub const SUGGESTIONS_QUERY_KEY: &'static str = "suggestions";

    /// Apply a `?suggestions=` override. `off`/`false`/`0` disable,
    /// `on`/`true`/`1` enable; anything else keeps the current setting.
    #[must_use]
    pub fn with_suggestions_query(mut self, raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("off" | "false" | "0") => self.suggestions_enabled = false,
            Some("on" | "true" | "1") => self.suggestions_enabled = true,
            _ => {}
        }
        self
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast queue and form options, and sets up client-side
/// routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);
    provide_context(FormOptions::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/murmur.css"/>
        <Title text="Murmur"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=(StaticSegment("u"), WildcardSegment(PROFILE_PARAMS_KEY)) view=PublicProfilePage/>
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
