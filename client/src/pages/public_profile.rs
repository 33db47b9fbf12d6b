//! Public profile page: `/u/{username}`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anyone with the link can leave the profile owner an anonymous message.
//! Only the first path segment is used; extra segments are ignored and the
//! name is never checked against a user directory. `?suggestions=off`
//! renders the form without the suggestion panel.

#[cfg(test)]
#[path = "public_profile_test.rs"]
mod public_profile_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::app::FormOptions;
use crate::components::message_form::AnonymousMessageForm;

/// Route parameter holding everything after `/u/`.
pub const PROFILE_PARAMS_KEY: &str = "params";

/// First non-empty segment of the catch-all profile path, if any.
pub fn username_from_path(rest: Option<&str>) -> Option<String> {
    rest?.split('/').find(|segment| !segment.is_empty()).map(str::to_owned)
}

#[component]
pub fn PublicProfilePage() -> impl IntoView {
    let query = use_query_map();
    let options = use_context::<FormOptions>()
        .unwrap_or_default()
        .with_suggestions_query(query.with_untracked(|q| q.get(FormOptions::SUGGESTIONS_QUERY_KEY)).as_deref());
    let params = use_params_map();
    let username = Signal::derive(move || {
        params.with(|p| username_from_path(p.get_str(PROFILE_PARAMS_KEY))).unwrap_or_default()
    });

    view! {
        <div class="profile-page">
            <div class="profile-page__column">
                <h1 class="profile-page__title">"Public Profile Link"</h1>
                <AnonymousMessageForm username suggestions_enabled=options.suggestions_enabled/>
            </div>
        </div>
    }
}
