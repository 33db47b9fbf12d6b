//! Anonymous message form with optional suggested messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the public profile page. Form rules live in
//! `state::message_form`; this component wires them to the textarea, the
//! submit button, the suggestion panel, and the shared toast queue.
//!
//! With `suggestions_enabled`, suggestions are fetched once when the page
//! hydrates and again from the "Suggest Messages" button. A fetch already in
//! flight swallows further clicks.

use leptos::prelude::*;

use crate::state::message_form::MessageForm;
use crate::state::suggestions::SuggestionState;
use crate::state::toast::ToastState;

/// Form for sending an anonymous message to `username`.
#[component]
pub fn AnonymousMessageForm(#[prop(into)] username: Signal<String>, suggestions_enabled: bool) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(MessageForm::new());
    let suggestions = RwSignal::new(SuggestionState::default());

    // Effects only run in the browser, after hydration, so the first fetch
    // flips `loading` on markup that already matches the server render.
    Effect::new(move || {
        if suggestions_enabled {
            request_suggestions(suggestions, toasts);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let toast = form
            .try_update(|f| f.validate_field().ok().map(|input| f.submit(input)))
            .flatten();
        if let Some(toast) = toast {
            toasts.update(|t| {
                t.push(toast);
            });
        }
    };

    let field_error = move || form.with(|f| f.error().map(|e| e.to_string()));

    view! {
        <form class="message-form" on:submit=on_submit>
            <label class="message-form__label" for="anonymous-message">
                "Send anonymous message to @"
                {move || username.get()}
            </label>
            <textarea
                id="anonymous-message"
                class="message-form__input"
                placeholder="Write your anonymous message here"
                prop:value=move || form.with(|f| f.value().to_owned())
                on:input=move |ev| form.update(|f| f.edit(event_target_value(&ev)))
            ></textarea>
            <Show when=move || field_error().is_some()>
                <p class="message-form__error">{move || field_error().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary message-form__submit" type="submit">
                "Submit"
            </button>
        </form>
        {if suggestions_enabled {
            view! { <SuggestionPanel form suggestions toasts/> }.into_any()
        } else {
            view! {
                <div class="message-form__placeholder">
                    <button class="btn" type="button">"Button"</button>
                </div>
            }
                .into_any()
        }}
    }
}

#[component]
fn SuggestionPanel(
    form: RwSignal<MessageForm>,
    suggestions: RwSignal<SuggestionState>,
    toasts: RwSignal<ToastState>,
) -> impl IntoView {
    let on_suggest = move |_| request_suggestions(suggestions, toasts);
    let loading = move || suggestions.with(|s| s.loading);

    view! {
        <section class="suggestions">
            <button class="btn suggestions__fetch" type="button" on:click=on_suggest disabled=loading>
                {move || if loading() { "Suggesting..." } else { "Suggest Messages" }}
            </button>
            <p class="suggestions__hint">"Click on any message below to select it."</p>
            <div class="suggestions__list">
                {move || {
                    let items = suggestions.with(|s| s.items.clone());
                    if items.is_empty() {
                        return view! { <div class="suggestions__empty">"No suggestions yet"</div> }.into_any();
                    }
                    items
                        .into_iter()
                        .map(|text| {
                            let label = text.clone();
                            view! {
                                <button
                                    class="btn suggestions__item"
                                    type="button"
                                    on:click=move |_| form.update(|f| f.select_suggestion(&text))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </section>
    }
}

/// Start a suggestion fetch unless one is already running. Failures surface
/// as an error toast and leave the current list untouched.
fn request_suggestions(suggestions: RwSignal<SuggestionState>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::toast::Toast;

        if !suggestions.try_update(SuggestionState::begin_fetch).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_suggestions().await;
            if let Err(e) = &result {
                log::warn!("suggestion fetch failed: {e}");
                let toast = Toast::error("Could not load suggestions").with_description(e.to_string());
                // Signals are gone if the page was torn down mid-request.
                let _ = toasts.try_update(|t| t.push(toast));
            }
            let _ = suggestions.try_update(|s| s.finish_fetch(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (suggestions, toasts);
    }
}
