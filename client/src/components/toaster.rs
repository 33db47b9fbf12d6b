//! Toast viewport for the shared notification queue.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

/// Renders the active toast and dismisses it on click or after
/// [`TOAST_VISIBLE_MS`](crate::state::toast::TOAST_VISIBLE_MS) in the browser.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    #[cfg(feature = "hydrate")]
    {
        let active_id = Memo::new(move |_| toasts.with(|t| t.active().map(|toast| toast.id)));
        Effect::new(move || {
            let Some(id) = active_id.get() else {
                return;
            };
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_VISIBLE_MS).await;
                let _ = toasts.try_update(|t| t.dismiss(id));
            });
        });
    }

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                let toast = toasts.with(|t| t.active().cloned())?;
                let id = toast.id;
                let is_error = toast.level == ToastLevel::Error;
                Some(view! {
                    <div
                        class="toast"
                        class:toast--error=is_error
                        on:click=move |_| {
                            toasts.update(|t| {
                                t.dismiss(id);
                            });
                        }
                    >
                        <div class="toast__title">{toast.title}</div>
                        {toast.description.map(|d| view! { <div class="toast__description">{d}</div> })}
                        {toast.code.map(|c| view! {
                            <pre class="toast__code">
                                <code>{c}</code>
                            </pre>
                        })}
                    </div>
                })
            }}
        </div>
    }
}
