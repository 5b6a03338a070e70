//! Renders the app-wide toast queue.
//!
//! Each toast dismisses itself after `TOAST_TTL` in the browser; the close
//! button dismisses it immediately.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays visible.
pub const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(4);

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    #[cfg(feature = "hydrate")]
                    {
                        leptos::task::spawn_local(async move {
                            gloo_timers::future::sleep(TOAST_TTL).await;
                            toasts.try_update(|t| t.dismiss(id));
                        });
                    }
                    view! {
                        <div
                            class="toast"
                            class:toast--success=toast.kind == ToastKind::Success
                            class:toast--error=toast.kind == ToastKind::Error
                            role="status"
                        >
                            <div class="toast__body">
                                <strong class="toast__title">{toast.title}</strong>
                                <p class="toast__message">{toast.message}</p>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
