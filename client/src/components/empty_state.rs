//! Placeholder shown when a list has nothing to display.

use leptos::prelude::*;

#[component]
pub fn EmptyState(#[prop(into)] message: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state__message">{message}</p>
            {children.map(|c| view! { <div class="empty-state__action">{c()}</div> })}
        </div>
    }
}
