//! Title block at the top of every console page.

use leptos::prelude::*;

/// Page title, one-line description, and an optional action slot on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                <p class="page-header__description">{description}</p>
            </div>
            <div class="page-header__actions">{children.map(|c| c())}</div>
        </header>
    }
}
