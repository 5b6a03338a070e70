//! Horizontal tab strip.
//!
//! Tabs are addressed by index so callers can map them onto their own enums
//! (`ModelTab`, `WidgetTab`, use-case filters).

use leptos::prelude::*;

#[component]
pub fn TabBar(
    labels: Vec<String>,
    #[prop(into)] active: Signal<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="tab-bar" role="tablist">
            {labels
                .into_iter()
                .enumerate()
                .map(|(index, label)| {
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || active.get() == index
                            role="tab"
                            aria-selected=move || (active.get() == index).to_string()
                            on:click=move |_| on_change.run(index)
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
