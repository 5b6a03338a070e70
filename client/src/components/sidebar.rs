//! Primary navigation rail with the dark-mode toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::{NavItem, UiState};
use crate::util::{dark_mode, storage};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let current = move || NavItem::from_path(&pathname.get());

    let on_collapse = move |_| {
        let next = !ui.get_untracked().sidebar_collapsed;
        storage::save_flag(storage::SIDEBAR_KEY, next);
        ui.update(|u| u.sidebar_collapsed = next);
    };

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || ui.get().sidebar_collapsed>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"◆"</span>
                <span class="sidebar__title">"Widget Admin"</span>
            </div>
            <nav class="sidebar__nav">
                {NavItem::ALL
                    .into_iter()
                    .map(|item| {
                        view! {
                            <a
                                class="sidebar__link"
                                class:sidebar__link--active=move || current() == item
                                href=item.path()
                            >
                                {item.label()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="sidebar__footer">
                <button
                    class="btn sidebar__dark-toggle"
                    on:click=move |_| {
                        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <button class="btn sidebar__collapse" on:click=on_collapse title="Collapse sidebar">
                    {move || if ui.get().sidebar_collapsed { "»" } else { "«" }}
                </button>
            </div>
        </aside>
    }
}
