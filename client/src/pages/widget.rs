//! Widget settings page: tabbed editor beside a live chat preview.
//!
//! Settings are held in memory. Saving validates every tab and adopts the
//! edits as the new baseline; persisting them remotely is out of scope here.

use leptos::prelude::*;

use crate::components::chat_preview::ChatPreview;
use crate::components::page_header::PageHeader;
use crate::components::tab_bar::TabBar;
use crate::components::widget_advanced_tab::WidgetAdvancedTab;
use crate::components::widget_appearance_tab::WidgetAppearanceTab;
use crate::components::widget_content_tab::WidgetContentTab;
use crate::state::toast::{ERROR_TITLE, ToastKind, ToastState};
use crate::state::widget::{WidgetState, WidgetTab};

#[component]
pub fn WidgetPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = expect_context::<RwSignal<WidgetState>>();

    let tab_labels = WidgetTab::ALL.iter().map(|t| t.label().to_owned()).collect::<Vec<_>>();
    let active_tab = Signal::derive(move || {
        let tab = state.with(|s| s.tab);
        WidgetTab::ALL.iter().position(|t| *t == tab).unwrap_or_default()
    });
    let on_tab = Callback::new(move |index: usize| {
        if let Some(tab) = WidgetTab::ALL.get(index) {
            state.update(|s| s.tab = *tab);
        }
    });

    let on_save = move |_| {
        let mut saved = false;
        state.update(|s| {
            saved = s.save().is_ok();
            if let Some(tab) = s.first_invalid_tab() {
                s.tab = tab;
            }
        });
        toasts.update(|t| {
            let _ = if saved {
                t.push(ToastKind::Success, "Settings saved", "Your widget settings were updated.")
            } else {
                t.push(ToastKind::Error, ERROR_TITLE, "Fix the highlighted fields before saving.")
            };
        });
    };

    let tab = Memo::new(move |_| state.with(|s| s.tab));
    let content = Signal::derive(move || state.with(|s| s.settings.content.clone()));
    let appearance = Signal::derive(move || state.with(|s| s.settings.appearance.clone()));

    view! {
        <section class="page widget-page">
            <PageHeader title="Widget" description="Customize how the chat widget looks and behaves on your site.">
                <button
                    class="btn"
                    disabled=move || !state.with(WidgetState::is_dirty)
                    on:click=move |_| state.update(WidgetState::reset)
                >
                    "Discard changes"
                </button>
                <button class="btn btn--primary" on:click=on_save>
                    "Save"
                </button>
            </PageHeader>

            <div class="widget-page__layout">
                <div class="widget-page__editor">
                    <TabBar labels=tab_labels active=active_tab on_change=on_tab/>
                    {move || match tab.get() {
                        WidgetTab::Content => view! { <WidgetContentTab state=state/> }.into_any(),
                        WidgetTab::Appearance => view! { <WidgetAppearanceTab state=state/> }.into_any(),
                        WidgetTab::Advanced => view! { <WidgetAdvancedTab state=state/> }.into_any(),
                    }}
                </div>
                <aside class="widget-page__preview">
                    <h2 class="widget-page__preview-title">"Preview"</h2>
                    <ChatPreview content=content appearance=appearance/>
                </aside>
            </div>
        </section>
    }
}
