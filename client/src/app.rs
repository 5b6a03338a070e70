//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::components::toast_stack::ToastStack;
use crate::net::cache::QueryCache;
use crate::pages::{follow_ups::FollowUpsPage, models::ModelsPage, overview::OverviewPage, widget::WidgetPage};
use crate::state::{toast::ToastState, ui::UiState, widget::WidgetState};
use crate::util::{dark_mode, storage};

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
/// Provides the shared query cache, toast queue, UI chrome, and widget
/// settings, then lays out the sidebar beside the routed page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cache = QueryCache::new();
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());
    let widget = RwSignal::new(WidgetState::default());

    provide_context(cache);
    provide_context(toasts);
    provide_context(ui);
    provide_context(widget);

    // Browser preferences are only readable after hydration.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        let collapsed = storage::load_flag(storage::SIDEBAR_KEY).unwrap_or(false);
        ui.update(|u| {
            u.dark_mode = dark;
            u.sidebar_collapsed = collapsed;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/widget-admin.css"/>
        <Title text="Widget Admin"/>

        <Router>
            <div class="console">
                <Sidebar/>
                <main class="console__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=OverviewPage/>
                        <Route path=StaticSegment("models") view=ModelsPage/>
                        <Route path=StaticSegment("follow-ups") view=FollowUpsPage/>
                        <Route path=StaticSegment("widget") view=WidgetPage/>
                    </Routes>
                </main>
            </div>
            <ToastStack/>
        </Router>
    }
}
