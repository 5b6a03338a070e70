//! Overview page: headline figures for models, follow-ups, and the widget.
//!
//! Reads through the same `QueryCache` as the list pages, so visiting it after
//! the models page costs no extra fetch.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::components::stat_card::StatCard;
use crate::net::api::HttpApi;
use crate::net::cache::QueryCache;
use crate::state::follow_up_controller::FollowUpController;
use crate::state::follow_ups::FollowUpsState;
use crate::state::model_controller::ModelListController;
use crate::state::models::ModelsState;
use crate::state::toast::{SignalNotifier, ToastState};
use crate::state::widget::WidgetState;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let cache = expect_context::<QueryCache>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let widget = expect_context::<RwSignal<WidgetState>>();
    let models = RwSignal::new(ModelsState { loading: true, ..ModelsState::default() });
    let follow_ups = RwSignal::new(FollowUpsState { loading: true, ..FollowUpsState::default() });

    let model_ctrl = StoredValue::new(ModelListController::new(HttpApi, cache.clone(), SignalNotifier(toasts)));
    let follow_up_ctrl = StoredValue::new(FollowUpController::new(HttpApi, cache, SignalNotifier(toasts)));
    Effect::new(move || {
        let model_ctrl = model_ctrl.get_value();
        let follow_up_ctrl = follow_up_ctrl.get_value();
        leptos::task::spawn_local(async move {
            let result = model_ctrl.load().await;
            models.try_update(|s| s.apply_loaded(result));
            let result = follow_up_ctrl.load().await;
            follow_ups.try_update(|s| s.apply_loaded(result));
        });
    });

    let counts = Memo::new(move |_| models.with(ModelsState::counts));
    let loading = move |value: String, is_loading: bool| if is_loading { "…".to_owned() } else { value };

    let total_models = Signal::derive(move || loading(counts.get().total.to_string(), models.with(|m| m.loading)));
    let active_models = Signal::derive(move || loading(counts.get().active.to_string(), models.with(|m| m.loading)));
    let default_model = Signal::derive(move || {
        models.with(|m| m.default_model().map_or_else(|| "None".to_owned(), |d| d.name.clone()))
    });
    let enabled_follow_ups = Signal::derive(move || {
        follow_ups.with(|f| loading(format!("{} / {}", f.enabled_count(), f.items.len()), f.loading))
    });
    let widget_status = Signal::derive(move || {
        if widget.with(WidgetState::is_dirty) { "Unsaved changes".to_owned() } else { "Up to date".to_owned() }
    });

    view! {
        <section class="page overview-page">
            <PageHeader title="Overview" description="Your chat widget at a glance."/>

            <Show when=move || models.with(|m| m.error.is_some()) || follow_ups.with(|f| f.error.is_some())>
                <p class="page__error">"Some figures could not be loaded."</p>
            </Show>

            <div class="stat-grid">
                <StatCard label="AI models" value=total_models hint="Configured in total"/>
                <StatCard label="Active models" value=active_models hint="Serving conversations"/>
                <StatCard label="Default model" value=default_model/>
                <StatCard label="Follow-ups enabled" value=enabled_follow_ups/>
                <StatCard label="Widget" value=widget_status/>
            </div>
        </section>
    }
}
