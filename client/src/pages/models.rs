//! AI models page: searchable, tabbed grid with add/configure/delete flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a `RwSignal<ModelsState>` and a `ModelListController` built from the
//! shared `QueryCache` and toast signal. Every mutation runs through the
//! controller; on success the list is reloaded from the (now stale) cache,
//! on a failed update the form reopens with the submitted values.

use leptos::prelude::*;
use records::AiModelPayload;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::model_card::{ModelCard, ModelCardAction};
use crate::components::model_form::ModelForm;
use crate::components::page_header::PageHeader;
use crate::components::tab_bar::TabBar;
use crate::net::api::HttpApi;
use crate::net::cache::QueryCache;
use crate::state::model_controller::{ModelListController, ModelMutation};
use crate::state::model_form::ModelDraft;
use crate::state::models::{ModelTab, ModelsState};
use crate::state::toast::{SignalNotifier, ToastState};

type Controller = ModelListController<HttpApi, SignalNotifier>;

#[component]
pub fn ModelsPage() -> impl IntoView {
    let cache = expect_context::<QueryCache>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(ModelsState { loading: true, ..ModelsState::default() });
    let controller: StoredValue<Controller> =
        StoredValue::new(ModelListController::new(HttpApi, cache, SignalNotifier(toasts)));

    let reload = move || {
        let ctrl = controller.get_value();
        leptos::task::spawn_local(async move {
            let result = ctrl.load().await;
            state.try_update(|s| s.apply_loaded(result));
        });
    };
    Effect::new(move || reload());

    let run = move |mutation: ModelMutation| {
        let ctrl = controller.get_value();
        leptos::task::spawn_local(async move {
            if ctrl.execute(&mutation).await.is_ok() {
                reload();
            } else {
                state.try_update(|s| s.restore_failed_update(&mutation));
            }
        });
    };

    let on_card_action = Callback::new(move |(action, id): (ModelCardAction, String)| match action {
        ModelCardAction::Configure => {
            state.update(|s| {
                s.open_configure(&id);
            });
        }
        ModelCardAction::Duplicate => {
            if let Some(model) = state.with_untracked(|s| s.find(&id).cloned()) {
                run(ModelMutation::duplicate(&model));
            }
        }
        ModelCardAction::Delete => state.update(|s| s.request_delete(&id)),
        ModelCardAction::ToggleDefault => run(ModelMutation::ToggleDefault(id)),
        ModelCardAction::ToggleStatus => run(ModelMutation::ToggleStatus(id)),
    });

    let on_submit = Callback::new(move |payload: AiModelPayload| {
        let mut mutation = None;
        state.update(|s| mutation = Some(s.take_submission(payload)));
        if let Some(mutation) = mutation {
            run(mutation);
        }
    });
    let on_cancel = Callback::new(move |()| state.update(ModelsState::close_form));
    let on_confirm_delete = Callback::new(move |()| {
        let mut mutation = None;
        state.update(|s| mutation = s.confirm_delete());
        if let Some(mutation) = mutation {
            run(mutation);
        }
    });
    let on_cancel_delete = Callback::new(move |()| state.update(|s| s.pending_delete = None));

    let tab_labels = ModelTab::ALL.iter().map(|t| t.label().to_owned()).collect::<Vec<_>>();
    let active_tab = Signal::derive(move || {
        let tab = state.with(|s| s.tab);
        ModelTab::ALL.iter().position(|t| *t == tab).unwrap_or_default()
    });
    let on_tab = Callback::new(move |index: usize| {
        if let Some(tab) = ModelTab::ALL.get(index) {
            state.update(|s| s.tab = *tab);
        }
    });

    let delete_name = move || {
        state.with(|s| {
            s.pending_delete
                .as_deref()
                .and_then(|id| s.find(id))
                .map_or_else(String::new, |m| m.name.clone())
        })
    };

    view! {
        <section class="page models-page">
            <PageHeader title="AI Models" description="Configure the models that power your chat widget.">
                <button class="btn btn--primary" on:click=move |_| state.update(ModelsState::open_create)>
                    "+ Add model"
                </button>
            </PageHeader>

            <div class="page__toolbar">
                <input
                    class="form__input page__search"
                    type="search"
                    placeholder="Search by name, provider, or description"
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
                />
                <TabBar labels=tab_labels active=active_tab on_change=on_tab/>
            </div>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !state.with(|s| s.loading && s.items.is_empty())
                fallback=|| view! { <p class="page__loading">"Loading models..."</p> }
            >
                <Show
                    when=move || state.with(|s| !s.filtered().is_empty())
                    fallback=move || {
                        view! {
                            <EmptyState message="No models match your filters.">
                                <button class="btn" on:click=move |_| state.update(ModelsState::open_create)>
                                    "Add your first model"
                                </button>
                            </EmptyState>
                        }
                    }
                >
                    <div class="card-grid">
                        {move || {
                            state
                                .with(|s| s.filtered().into_iter().cloned().collect::<Vec<_>>())
                                .into_iter()
                                .map(|model| view! { <ModelCard model=model on_action=on_card_action/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || state.with(|s| s.form_open)>
                {move || {
                    let (draft, editing) = state
                        .with_untracked(|s| (ModelDraft::for_target(s.editing.as_ref()), s.editing.is_some()));
                    view! { <ModelForm initial=draft editing=editing on_submit=on_submit on_cancel=on_cancel/> }
                }}
            </Show>

            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog
                    title="Delete model"
                    message=delete_name()
                        + " will be removed. Conversations using it fall back to the default model."
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </section>
    }
}
