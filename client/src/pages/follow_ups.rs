//! Follow-up flows page: filterable list plus the flow editor.

#[cfg(test)]
#[path = "follow_ups_test.rs"]
mod follow_ups_test;

use leptos::prelude::*;
use records::UseCase;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::follow_up_card::{FollowUpCard, FollowUpCardAction};
use crate::components::follow_up_form::FollowUpForm;
use crate::components::page_header::PageHeader;
use crate::components::tab_bar::TabBar;
use crate::net::api::HttpApi;
use crate::net::cache::QueryCache;
use crate::state::follow_up_controller::{FollowUpController, FollowUpMutation};
use crate::state::follow_ups::FollowUpsState;
use crate::state::toast::{SignalNotifier, ToastState};

/// Filter tabs: "All" followed by each use case.
fn filter_labels() -> Vec<String> {
    std::iter::once("All".to_owned())
        .chain(UseCase::ALL.iter().map(|u| u.label().to_owned()))
        .collect()
}

fn filter_at(index: usize) -> Option<UseCase> {
    index.checked_sub(1).and_then(|i| UseCase::ALL.get(i).copied())
}

#[component]
pub fn FollowUpsPage() -> impl IntoView {
    let cache = expect_context::<QueryCache>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(FollowUpsState { loading: true, ..FollowUpsState::default() });
    let controller = StoredValue::new(FollowUpController::new(HttpApi, cache, SignalNotifier(toasts)));

    let reload = move || {
        let ctrl = controller.get_value();
        leptos::task::spawn_local(async move {
            let result = ctrl.load().await;
            state.try_update(|s| s.apply_loaded(result));
        });
    };
    Effect::new(move || reload());

    let run = move |mutation: FollowUpMutation| {
        let ctrl = controller.get_value();
        leptos::task::spawn_local(async move {
            if ctrl.execute(&mutation).await.is_ok() {
                reload();
            } else {
                state.try_update(|s| s.restore_failed_update(&mutation));
            }
        });
    };

    let on_card_action = Callback::new(move |(action, id): (FollowUpCardAction, String)| match action {
        FollowUpCardAction::Edit => {
            state.update(|s| {
                s.open_edit(&id);
            });
        }
        FollowUpCardAction::Delete => state.update(|s| s.request_delete(&id)),
        FollowUpCardAction::ToggleStatus => run(FollowUpMutation::ToggleStatus(id)),
    });
    let on_submit = Callback::new(run);
    let on_cancel = Callback::new(move |()| state.update(FollowUpsState::close_editor));
    let on_confirm_delete = Callback::new(move |()| {
        let mut mutation = None;
        state.update(|s| mutation = s.confirm_delete());
        if let Some(mutation) = mutation {
            run(mutation);
        }
    });
    let on_cancel_delete = Callback::new(move |()| state.update(|s| s.pending_delete = None));

    let active_filter = Signal::derive(move || {
        state.with(|s| s.use_case).and_then(|u| UseCase::ALL.iter().position(|c| *c == u)).map_or(0, |i| i + 1)
    });
    let on_filter = Callback::new(move |index: usize| state.update(|s| s.use_case = filter_at(index)));

    let cards = move || {
        state.with(|s| {
            s.filtered()
                .into_iter()
                .map(|f| {
                    let branch_names = f
                        .branch_targets()
                        .map(|id| s.find(id).map_or_else(|| id.to_owned(), |t| t.name.clone()))
                        .collect::<Vec<_>>();
                    (f.clone(), branch_names)
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="page follow-ups-page">
            <PageHeader title="Follow-ups" description="Scripted prompts that guide visitors after a conversation.">
                <button class="btn btn--primary" on:click=move |_| state.update(FollowUpsState::open_create)>
                    "+ New follow-up"
                </button>
            </PageHeader>

            <div class="page__toolbar">
                <input
                    class="form__input page__search"
                    type="search"
                    placeholder="Search by name or message"
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
                />
                <TabBar labels=filter_labels() active=active_filter on_change=on_filter/>
            </div>

            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="page__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <Show
                when=move || !state.with(|s| s.loading && s.items.is_empty())
                fallback=|| view! { <p class="page__loading">"Loading follow-ups..."</p> }
            >
                <Show
                    when=move || state.with(|s| !s.filtered().is_empty())
                    fallback=|| view! { <EmptyState message="No follow-ups match your filters."/> }
                >
                    <div class="card-list">
                        {move || {
                            cards()
                                .into_iter()
                                .map(|(follow_up, branch_names)| {
                                    view! {
                                        <FollowUpCard
                                            follow_up=follow_up
                                            branch_names=branch_names
                                            on_action=on_card_action
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || state.with(|s| s.editor.is_some())>
                <FollowUpForm state=state on_submit=on_submit on_cancel=on_cancel/>
            </Show>

            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog
                    title="Delete follow-up"
                    message="Options branching to this flow will no longer lead anywhere."
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </section>
    }
}
