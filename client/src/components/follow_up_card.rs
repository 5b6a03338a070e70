//! Row card for one follow-up flow.

use leptos::prelude::*;
use records::{FollowUp, FollowUpStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUpCardAction {
    Edit,
    Delete,
    ToggleStatus,
}

#[component]
pub fn FollowUpCard(
    follow_up: FollowUp,
    /// Names of the flows this one branches to.
    branch_names: Vec<String>,
    on_action: Callback<(FollowUpCardAction, String)>,
) -> impl IntoView {
    let enabled = follow_up.status == FollowUpStatus::Enabled;
    let rule_summary = follow_up.rules.as_ref().map(|rules| {
        format!("{} condition(s), match {}", rules.conditions.len(), rules.operator.label().to_lowercase())
    });
    let id = follow_up.id.clone();
    let fire = move |action: FollowUpCardAction| {
        let id = id.clone();
        move |_: leptos::ev::MouseEvent| on_action.run((action, id.clone()))
    };

    view! {
        <article class="follow-up-card" class:follow-up-card--disabled=!enabled>
            <header class="follow-up-card__header">
                <h3 class="follow-up-card__name">{follow_up.name}</h3>
                <span class="badge">{follow_up.use_case.label()}</span>
                <span class="badge badge--muted">{follow_up.position.label()}</span>
            </header>
            <p class="follow-up-card__content">{follow_up.content}</p>
            <ul class="follow-up-card__options">
                {follow_up
                    .options
                    .into_iter()
                    .map(|o| view! { <li class="chip">{o.label}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            {(!branch_names.is_empty())
                .then(|| {
                    view! {
                        <p class="follow-up-card__branches">"Branches to: " {branch_names.join(", ")}</p>
                    }
                })}
            {rule_summary.map(|s| view! { <p class="follow-up-card__rules">{s}</p> })}
            <footer class="follow-up-card__actions">
                <button class="btn btn--primary" on:click=fire(FollowUpCardAction::Edit)>
                    "Edit"
                </button>
                <button class="btn" on:click=fire(FollowUpCardAction::ToggleStatus)>
                    {if enabled { "Disable" } else { "Enable" }}
                </button>
                <button class="btn btn--danger" on:click=fire(FollowUpCardAction::Delete)>
                    "Delete"
                </button>
            </footer>
        </article>
    }
}
