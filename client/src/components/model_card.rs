//! Card for one AI model in the models grid.
//!
//! DESIGN
//! ======
//! The card only raises intents by id; the models page decides what each one
//! means and runs it through the controller.

use leptos::prelude::*;
use records::{AiModel, ModelStatus};

/// Actions a model card can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelCardAction {
    Configure,
    Duplicate,
    Delete,
    ToggleDefault,
    ToggleStatus,
}

#[component]
pub fn ModelCard(model: AiModel, on_action: Callback<(ModelCardAction, String)>) -> impl IntoView {
    let AiModel { id, name, provider, description, model_type, max_tokens, temperature, status, capabilities, is_default, .. } =
        model;
    let fire = move |action: ModelCardAction| {
        let id = id.clone();
        move |_: leptos::ev::MouseEvent| on_action.run((action, id.clone()))
    };
    let status_class = match status {
        ModelStatus::Active => "badge badge--success",
        ModelStatus::Inactive => "badge badge--muted",
        ModelStatus::Testing => "badge badge--warning",
    };
    let status_toggle_label = if status == ModelStatus::Active { "Deactivate" } else { "Activate" };

    view! {
        <article class="model-card" class:model-card--default=is_default>
            <header class="model-card__header">
                <div>
                    <h3 class="model-card__name">{name}</h3>
                    <span class="model-card__provider">{provider} " · " {model_type}</span>
                </div>
                <span class=status_class>{status.label()}</span>
            </header>
            <p class="model-card__description">{description}</p>
            <dl class="model-card__limits">
                <dt>"Max tokens"</dt>
                <dd>{max_tokens}</dd>
                <dt>"Temperature"</dt>
                <dd>{format!("{temperature:.1}")}</dd>
            </dl>
            <ul class="model-card__capabilities">
                {capabilities.into_iter().map(|c| view! { <li class="chip">{c}</li> }).collect::<Vec<_>>()}
            </ul>
            <footer class="model-card__actions">
                <button class="btn btn--primary" on:click=fire(ModelCardAction::Configure)>
                    "Configure"
                </button>
                <button class="btn" on:click=fire(ModelCardAction::Duplicate)>
                    "Duplicate"
                </button>
                <button class="btn" on:click=fire(ModelCardAction::ToggleStatus)>
                    {status_toggle_label}
                </button>
                <button class="btn" disabled=is_default on:click=fire(ModelCardAction::ToggleDefault)>
                    {if is_default { "Default" } else { "Make default" }}
                </button>
                <button class="btn btn--danger" on:click=fire(ModelCardAction::Delete)>
                    "Delete"
                </button>
            </footer>
        </article>
    }
}
