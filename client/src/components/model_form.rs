//! Model configuration dialog.
//!
//! Binds a `ModelDraft` to controlled inputs. Submission builds and validates
//! the payload; only a valid payload reaches `on_submit`.

use leptos::prelude::*;
use records::{AiModelPayload, ModelStatus, ValidationErrors};

use crate::components::field_error::FieldError;
use crate::state::model_form::ModelDraft;

const PROVIDERS: [(&str, &str); 5] = [
    ("openai", "OpenAI"),
    ("anthropic", "Anthropic"),
    ("google", "Google"),
    ("mistral", "Mistral"),
    ("custom", "Custom (OpenAI-compatible)"),
];

const MODEL_TYPES: [(&str, &str); 3] = [("chat", "Chat"), ("completion", "Completion"), ("embedding", "Embedding")];

#[component]
pub fn ModelForm(
    initial: ModelDraft,
    /// `true` when configuring an existing model.
    editing: bool,
    on_submit: Callback<AiModelPayload>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(initial);
    let errors = RwSignal::new(ValidationErrors::new());

    let submit = move || match draft.with_untracked(ModelDraft::build) {
        Ok(payload) => {
            errors.set(ValidationErrors::new());
            on_submit.run(payload);
        }
        Err(e) => errors.set(e),
    };

    let on_capability_key = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            draft.update(ModelDraft::commit_capability);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                class="dialog dialog--wide form"
                on:click=move |ev| ev.stop_propagation()
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h2>{if editing { "Configure AI Model" } else { "Add AI Model" }}</h2>

                <label class="form__label">
                    "Name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="name"/>
                </label>

                <div class="form__row">
                    <label class="form__label">
                        "Provider"
                        <select
                            class="form__input"
                            prop:value=move || draft.with(|d| d.provider.clone())
                            on:change=move |ev| draft.update(|d| d.provider = event_target_value(&ev))
                        >
                            {PROVIDERS
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <FieldError errors=errors field="provider"/>
                    </label>
                    <label class="form__label">
                        "Model type"
                        <select
                            class="form__input"
                            prop:value=move || draft.with(|d| d.model_type.clone())
                            on:change=move |ev| draft.update(|d| d.model_type = event_target_value(&ev))
                        >
                            {MODEL_TYPES
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <FieldError errors=errors field="modelType"/>
                    </label>
                </div>

                <label class="form__label">
                    "Description"
                    <textarea
                        class="form__input"
                        rows="3"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                    <FieldError errors=errors field="description"/>
                </label>

                <div class="form__row">
                    <label class="form__label">
                        "API key"
                        <input
                            class="form__input"
                            type="password"
                            autocomplete="off"
                            prop:value=move || draft.with(|d| d.api_key.clone())
                            on:input=move |ev| draft.update(|d| d.api_key = event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Base URL"
                        <input
                            class="form__input"
                            type="url"
                            placeholder="https://api.example.com/v1"
                            prop:value=move || draft.with(|d| d.base_url.clone())
                            on:input=move |ev| draft.update(|d| d.base_url = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="baseUrl"/>
                    </label>
                </div>

                <div class="form__row">
                    <label class="form__label">
                        "Max tokens"
                        <input
                            class="form__input"
                            type="number"
                            min="1"
                            prop:value=move || draft.with(|d| d.max_tokens.clone())
                            on:input=move |ev| draft.update(|d| d.max_tokens = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="maxTokens"/>
                    </label>
                    <label class="form__label">
                        "Temperature"
                        <input
                            class="form__input"
                            type="number"
                            min="0"
                            max="2"
                            step="0.1"
                            prop:value=move || draft.with(|d| d.temperature.clone())
                            on:input=move |ev| draft.update(|d| d.temperature = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="temperature"/>
                    </label>
                    <label class="form__label">
                        "Status"
                        <select
                            class="form__input"
                            prop:value=move || draft.with(|d| d.status.clone())
                            on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                        >
                            {ModelStatus::ALL
                                .iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <FieldError errors=errors field="status"/>
                    </label>
                </div>

                <div class="form__label">
                    "Capabilities"
                    <ul class="form__chips">
                        {move || {
                            draft
                                .with(|d| d.capabilities.clone())
                                .into_iter()
                                .map(|c| {
                                    let remove = c.clone();
                                    view! {
                                        <li class="chip">
                                            {c}
                                            <button
                                                type="button"
                                                class="chip__remove"
                                                aria-label="Remove capability"
                                                on:click=move |_| draft.update(|d| d.remove_capability(&remove))
                                            >
                                                "✕"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Add a capability and press Enter"
                        prop:value=move || draft.with(|d| d.capability_input.clone())
                        on:input=move |ev| draft.update(|d| d.capability_input = event_target_value(&ev))
                        on:keydown=on_capability_key
                    />
                </div>

                <label class="form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.is_default)
                        on:change=move |ev| draft.update(|d| d.is_default = event_target_checked(&ev))
                    />
                    "Use as default model"
                </label>

                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        {if editing { "Save changes" } else { "Add model" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
