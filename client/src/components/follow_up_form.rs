//! Follow-up flow editor dialog.
//!
//! DESIGN
//! ======
//! The editor lives inside `FollowUpsState` so the branch-target list can see
//! the other flows. This component only reads and updates it; submission
//! hands the resulting mutation to the page.

use leptos::prelude::*;
use records::{ConditionKind, FollowUpOption, Position, RuleOperator, UseCase, ValidationErrors};

use crate::components::field_error::FieldError;
use crate::state::follow_up_controller::FollowUpMutation;
use crate::state::follow_ups::{FollowUpEditor, FollowUpsState, Move};

fn read<T: Default>(state: RwSignal<FollowUpsState>, f: impl FnOnce(&FollowUpEditor) -> T) -> T {
    state.with(|s| s.editor.as_ref().map(f).unwrap_or_default())
}

fn edit(state: RwSignal<FollowUpsState>, f: impl FnOnce(&mut FollowUpEditor)) {
    state.update(|s| {
        if let Some(editor) = s.editor.as_mut() {
            f(editor);
        }
    });
}

#[component]
pub fn FollowUpForm(
    state: RwSignal<FollowUpsState>,
    on_submit: Callback<FollowUpMutation>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let errors = RwSignal::new(ValidationErrors::new());
    let editing = read(state, |e| e.editing_id.is_some());

    let submit = move || {
        let mut outcome = Ok(None);
        state.update(|s| outcome = s.submit());
        match outcome {
            Ok(Some(mutation)) => on_submit.run(mutation),
            Ok(None) => {}
            Err(e) => errors.set(e),
        }
    };

    let options = move || read(state, |e| e.payload.options.clone());
    let condition_count = move || read(state, |e| e.payload.rules.as_ref().map_or(0, |r| r.conditions.len()));

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
                <h2>{if editing { "Edit Follow-up" } else { "New Follow-up" }}</h2>

                <label class="form__label">
                    "Name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || read(state, |e| e.payload.name.clone())
                        on:input=move |ev| edit(state, |e| e.payload.name = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="name"/>
                </label>

                <label class="form__label">
                    "Message"
                    <textarea
                        class="form__input"
                        rows="3"
                        prop:value=move || read(state, |e| e.payload.content.clone())
                        on:input=move |ev| edit(state, |e| e.payload.content = event_target_value(&ev))
                    ></textarea>
                    <FieldError errors=errors field="content"/>
                </label>

                <div class="form__row">
                    <label class="form__label">
                        "Position"
                        <select
                            class="form__input"
                            prop:value=move || read(state, |e| e.payload.position.as_str().to_owned())
                            on:change=move |ev| {
                                if let Ok(position) = event_target_value(&ev).parse::<Position>() {
                                    edit(state, |e| e.payload.position = position);
                                }
                            }
                        >
                            {Position::ALL
                                .iter()
                                .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="form__label">
                        "Use case"
                        <select
                            class="form__input"
                            prop:value=move || read(state, |e| e.payload.use_case.as_str().to_owned())
                            on:change=move |ev| {
                                if let Ok(use_case) = event_target_value(&ev).parse::<UseCase>() {
                                    edit(state, |e| e.payload.use_case = use_case);
                                }
                            }
                        >
                            {UseCase::ALL
                                .iter()
                                .map(|u| view! { <option value=u.as_str()>{u.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <fieldset class="form__group">
                    <legend>"Options"</legend>
                    <For
                        each=options
                        key=|option: &FollowUpOption| option.id.clone()
                        children=move |option: FollowUpOption| {
                            view! { <OptionRow state=state option_id=option.id errors=errors/> }
                        }
                    />
                    <button
                        type="button"
                        class="btn"
                        on:click=move |_| edit(state, |e| {
                            e.add_option();
                        })
                    >
                        "+ Add option"
                    </button>
                </fieldset>

                <fieldset class="form__group">
                    <legend>"Activation rules"</legend>
                    <label class="form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || read(state, FollowUpEditor::rules_enabled)
                            on:change=move |ev| {
                                let enabled = event_target_checked(&ev);
                                edit(state, |e| e.set_rules_enabled(enabled));
                            }
                        />
                        "Only show when conditions match"
                    </label>
                    <Show when=move || read(state, FollowUpEditor::rules_enabled)>
                        <select
                            class="form__input"
                            prop:value=move || {
                                read(state, |e| e.payload.rules.as_ref().map(|r| r.operator.as_str().to_owned()))
                                    .unwrap_or_default()
                            }
                            on:change=move |ev| {
                                if let Ok(operator) = event_target_value(&ev).parse::<RuleOperator>() {
                                    edit(state, |e| e.set_operator(operator));
                                }
                            }
                        >
                            {RuleOperator::ALL
                                .iter()
                                .map(|o| view! { <option value=o.as_str()>{o.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <For
                            each=move || 0..condition_count()
                            key=|index| *index
                            children=move |index| view! { <ConditionRow state=state index=index errors=errors/> }
                        />
                        <button type="button" class="btn" on:click=move |_| edit(state, FollowUpEditor::add_condition)>
                            "+ Add condition"
                        </button>
                    </Show>
                </fieldset>

                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        {if editing { "Save changes" } else { "Create follow-up" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn OptionRow(state: RwSignal<FollowUpsState>, option_id: String, errors: RwSignal<ValidationErrors>) -> impl IntoView {
    let id = StoredValue::new(option_id);
    let position = move || read(state, |e| id.with_value(|id| e.payload.options.iter().position(|o| &o.id == id)));
    let option = move || read(state, |e| id.with_value(|id| e.payload.options.iter().find(|o| &o.id == id).cloned()));
    let label_error = move || {
        position().and_then(|i| errors.with(|errs| errs.for_field(&format!("options.{i}.label")).map(str::to_owned)))
    };

    view! {
        <div class="form__option">
            <input
                class="form__input"
                type="text"
                placeholder="Option label"
                prop:value=move || option().map(|o| o.label).unwrap_or_default()
                on:input=move |ev| {
                    let label = event_target_value(&ev);
                    edit(state, |e| id.with_value(|id| e.set_option_label(id, &label)));
                }
            />
            <select
                class="form__input"
                prop:value=move || option().and_then(|o| o.next_follow_up_id).unwrap_or_default()
                on:change=move |ev| {
                    let target = event_target_value(&ev);
                    let target = (!target.is_empty()).then_some(target);
                    edit(state, |e| {
                        id.with_value(|id| e.set_branch(id, target.as_deref()));
                    });
                }
            >
                <option value="">"No branch"</option>
                {move || {
                    state
                        .with(FollowUpsState::branch_choices)
                        .into_iter()
                        .map(|(value, name)| view! { <option value=value>{name}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
            <button
                type="button"
                class="btn btn--icon"
                title="Move up"
                on:click=move |_| edit(state, |e| {
                    id.with_value(|id| e.move_option(id, Move::Up));
                })
            >
                "↑"
            </button>
            <button
                type="button"
                class="btn btn--icon"
                title="Move down"
                on:click=move |_| edit(state, |e| {
                    id.with_value(|id| e.move_option(id, Move::Down));
                })
            >
                "↓"
            </button>
            <button
                type="button"
                class="btn btn--icon btn--danger"
                title="Remove option"
                on:click=move |_| edit(state, |e| id.with_value(|id| e.remove_option(id)))
            >
                "✕"
            </button>
            {move || label_error().map(|msg| view! { <span class="form__error" role="alert">{msg}</span> })}
        </div>
    }
}

#[component]
fn ConditionRow(state: RwSignal<FollowUpsState>, index: usize, errors: RwSignal<ValidationErrors>) -> impl IntoView {
    let condition = move || {
        read(state, |e| e.payload.rules.as_ref().and_then(|r| r.conditions.get(index).cloned())).unwrap_or_default()
    };
    let error_for = move |part: &'static str| {
        move || errors.with(|errs| errs.for_field(&format!("rules.{index}.{part}")).map(str::to_owned))
    };

    view! {
        <div class="form__condition">
            <input
                class="form__input"
                type="text"
                placeholder="Field (e.g. page_url)"
                prop:value=move || condition().field
                on:input=move |ev| {
                    let field = event_target_value(&ev);
                    edit(state, |e| {
                        if let Some(c) = e.condition_mut(index) {
                            c.field = field;
                        }
                    });
                }
            />
            <select
                class="form__input"
                prop:value=move || condition().condition.as_str().to_owned()
                on:change=move |ev| {
                    if let Ok(kind) = event_target_value(&ev).parse::<ConditionKind>() {
                        edit(state, |e| {
                            if let Some(c) = e.condition_mut(index) {
                                c.condition = kind;
                            }
                        });
                    }
                }
            >
                {ConditionKind::ALL
                    .iter()
                    .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <input
                class="form__input"
                type="text"
                placeholder="Value"
                prop:value=move || condition().value
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit(state, |e| {
                        if let Some(c) = e.condition_mut(index) {
                            c.value = value;
                        }
                    });
                }
            />
            <button
                type="button"
                class="btn btn--icon btn--danger"
                title="Remove condition"
                on:click=move |_| edit(state, |e| e.remove_condition(index))
            >
                "✕"
            </button>
            {move || error_for("field")().map(|msg| view! { <span class="form__error" role="alert">{msg}</span> })}
            {move || error_for("value")().map(|msg| view! { <span class="form__error" role="alert">{msg}</span> })}
        </div>
    }
}
