//! Widget "Content" tab: texts, identity, and language.

use leptos::prelude::*;
use records::{ContentSettings, Language};

use crate::components::field_error::FieldError;
use crate::state::widget::WidgetState;

fn read<T>(state: RwSignal<WidgetState>, f: impl FnOnce(&ContentSettings) -> T) -> T {
    state.with(|s| f(&s.settings.content))
}

fn edit(state: RwSignal<WidgetState>, f: impl FnOnce(&mut ContentSettings)) {
    state.update(|s| f(&mut s.settings.content));
}

#[component]
pub fn WidgetContentTab(state: RwSignal<WidgetState>) -> impl IntoView {
    let errors = Signal::derive(move || state.with(|s| s.errors.clone()));

    view! {
        <div class="form widget-tab">
            <label class="form__label">
                "Title"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || read(state, |c| c.title.clone())
                    on:input=move |ev| edit(state, |c| c.title = event_target_value(&ev))
                />
                <FieldError errors=errors field="title"/>
            </label>
            <label class="form__label">
                "Subtitle"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || read(state, |c| c.subtitle.clone())
                    on:input=move |ev| edit(state, |c| c.subtitle = event_target_value(&ev))
                />
                <FieldError errors=errors field="subtitle"/>
            </label>
            <div class="form__row">
                <label class="form__label">
                    "Bot name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || read(state, |c| c.bot_name.clone())
                        on:input=move |ev| edit(state, |c| c.bot_name = event_target_value(&ev))
                    />
                    <FieldError errors=errors field="botName"/>
                </label>
                <label class="form__label">
                    "Language"
                    <select
                        class="form__input"
                        prop:value=move || read(state, |c| c.language.as_str().to_owned())
                        on:change=move |ev| {
                            if let Ok(language) = event_target_value(&ev).parse::<Language>() {
                                edit(state, |c| c.language = language);
                            }
                        }
                    >
                        {Language::ALL
                            .iter()
                            .map(|l| view! { <option value=l.as_str()>{l.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>
            <label class="form__label">
                "Welcome message"
                <textarea
                    class="form__input"
                    rows="3"
                    prop:value=move || read(state, |c| c.welcome_message.clone())
                    on:input=move |ev| edit(state, |c| c.welcome_message = event_target_value(&ev))
                ></textarea>
                <FieldError errors=errors field="welcomeMessage"/>
            </label>
            <label class="form__label">
                "Avatar URL"
                <input
                    class="form__input"
                    type="url"
                    placeholder="https://example.com/avatar.png"
                    prop:value=move || read(state, |c| c.avatar_url.clone())
                    on:input=move |ev| edit(state, |c| c.avatar_url = event_target_value(&ev))
                />
                <FieldError errors=errors field="avatarUrl"/>
            </label>
            <label class="form__label">
                "Input placeholder"
                <input
                    class="form__input"
                    type="text"
                    prop:value=move || read(state, |c| c.input_placeholder.clone())
                    on:input=move |ev| edit(state, |c| c.input_placeholder = event_target_value(&ev))
                />
            </label>
        </div>
    }
}
