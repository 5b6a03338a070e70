//! Widget "Appearance" tab: color, placement, and theme.

use leptos::prelude::*;
use records::{AppearanceSettings, LauncherPosition, Theme};

use crate::components::field_error::FieldError;
use crate::state::widget::WidgetState;

fn read<T>(state: RwSignal<WidgetState>, f: impl FnOnce(&AppearanceSettings) -> T) -> T {
    state.with(|s| f(&s.settings.appearance))
}

fn edit(state: RwSignal<WidgetState>, f: impl FnOnce(&mut AppearanceSettings)) {
    state.update(|s| f(&mut s.settings.appearance));
}

#[component]
pub fn WidgetAppearanceTab(state: RwSignal<WidgetState>) -> impl IntoView {
    let errors = Signal::derive(move || state.with(|s| s.errors.clone()));

    view! {
        <div class="form widget-tab">
            <label class="form__label">
                "Primary color"
                <div class="form__color">
                    <input
                        type="color"
                        prop:value=move || read(state, |a| a.primary_color.clone())
                        on:input=move |ev| edit(state, |a| a.primary_color = event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || read(state, |a| a.primary_color.clone())
                        on:input=move |ev| edit(state, |a| a.primary_color = event_target_value(&ev))
                    />
                </div>
                <FieldError errors=errors field="primaryColor"/>
            </label>
            <div class="form__row">
                <label class="form__label">
                    "Launcher position"
                    <select
                        class="form__input"
                        prop:value=move || read(state, |a| a.position.as_str().to_owned())
                        on:change=move |ev| {
                            if let Ok(position) = event_target_value(&ev).parse::<LauncherPosition>() {
                                edit(state, |a| a.position = position);
                            }
                        }
                    >
                        {LauncherPosition::ALL
                            .iter()
                            .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="form__label">
                    "Theme"
                    <select
                        class="form__input"
                        prop:value=move || read(state, |a| a.theme.as_str().to_owned())
                        on:change=move |ev| {
                            if let Ok(theme) = event_target_value(&ev).parse::<Theme>() {
                                edit(state, |a| a.theme = theme);
                            }
                        }
                    >
                        {Theme::ALL
                            .iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>
            <label class="form__check">
                <input
                    type="checkbox"
                    prop:checked=move || read(state, |a| a.show_avatar)
                    on:change=move |ev| edit(state, |a| a.show_avatar = event_target_checked(&ev))
                />
                "Show bot avatar"
            </label>
            <label class="form__check">
                <input
                    type="checkbox"
                    prop:checked=move || read(state, |a| a.rounded_corners)
                    on:change=move |ev| edit(state, |a| a.rounded_corners = event_target_checked(&ev))
                />
                "Rounded corners"
            </label>
        </div>
    }
}
