//! Inline validation message under a form control.

use leptos::prelude::*;
use records::ValidationErrors;

#[component]
pub fn FieldError(#[prop(into)] errors: Signal<ValidationErrors>, field: &'static str) -> impl IntoView {
    let message = move || errors.with(|e| e.for_field(field).map(str::to_owned));
    view! {
        <Show when=move || message().is_some()>
            <span class="form__error" role="alert">{move || message().unwrap_or_default()}</span>
        </Show>
    }
}
