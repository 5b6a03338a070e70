//! Widget "Advanced" tab: behavior toggles and the embed snippet.

use leptos::prelude::*;
use records::AdvancedSettings;

use crate::state::widget::WidgetState;
use crate::util::clipboard;

/// Label, hint, and accessor for one boolean behavior setting.
struct Toggle {
    label: &'static str,
    hint: &'static str,
    get: fn(&AdvancedSettings) -> bool,
    set: fn(&mut AdvancedSettings, bool),
}

const TOGGLES: [Toggle; 5] = [
    Toggle {
        label: "Notification sound",
        hint: "Play a sound when a new reply arrives.",
        get: |a| a.enable_sound,
        set: |a, v| a.enable_sound = v,
    },
    Toggle {
        label: "Persist conversation",
        hint: "Keep the transcript across page loads.",
        get: |a| a.persist_conversation,
        set: |a, v| a.persist_conversation = v,
    },
    Toggle {
        label: "Show branding",
        hint: "Display the \"Powered by\" footer.",
        get: |a| a.show_branding,
        set: |a, v| a.show_branding = v,
    },
    Toggle {
        label: "File uploads",
        hint: "Let visitors attach files.",
        get: |a| a.enable_file_upload,
        set: |a, v| a.enable_file_upload = v,
    },
    Toggle {
        label: "Collect email",
        hint: "Ask for an email address before chatting.",
        get: |a| a.collect_email,
        set: |a, v| a.collect_email = v,
    },
];

#[component]
pub fn WidgetAdvancedTab(state: RwSignal<WidgetState>) -> impl IntoView {
    let copied = RwSignal::new(false);
    let snippet = move || state.with(|s| s.settings.advanced.embed_snippet.clone());

    let on_copy = move |_| {
        if clipboard::copy_text(&snippet()) {
            copied.set(true);
        }
    };

    view! {
        <div class="form widget-tab">
            {TOGGLES
                .into_iter()
                .map(|Toggle { label, hint, get, set }| {
                    view! {
                        <label class="form__check">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| get(&s.settings.advanced))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    state.update(|s| set(&mut s.settings.advanced, checked));
                                }
                            />
                            <span class="form__check-label">{label}</span>
                            <span class="form__hint">{hint}</span>
                        </label>
                    }
                })
                .collect::<Vec<_>>()}

            <div class="form__label">
                "Embed code"
                <pre class="embed-snippet"><code>{snippet}</code></pre>
                <button class="btn" on:click=on_copy>
                    {move || if copied.get() { "Copied" } else { "Copy to clipboard" }}
                </button>
            </div>
        </div>
    }
}
