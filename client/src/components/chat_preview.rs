//! Live preview of the widget as a visitor would see it.
//!
//! The transcript is simulated locally: the welcome message is re-seeded
//! whenever it changes in the content tab, and replies come from the
//! injected `ReplyStrategy` after its delay. Pending replies are dropped once
//! the preview unmounts or the transcript is re-seeded.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use records::{AppearanceSettings, ContentSettings, LauncherPosition};

use crate::state::chat_preview::{CannedReply, ChatPreviewState, PendingReply, PreviewRole, ReplyStrategy};
use crate::util::markdown::render_markdown_html;

/// Shared handle to a reply strategy.
pub type SharedReplyStrategy = Arc<dyn ReplyStrategy + Send + Sync>;

#[component]
pub fn ChatPreview(
    #[prop(into)] content: Signal<ContentSettings>,
    #[prop(into)] appearance: Signal<AppearanceSettings>,
    #[prop(optional)] replies: Option<SharedReplyStrategy>,
) -> impl IntoView {
    let replies = StoredValue::new(replies.unwrap_or_else(|| Arc::new(CannedReply::default())));
    let transcript = RwSignal::new(ChatPreviewState::new(&content.with_untracked(|c| c.welcome_message.clone())));
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = Arc::clone(&alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    Effect::new(move || {
        let welcome = content.with(|c| c.welcome_message.clone());
        transcript.update(|t| {
            t.reseed_if_changed(&welcome);
        });
    });

    Effect::new(move || {
        let _ = transcript.with(|t| t.messages.len());
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let alive = StoredValue::new(alive);
    let send = move || {
        let text = input.get_untracked();
        let mut pending: Option<PendingReply> = None;
        replies.with_value(|strategy| {
            transcript.update(|t| pending = t.send(&text, strategy.as_ref()));
        });
        let Some(reply) = pending else {
            return;
        };
        input.set(String::new());
        let alive = alive.get_value();
        schedule_reply(transcript, reply, alive);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    let accent = move || appearance.with(|a| format!("--widget-accent: {}", a.primary_color));
    let left = move || appearance.with(|a| a.position == LauncherPosition::BottomLeft);

    view! {
        <div
            class="chat-preview"
            class:chat-preview--rounded=move || appearance.with(|a| a.rounded_corners)
            class:chat-preview--left=left
            style=accent
        >
            <header class="chat-preview__header">
                <Show when=move || appearance.with(|a| a.show_avatar) && content.with(|c| !c.avatar_url.is_empty())>
                    <img class="chat-preview__avatar" src=move || content.with(|c| c.avatar_url.clone()) alt=""/>
                </Show>
                <div>
                    <strong class="chat-preview__title">{move || content.with(|c| c.title.clone())}</strong>
                    <span class="chat-preview__subtitle">{move || content.with(|c| c.subtitle.clone())}</span>
                </div>
            </header>

            <div class="chat-preview__messages" node_ref=messages_ref>
                <For
                    each=move || transcript.with(|t| t.messages.clone())
                    key=|message| message.id
                    children=move |message| {
                        let is_bot = message.role == PreviewRole::Bot;
                        view! {
                            <div
                                class="chat-preview__message"
                                class:chat-preview__message--bot=is_bot
                                class:chat-preview__message--user=!is_bot
                            >
                                {is_bot
                                    .then(|| {
                                        view! {
                                            <span class="chat-preview__sender">
                                                {move || content.with(|c| c.bot_name.clone())}
                                            </span>
                                        }
                                    })}
                                {if is_bot {
                                    let rendered = render_markdown_html(&message.text);
                                    view! { <div class="chat-preview__markdown" inner_html=rendered></div> }.into_any()
                                } else {
                                    view! { <span>{message.text}</span> }.into_any()
                                }}
                            </div>
                        }
                    }
                />
                <Show when=move || transcript.with(ChatPreviewState::is_typing)>
                    <div class="chat-preview__typing" aria-label="Typing">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </Show>
            </div>

            <div class="chat-preview__input-row">
                <input
                    class="chat-preview__input"
                    type="text"
                    placeholder=move || content.with(|c| c.input_placeholder.clone())
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-preview__send"
                    on:click=move |_| send()
                    disabled=move || input.with(|i| i.trim().is_empty())
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Deliver `reply` after its delay unless the preview has been torn down.
fn schedule_reply(transcript: RwSignal<ChatPreviewState>, reply: PendingReply, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(reply.delay).await;
            if alive.load(Ordering::Relaxed) {
                transcript.update(|t| {
                    t.deliver(reply);
                });
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (transcript, reply, alive);
    }
}
