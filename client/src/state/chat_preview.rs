//! Transcript state for the widget's chat preview.
//!
//! The preview is a local simulation: a welcome message is seeded, the
//! user's message is appended immediately, and a bot reply produced by a
//! `ReplyStrategy` is appended after the strategy's delay. The component
//! owns the timer; this module only tracks the transcript and the typing
//! indicator so a real backend can replace `CannedReply` without touching it.

#[cfg(test)]
#[path = "chat_preview_test.rs"]
mod chat_preview_test;

use std::time::Duration;

/// Default pause before the canned reply appears.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

pub const CANNED_REPLY_TEXT: &str =
    "Thanks for your message! This is a preview, so replies are simulated. Your live widget will answer here.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewRole {
    Bot,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewMessage {
    pub id: u64,
    pub role: PreviewRole,
    pub text: String,
}

/// Produces the bot's answer to a user message.
pub trait ReplyStrategy {
    fn reply(&self, user_text: &str) -> String;

    fn delay(&self) -> Duration {
        DEFAULT_REPLY_DELAY
    }
}

/// Fixed reply after a fixed delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CannedReply {
    pub text: String,
    pub delay: Duration,
}

impl Default for CannedReply {
    fn default() -> Self {
        Self { text: CANNED_REPLY_TEXT.to_owned(), delay: DEFAULT_REPLY_DELAY }
    }
}

impl ReplyStrategy for CannedReply {
    fn reply(&self, _user_text: &str) -> String {
        self.text.clone()
    }

    fn delay(&self) -> Duration {
        self.delay
    }
}

/// A reply the component must deliver after `delay`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub text: String,
    pub delay: Duration,
    /// Transcript generation the reply was scheduled in.
    pub generation: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ChatPreviewState {
    pub messages: Vec<PreviewMessage>,
    /// Replies scheduled but not yet delivered; the typing indicator shows while non-zero.
    pub pending_replies: usize,
    welcome: String,
    next_id: u64,
    /// Bumped on every seed; replies from an older generation are dropped.
    generation: u64,
}

impl ChatPreviewState {
    #[must_use]
    pub fn new(welcome_message: &str) -> Self {
        let mut state = Self::default();
        state.seed(welcome_message);
        state
    }

    /// Reset the transcript to just the welcome message (if non-blank).
    pub fn seed(&mut self, welcome_message: &str) {
        self.messages.clear();
        self.pending_replies = 0;
        self.generation += 1;
        self.welcome = welcome_message.to_owned();
        if !welcome_message.trim().is_empty() {
            self.append(PreviewRole::Bot, welcome_message.to_owned());
        }
    }

    /// Re-seed only when the welcome text actually changed.
    pub fn reseed_if_changed(&mut self, welcome_message: &str) -> bool {
        if self.welcome == welcome_message {
            return false;
        }
        self.seed(welcome_message);
        true
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    /// Append the user's message and schedule a reply. Blank input is ignored.
    pub fn send<R: ReplyStrategy + ?Sized>(&mut self, input: &str, strategy: &R) -> Option<PendingReply> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.append(PreviewRole::User, text.to_owned());
        self.pending_replies += 1;
        Some(PendingReply { text: strategy.reply(text), delay: strategy.delay(), generation: self.generation })
    }

    /// Deliver a reply whose delay has elapsed. Returns `false` when the
    /// transcript was re-seeded after the reply was scheduled.
    pub fn deliver(&mut self, reply: PendingReply) -> bool {
        if reply.generation != self.generation {
            return false;
        }
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.append(PreviewRole::Bot, reply.text);
        true
    }

    fn append(&mut self, role: PreviewRole, text: String) {
        self.next_id += 1;
        self.messages.push(PreviewMessage { id: self.next_id, role, text });
    }
}
