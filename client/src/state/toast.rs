//! Toast notifications and the `Notifier` seam controllers report through.
//!
//! DESIGN
//! ======
//! Controllers only know the `Notifier` trait. In the app it is backed by a
//! `RwSignal<ToastState>` rendered by `ToastStack`; tests substitute a
//! recorder.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::ApiError;
use crate::net::cache::{QueryCache, QueryKey};

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 5;

/// Title used on every failure toast.
pub const ERROR_TITLE: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Visible toasts, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: &str, message: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, title: title.to_owned(), message: message.to_owned() });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Where controllers send user-visible mutation outcomes.
pub trait Notifier {
    fn success(&self, title: &str, message: &str);
    fn error(&self, title: &str, message: &str);
}

/// `Notifier` backed by the app-wide toast signal.
#[derive(Clone, Copy, Debug)]
pub struct SignalNotifier(pub RwSignal<ToastState>);

impl Notifier for SignalNotifier {
    fn success(&self, title: &str, message: &str) {
        self.0.update(|t| {
            t.push(ToastKind::Success, title, message);
        });
    }

    fn error(&self, title: &str, message: &str) {
        self.0.update(|t| {
            t.push(ToastKind::Error, title, message);
        });
    }
}

/// Fixed user-facing strings for one kind of mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MutationMessages {
    pub success_title: &'static str,
    pub success_message: &'static str,
    pub error_message: &'static str,
}

/// Settle a finished mutation: on success invalidate `key` and notify, on
/// failure log and notify. The result is passed through unchanged.
///
/// # Errors
///
/// Returns the mutation's own error.
pub fn settle_mutation<N: Notifier>(
    notifier: &N,
    cache: &QueryCache,
    key: QueryKey,
    messages: MutationMessages,
    result: Result<(), ApiError>,
) -> Result<(), ApiError> {
    match &result {
        Ok(()) => {
            cache.invalidate(key);
            notifier.success(messages.success_title, messages.success_message);
        }
        Err(e) => {
            log::error!("{} ({}): {e}", messages.error_message, key.0);
            notifier.error(ERROR_TITLE, messages.error_message);
        }
    }
    result
}
