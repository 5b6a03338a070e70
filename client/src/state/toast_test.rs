use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct Recorder {
    events: RefCell<Vec<(ToastKind, String, String)>>,
}

impl Notifier for Recorder {
    fn success(&self, title: &str, message: &str) {
        self.events
            .borrow_mut()
            .push((ToastKind::Success, title.to_owned(), message.to_owned()));
    }

    fn error(&self, title: &str, message: &str) {
        self.events
            .borrow_mut()
            .push((ToastKind::Error, title.to_owned(), message.to_owned()));
    }
}

const MESSAGES: MutationMessages = MutationMessages {
    success_title: "Saved",
    success_message: "It worked.",
    error_message: "It failed.",
};

// =============================================================
// ToastState
// =============================================================

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "A", "first");
    let b = state.push(ToastKind::Error, "B", "second");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn push_evicts_oldest_beyond_cap() {
    let mut state = ToastState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(ToastKind::Success, "t", &i.to_string());
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].message, "2");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "A", "");
    state.push(ToastKind::Success, "B", "");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].title, "B");
}

// =============================================================
// settle_mutation
// =============================================================

#[test]
fn settle_success_invalidates_and_notifies() {
    let cache = QueryCache::new();
    cache.set(crate::net::cache::AI_MODELS, 1_u8);
    let recorder = Recorder::default();

    let result = settle_mutation(&recorder, &cache, crate::net::cache::AI_MODELS, MESSAGES, Ok(()));

    assert_eq!(result, Ok(()));
    assert!(cache.is_stale(crate::net::cache::AI_MODELS));
    assert_eq!(
        recorder.events.borrow().as_slice(),
        &[(ToastKind::Success, "Saved".to_owned(), "It worked.".to_owned())]
    );
}

#[test]
fn settle_failure_keeps_cache_and_reports_error() {
    let cache = QueryCache::new();
    cache.set(crate::net::cache::AI_MODELS, 1_u8);
    let recorder = Recorder::default();

    let result = settle_mutation(
        &recorder,
        &cache,
        crate::net::cache::AI_MODELS,
        MESSAGES,
        Err(ApiError::Status { status: 500 }),
    );

    assert_eq!(result, Err(ApiError::Status { status: 500 }));
    assert!(!cache.is_stale(crate::net::cache::AI_MODELS));
    assert_eq!(
        recorder.events.borrow().as_slice(),
        &[(ToastKind::Error, ERROR_TITLE.to_owned(), "It failed.".to_owned())]
    );
}
