//! Shared record shapes for the widget admin console.
//!
//! This crate owns the JSON representation exchanged with the admin API and
//! the form validation rules applied before a payload leaves the browser.
//! Records are plain serde types; the `client` crate layers UI state on top.

#[macro_use]
mod macros;

pub mod follow_up;
pub mod model;
pub mod validate;
pub mod widget;

pub use follow_up::{
    ActivationRules, Condition, ConditionKind, FollowUp, FollowUpOption, FollowUpPayload, FollowUpStatus, Position,
    RuleOperator, UseCase,
};
pub use model::{AiModel, AiModelPayload, ModelStatus};
pub use validate::{FieldError, ValidationErrors};
pub use widget::{
    AdvancedSettings, AppearanceSettings, ContentSettings, Language, LauncherPosition, Theme, WidgetSettings,
};

/// Error returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    /// Which enum was being parsed (e.g. `"model status"`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self { kind, value: value.to_owned() }
    }
}
