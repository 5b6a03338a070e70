//! Form validation for record payloads.
//!
//! Rules are single-field only: required values, length bounds, numeric
//! ranges and URL/color shape. Every violation is collected so a form can
//! render all messages at once instead of stopping at the first.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::follow_up::FollowUpPayload;
use crate::model::AiModelPayload;
use crate::widget::{AppearanceSettings, ContentSettings};

pub const MODEL_NAME_MIN: usize = 2;
pub const MODEL_NAME_MAX: usize = 50;
pub const MODEL_DESCRIPTION_MIN: usize = 10;
pub const MODEL_DESCRIPTION_MAX: usize = 500;
pub const MAX_TOKENS_LIMIT: u32 = 1_000_000;
pub const TEMPERATURE_MAX: f32 = 2.0;

pub const FOLLOW_UP_NAME_MIN: usize = 2;
pub const FOLLOW_UP_NAME_MAX: usize = 100;
pub const FOLLOW_UP_CONTENT_MAX: usize = 1000;

pub const WIDGET_TITLE_MAX: usize = 60;
pub const WIDGET_SUBTITLE_MAX: usize = 120;
pub const BOT_NAME_MAX: usize = 40;
pub const WELCOME_MESSAGE_MAX: usize = 500;

/// A validation message attached to one form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Form field key (e.g. `"name"`, `"options.0.label"`).
    pub field: String,
    pub message: String,
}

/// All validation failures for one form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.summary())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError { field: field.into(), message: message.into() });
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() { Ok(()) } else { Err(self) }
    }

    fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validate an AI model form payload.
///
/// # Errors
///
/// Returns every failed field rule.
pub fn ai_model(payload: &AiModelPayload) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    length(&mut errors, "name", "Name", &payload.name, MODEL_NAME_MIN, MODEL_NAME_MAX);
    length(
        &mut errors,
        "description",
        "Description",
        &payload.description,
        MODEL_DESCRIPTION_MIN,
        MODEL_DESCRIPTION_MAX,
    );
    required(&mut errors, "provider", "Provider", &payload.provider);
    required(&mut errors, "modelType", "Model type", &payload.model_type);
    if payload.max_tokens == 0 || payload.max_tokens > MAX_TOKENS_LIMIT {
        errors.push("maxTokens", format!("Max tokens must be between 1 and {MAX_TOKENS_LIMIT}."));
    }
    if !payload.temperature.is_finite() || !(0.0..=TEMPERATURE_MAX).contains(&payload.temperature) {
        errors.push("temperature", format!("Temperature must be between 0 and {TEMPERATURE_MAX}."));
    }
    optional_url(&mut errors, "baseUrl", "Base URL", &payload.base_url);
    errors.into_result()
}

/// Validate a follow-up form payload.
///
/// # Errors
///
/// Returns every failed field rule, including per-option and per-condition keys.
pub fn follow_up(payload: &FollowUpPayload) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    length(&mut errors, "name", "Name", &payload.name, FOLLOW_UP_NAME_MIN, FOLLOW_UP_NAME_MAX);
    length(&mut errors, "content", "Content", &payload.content, 1, FOLLOW_UP_CONTENT_MAX);
    for (i, option) in payload.options.iter().enumerate() {
        required(&mut errors, format!("options.{i}.label"), "Option label", &option.label);
    }
    if let Some(rules) = &payload.rules {
        for (i, condition) in rules.conditions.iter().enumerate() {
            required(&mut errors, format!("rules.{i}.field"), "Condition field", &condition.field);
            required(&mut errors, format!("rules.{i}.value"), "Condition value", &condition.value);
        }
    }
    errors.into_result()
}

/// Validate the widget content tab.
///
/// # Errors
///
/// Returns every failed field rule.
pub fn content_settings(content: &ContentSettings) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    length(&mut errors, "title", "Title", &content.title, 1, WIDGET_TITLE_MAX);
    length(&mut errors, "botName", "Bot name", &content.bot_name, 1, BOT_NAME_MAX);
    length(&mut errors, "subtitle", "Subtitle", &content.subtitle, 0, WIDGET_SUBTITLE_MAX);
    length(
        &mut errors,
        "welcomeMessage",
        "Welcome message",
        &content.welcome_message,
        0,
        WELCOME_MESSAGE_MAX,
    );
    optional_url(&mut errors, "avatarUrl", "Avatar URL", &content.avatar_url);
    errors.into_result()
}

/// Validate the widget appearance tab.
///
/// # Errors
///
/// Returns an error when the primary color is not a hex color.
pub fn appearance_settings(appearance: &AppearanceSettings) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if !is_hex_color(&appearance.primary_color) {
        errors.push("primaryColor", "Primary color must be a hex color like #2563eb.");
    }
    errors.into_result()
}

/// `#rgb` or `#rrggbb`.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.trim().strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Empty, or an absolute `http(s)` URL.
#[must_use]
pub fn is_optional_http_url(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return true;
    }
    ["http://", "https://"]
        .iter()
        .any(|scheme| {
            value.len() > scheme.len()
                && value
                    .get(..scheme.len())
                    .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        })
}

fn required(errors: &mut ValidationErrors, field: impl Into<String>, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, format!("{label} is required."));
    }
}

fn length(errors: &mut ValidationErrors, field: &str, label: &str, value: &str, min: usize, max: usize) {
    let len = value.trim().chars().count();
    if min > 0 && len == 0 {
        errors.push(field, format!("{label} is required."));
    } else if len < min {
        errors.push(field, format!("{label} must be at least {min} characters."));
    } else if len > max {
        errors.push(field, format!("{label} must be at most {max} characters."));
    }
}

fn optional_url(errors: &mut ValidationErrors, field: &str, label: &str, value: &str) {
    if !is_optional_http_url(value) {
        errors.push(field, format!("{label} must start with http:// or https://."));
    }
}
