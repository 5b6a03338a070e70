use super::*;
use crate::follow_up::{ActivationRules, Condition, FollowUpOption};
use crate::model::ModelStatus;

fn valid_model() -> AiModelPayload {
    AiModelPayload {
        name: "GPT-4o".to_owned(),
        provider: "openai".to_owned(),
        description: "Flagship multimodal model".to_owned(),
        api_key: "sk-test".to_owned(),
        base_url: "https://api.openai.com/v1".to_owned(),
        model_type: "chat".to_owned(),
        max_tokens: 4096,
        temperature: 0.7,
        status: ModelStatus::Active,
        capabilities: vec!["chat".to_owned()],
        is_default: false,
    }
}

fn valid_follow_up() -> FollowUpPayload {
    FollowUpPayload {
        name: "Upsell".to_owned(),
        content: "Would you like to hear about our premium plan?".to_owned(),
        options: vec![FollowUpOption { id: "o-1".to_owned(), label: "Sure".to_owned(), next_follow_up_id: None }],
        ..FollowUpPayload::default()
    }
}

// =============================================================
// AI model
// =============================================================

#[test]
fn ai_model_accepts_valid_payload() {
    assert_eq!(ai_model(&valid_model()), Ok(()));
}

#[test]
fn ai_model_reports_short_name_and_description() {
    let mut payload = valid_model();
    payload.name = "G".to_owned();
    payload.description = "short".to_owned();
    let errors = ai_model(&payload).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.for_field("name"), Some("Name must be at least 2 characters."));
    assert_eq!(errors.for_field("description"), Some("Description must be at least 10 characters."));
}

#[test]
fn ai_model_reports_blank_name_as_required() {
    let mut payload = valid_model();
    payload.name = "   ".to_owned();
    let errors = ai_model(&payload).unwrap_err();
    assert_eq!(errors.for_field("name"), Some("Name is required."));
}

#[test]
fn ai_model_rejects_long_name() {
    let mut payload = valid_model();
    payload.name = "x".repeat(MODEL_NAME_MAX + 1);
    let errors = ai_model(&payload).unwrap_err();
    assert_eq!(errors.for_field("name"), Some("Name must be at most 50 characters."));
}

#[test]
fn ai_model_checks_numeric_ranges() {
    let mut payload = valid_model();
    payload.max_tokens = 0;
    payload.temperature = 2.5;
    let errors = ai_model(&payload).unwrap_err();
    assert!(errors.for_field("maxTokens").is_some());
    assert!(errors.for_field("temperature").is_some());
}

#[test]
fn ai_model_rejects_nan_temperature() {
    let mut payload = valid_model();
    payload.temperature = f32::NAN;
    assert!(ai_model(&payload).unwrap_err().for_field("temperature").is_some());
}

#[test]
fn ai_model_allows_empty_base_url_but_not_other_schemes() {
    let mut payload = valid_model();
    payload.base_url = String::new();
    assert_eq!(ai_model(&payload), Ok(()));

    payload.base_url = "ftp://models.example".to_owned();
    let errors = ai_model(&payload).unwrap_err();
    assert_eq!(errors.for_field("baseUrl"), Some("Base URL must start with http:// or https://."));
}

#[test]
fn validation_errors_display_joins_fields() {
    let mut errors = ValidationErrors::new();
    errors.push("name", "Name is required.");
    errors.push("provider", "Provider is required.");
    assert_eq!(errors.to_string(), "name: Name is required.; provider: Provider is required.");
}

// =============================================================
// Follow-up
// =============================================================

#[test]
fn follow_up_accepts_valid_payload() {
    assert_eq!(follow_up(&valid_follow_up()), Ok(()));
}

#[test]
fn follow_up_flags_blank_option_labels_by_index() {
    let mut payload = valid_follow_up();
    payload.options.push(FollowUpOption { id: "o-2".to_owned(), label: " ".to_owned(), next_follow_up_id: None });
    let errors = follow_up(&payload).unwrap_err();
    assert_eq!(errors.for_field("options.1.label"), Some("Option label is required."));
    assert_eq!(errors.for_field("options.0.label"), None);
}

#[test]
fn follow_up_flags_incomplete_conditions() {
    let mut payload = valid_follow_up();
    payload.rules = Some(ActivationRules {
        conditions: vec![Condition { field: "page".to_owned(), value: String::new(), ..Condition::default() }],
        ..ActivationRules::default()
    });
    let errors = follow_up(&payload).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.for_field("rules.0.value").is_some());
}

#[test]
fn follow_up_requires_content() {
    let mut payload = valid_follow_up();
    payload.content = String::new();
    assert_eq!(follow_up(&payload).unwrap_err().for_field("content"), Some("Content is required."));
}

// =============================================================
// Widget settings
// =============================================================

#[test]
fn content_settings_defaults_are_valid() {
    assert_eq!(content_settings(&ContentSettings::default()), Ok(()));
}

#[test]
fn content_settings_require_title_and_bot_name() {
    let content = ContentSettings { title: String::new(), bot_name: String::new(), ..ContentSettings::default() };
    let errors = content_settings(&content).unwrap_err();
    assert_eq!(errors.for_field("title"), Some("Title is required."));
    assert_eq!(errors.for_field("botName"), Some("Bot name is required."));
}

#[test]
fn content_settings_allow_empty_subtitle() {
    let content = ContentSettings { subtitle: String::new(), ..ContentSettings::default() };
    assert_eq!(content_settings(&content), Ok(()));
}

#[test]
fn hex_color_shapes() {
    assert!(is_hex_color("#fff"));
    assert!(is_hex_color("#2563EB"));
    assert!(!is_hex_color("2563eb"));
    assert!(!is_hex_color("#12345"));
    assert!(!is_hex_color("#ggg"));
}

#[test]
fn appearance_rejects_named_colors() {
    let appearance = AppearanceSettings { primary_color: "blue".to_owned(), ..AppearanceSettings::default() };
    assert!(appearance_settings(&appearance).unwrap_err().for_field("primaryColor").is_some());
}

#[test]
fn optional_url_handles_multibyte_input() {
    assert!(!is_optional_http_url("ééééééééé"));
    assert!(is_optional_http_url("HTTPS://example.com"));
}
