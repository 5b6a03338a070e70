use super::*;

fn valid_draft() -> ModelDraft {
    ModelDraft {
        name: " Support bot ".to_owned(),
        description: "Answers support questions".to_owned(),
        base_url: "https://api.example.com/v1/".to_owned(),
        ..ModelDraft::default()
    }
}

// =============================================================
// Building payloads
// =============================================================

#[test]
fn default_draft_mirrors_default_payload() {
    let draft = ModelDraft::default();
    assert_eq!(draft.provider, "openai");
    assert_eq!(draft.max_tokens, "2048");
    assert_eq!(draft.temperature, "0.7");
    assert_eq!(draft.status, "active");
}

#[test]
fn build_trims_and_parses() {
    let payload = valid_draft().build().unwrap();
    assert_eq!(payload.name, "Support bot");
    assert_eq!(payload.base_url, "https://api.example.com/v1");
    assert_eq!(payload.max_tokens, 2048);
    assert!((payload.temperature - 0.7).abs() < f32::EPSILON);
}

#[test]
fn unparseable_numbers_report_once_per_field() {
    let mut draft = valid_draft();
    draft.max_tokens = "lots".to_owned();
    draft.temperature = "warm".to_owned();
    let errors = draft.build().unwrap_err();
    assert_eq!(errors.for_field("maxTokens"), Some("Max tokens must be a whole number."));
    assert_eq!(errors.for_field("temperature"), Some("Temperature must be a number."));
    assert_eq!(errors.len(), 2);
}

#[test]
fn validation_errors_surface_with_parse_errors() {
    let mut draft = valid_draft();
    draft.name = "X".to_owned();
    draft.status = "retired".to_owned();
    let errors = draft.build().unwrap_err();
    assert!(errors.for_field("name").is_some());
    assert!(errors.for_field("status").is_some());
}

#[test]
fn for_target_loads_existing_model() {
    let model = AiModel::from_payload("m1", valid_draft().build().unwrap());
    let draft = ModelDraft::for_target(Some(&model));
    assert_eq!(draft.name, "Support bot");
    assert_eq!(ModelDraft::for_target(None), ModelDraft::default());
}

// =============================================================
// Capabilities
// =============================================================

#[test]
fn commit_capability_skips_blanks_and_duplicates() {
    let mut draft = ModelDraft::default();
    draft.capability_input = " chat ".to_owned();
    draft.commit_capability();
    draft.capability_input = "chat".to_owned();
    draft.commit_capability();
    draft.capability_input = "   ".to_owned();
    draft.commit_capability();
    assert_eq!(draft.capabilities, vec!["chat".to_owned()]);
    assert!(draft.capability_input.is_empty());

    draft.remove_capability("chat");
    assert!(draft.capabilities.is_empty());
}
