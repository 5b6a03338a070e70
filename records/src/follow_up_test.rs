use super::*;

fn sample_follow_up() -> FollowUp {
    FollowUp {
        id: "f-1".to_owned(),
        name: "Satisfaction check".to_owned(),
        content: "Did that answer your question?".to_owned(),
        position: Position::End,
        options: vec![
            FollowUpOption { id: "o-1".to_owned(), label: "Yes".to_owned(), next_follow_up_id: None },
            FollowUpOption {
                id: "o-2".to_owned(),
                label: "No".to_owned(),
                next_follow_up_id: Some("f-2".to_owned()),
            },
        ],
        use_case: UseCase::Support,
        status: FollowUpStatus::Enabled,
        rules: Some(ActivationRules {
            operator: RuleOperator::Or,
            conditions: vec![Condition {
                field: "message_count".to_owned(),
                condition: ConditionKind::GreaterThan,
                value: "3".to_owned(),
            }],
        }),
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-02T00:00:00Z".to_owned(),
    }
}

#[test]
fn position_uses_capitalized_wire_names() {
    assert_eq!(serde_json::to_value(Position::Start).unwrap(), serde_json::json!("Start"));
    assert_eq!("inline".parse::<Position>(), Ok(Position::Inline));
    assert!("middle".parse::<Position>().is_err());
}

#[test]
fn rule_operator_serializes_uppercase() {
    assert_eq!(serde_json::to_value(RuleOperator::Or).unwrap(), serde_json::json!("OR"));
    assert_eq!("and".parse::<RuleOperator>(), Ok(RuleOperator::And));
}

#[test]
fn condition_kind_serializes_snake_case() {
    assert_eq!(serde_json::to_value(ConditionKind::NotEquals).unwrap(), serde_json::json!("not_equals"));
    assert_eq!("greater_than".parse::<ConditionKind>(), Ok(ConditionKind::GreaterThan));
}

#[test]
fn status_toggles_both_ways() {
    assert_eq!(FollowUpStatus::Enabled.toggled(), FollowUpStatus::Disabled);
    assert_eq!(FollowUpStatus::Disabled.toggled(), FollowUpStatus::Enabled);
}

#[test]
fn follow_up_reads_api_shape() {
    let json = serde_json::json!({
        "id": "f-7",
        "name": "Welcome",
        "content": "How can we help?",
        "position": "Start",
        "options": [{ "id": "o-1", "label": "Pricing", "nextFollowUpId": "f-8" }],
        "useCase": "sales",
        "status": "disabled",
        "createdAt": "2024-03-01T00:00:00Z",
        "updatedAt": "2024-03-01T00:00:00Z"
    });
    let follow_up: FollowUp = serde_json::from_value(json).unwrap();
    assert_eq!(follow_up.position, Position::Start);
    assert_eq!(follow_up.use_case, UseCase::Sales);
    assert_eq!(follow_up.status, FollowUpStatus::Disabled);
    assert_eq!(follow_up.rules, None);
    assert_eq!(follow_up.options[0].next_follow_up_id.as_deref(), Some("f-8"));
}

#[test]
fn payload_drops_server_owned_fields() {
    let value = serde_json::to_value(sample_follow_up().to_payload()).unwrap();
    assert!(value.get("id").is_none());
    assert!(value.get("createdAt").is_none());
    assert_eq!(value["useCase"], "support");
    assert_eq!(value["rules"]["operator"], "OR");
}

#[test]
fn payload_omits_absent_rules() {
    let mut follow_up = sample_follow_up();
    follow_up.rules = None;
    let value = serde_json::to_value(follow_up.to_payload()).unwrap();
    assert!(value.get("rules").is_none());
}

#[test]
fn branch_targets_lists_linked_ids_in_option_order() {
    let follow_up = sample_follow_up();
    assert_eq!(follow_up.branch_targets().collect::<Vec<_>>(), vec!["f-2"]);
}
