//! Follow-up flow records.
//!
//! A follow-up is a scripted prompt shown around a conversation. Its options
//! may branch to another follow-up by id, and optional activation rules gate
//! when it is offered. The remote service owns ids and timestamps; the
//! console only edits the `FollowUpPayload` subset.

#[cfg(test)]
#[path = "follow_up_test.rs"]
mod follow_up_test;

use serde::{Deserialize, Serialize};

/// Where in the conversation the follow-up appears.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Start,
    #[default]
    Inline,
    End,
}

wire_enum!(Position, "position", {
    Start => ("Start", "Start of conversation"),
    Inline => ("Inline", "Inline"),
    End => ("End", "End of conversation"),
});

/// Business category used to group follow-ups in the list view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCase {
    #[default]
    General,
    Sales,
    Support,
    Onboarding,
    Feedback,
}

wire_enum!(UseCase, "use case", {
    General => ("general", "General"),
    Sales => ("sales", "Sales"),
    Support => ("support", "Support"),
    Onboarding => ("onboarding", "Onboarding"),
    Feedback => ("feedback", "Feedback"),
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpStatus {
    #[default]
    Enabled,
    Disabled,
}

wire_enum!(FollowUpStatus, "follow-up status", {
    Enabled => ("enabled", "Enabled"),
    Disabled => ("disabled", "Disabled"),
});

impl FollowUpStatus {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Enabled => Self::Disabled,
            Self::Disabled => Self::Enabled,
        }
    }
}

/// How activation conditions combine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleOperator {
    #[default]
    And,
    Or,
}

wire_enum!(RuleOperator, "rule operator", {
    And => ("AND", "All conditions"),
    Or => ("OR", "Any condition"),
});

/// Comparison applied between a conversation field and a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    #[default]
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
}

wire_enum!(ConditionKind, "condition", {
    Equals => ("equals", "equals"),
    NotEquals => ("not_equals", "does not equal"),
    Contains => ("contains", "contains"),
    GreaterThan => ("greater_than", "is greater than"),
    LessThan => ("less_than", "is less than"),
});

/// One field/condition/value triple.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub condition: ConditionKind,
    pub value: String,
}

/// Rule-based activation: all (`AND`) or any (`OR`) of the conditions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRules {
    pub operator: RuleOperator,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// A choice offered by a follow-up, optionally branching to another one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpOption {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_follow_up_id: Option<String>,
}

/// A follow-up as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    pub id: String,
    pub name: String,
    pub content: String,
    pub position: Position,
    #[serde(default)]
    pub options: Vec<FollowUpOption>,
    pub use_case: UseCase,
    pub status: FollowUpStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<ActivationRules>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl FollowUp {
    #[must_use]
    pub fn to_payload(&self) -> FollowUpPayload {
        FollowUpPayload {
            name: self.name.clone(),
            content: self.content.clone(),
            position: self.position,
            options: self.options.clone(),
            use_case: self.use_case,
            status: self.status,
            rules: self.rules.clone(),
        }
    }

    /// Ids of the follow-ups this one can branch to.
    pub fn branch_targets(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter_map(|o| o.next_follow_up_id.as_deref())
    }
}

/// Editable subset of a follow-up sent on create/update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpPayload {
    pub name: String,
    pub content: String,
    pub position: Position,
    pub options: Vec<FollowUpOption>,
    pub use_case: UseCase,
    pub status: FollowUpStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<ActivationRules>,
}
