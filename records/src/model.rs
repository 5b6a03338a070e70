//! AI model configuration records.
//!
//! DESIGN
//! ======
//! `AiModel` is the record as the API returns it; `AiModelPayload` is the same
//! shape without `id` and is used for both create and update requests. Field
//! names go over the wire in camelCase.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a configured model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    #[default]
    Active,
    Inactive,
    Testing,
}

wire_enum!(ModelStatus, "model status", {
    Active => ("active", "Active"),
    Inactive => ("inactive", "Inactive"),
    Testing => ("testing", "Testing"),
});

/// A configured AI provider/engine entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiModel {
    pub id: String,
    pub name: String,
    pub provider: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub model_type: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub status: ModelStatus,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub is_default: bool,
}

impl AiModel {
    /// Every field except `id`, as a create/update payload.
    #[must_use]
    pub fn to_payload(&self) -> AiModelPayload {
        AiModelPayload {
            name: self.name.clone(),
            provider: self.provider.clone(),
            description: self.description.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model_type: self.model_type.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            status: self.status,
            capabilities: self.capabilities.clone(),
            is_default: self.is_default,
        }
    }

    /// Rebuild a record from an id and a payload, e.g. to restore an edit target.
    #[must_use]
    pub fn from_payload(id: impl Into<String>, payload: AiModelPayload) -> Self {
        Self {
            id: id.into(),
            name: payload.name,
            provider: payload.provider,
            description: payload.description,
            api_key: payload.api_key,
            base_url: payload.base_url,
            model_type: payload.model_type,
            max_tokens: payload.max_tokens,
            temperature: payload.temperature,
            status: payload.status,
            capabilities: payload.capabilities,
            is_default: payload.is_default,
        }
    }
}

/// Create/update body for an AI model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiModelPayload {
    pub name: String,
    pub provider: String,
    pub description: String,
    pub api_key: String,
    pub base_url: String,
    pub model_type: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub status: ModelStatus,
    pub capabilities: Vec<String>,
    pub is_default: bool,
}

impl Default for AiModelPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            provider: "openai".to_owned(),
            description: String::new(),
            api_key: String::new(),
            base_url: String::new(),
            model_type: "chat".to_owned(),
            max_tokens: 2048,
            temperature: 0.7,
            status: ModelStatus::Active,
            capabilities: Vec::new(),
            is_default: false,
        }
    }
}

/// Add `capability` to an ordered capability set, trimmed, skipping blanks
/// and duplicates.
pub fn add_capability(capabilities: &mut Vec<String>, capability: &str) {
    let capability = capability.trim();
    if capability.is_empty() || capabilities.iter().any(|c| c == capability) {
        return;
    }
    capabilities.push(capability.to_owned());
}
