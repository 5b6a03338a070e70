//! Text-bound draft behind the model configuration form.
//!
//! Inputs hold raw strings; `build` parses the numeric fields and runs
//! `records::validate::ai_model` so the form can show every error at once.

#[cfg(test)]
#[path = "model_form_test.rs"]
mod model_form_test;

use records::{AiModel, AiModelPayload, ModelStatus, ValidationErrors, model, validate};

#[derive(Clone, Debug, PartialEq)]
pub struct ModelDraft {
    pub name: String,
    pub provider: String,
    pub description: String,
    pub api_key: String,
    pub base_url: String,
    pub model_type: String,
    pub max_tokens: String,
    pub temperature: String,
    pub status: String,
    pub capabilities: Vec<String>,
    pub capability_input: String,
    pub is_default: bool,
}

impl Default for ModelDraft {
    fn default() -> Self {
        Self::from_payload(&AiModelPayload::default())
    }
}

impl ModelDraft {
    #[must_use]
    pub fn from_payload(payload: &AiModelPayload) -> Self {
        Self {
            name: payload.name.clone(),
            provider: payload.provider.clone(),
            description: payload.description.clone(),
            api_key: payload.api_key.clone(),
            base_url: payload.base_url.clone(),
            model_type: payload.model_type.clone(),
            max_tokens: payload.max_tokens.to_string(),
            temperature: payload.temperature.to_string(),
            status: payload.status.as_str().to_owned(),
            capabilities: payload.capabilities.clone(),
            capability_input: String::new(),
            is_default: payload.is_default,
        }
    }

    /// Draft for the open form: the editing target, or a blank model.
    #[must_use]
    pub fn for_target(target: Option<&AiModel>) -> Self {
        target.map_or_else(Self::default, |m| Self::from_payload(&m.to_payload()))
    }

    /// Move the pending capability text into the list, skipping blanks and duplicates.
    pub fn commit_capability(&mut self) {
        model::add_capability(&mut self.capabilities, &self.capability_input);
        self.capability_input.clear();
    }

    pub fn remove_capability(&mut self, capability: &str) {
        self.capabilities.retain(|c| c != capability);
    }

    /// Parse and validate into a payload.
    ///
    /// # Errors
    ///
    /// Returns parse failures and validation failures together.
    pub fn build(&self) -> Result<AiModelPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let max_tokens = self.max_tokens.trim().parse::<u32>().unwrap_or_else(|_| {
            errors.push("maxTokens", "Max tokens must be a whole number.");
            0
        });
        let temperature = self.temperature.trim().parse::<f32>().unwrap_or_else(|_| {
            errors.push("temperature", "Temperature must be a number.");
            f32::NAN
        });
        let status = self.status.parse::<ModelStatus>().unwrap_or_else(|e| {
            errors.push("status", e.to_string());
            ModelStatus::default()
        });

        let payload = AiModelPayload {
            name: self.name.trim().to_owned(),
            provider: self.provider.trim().to_owned(),
            description: self.description.trim().to_owned(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.trim().trim_end_matches('/').to_owned(),
            model_type: self.model_type.trim().to_owned(),
            max_tokens,
            temperature,
            status,
            capabilities: self.capabilities.clone(),
            is_default: self.is_default,
        };

        if let Err(validation) = validate::ai_model(&payload) {
            // Parse errors already cover these fields.
            for err in validation.iter() {
                if errors.for_field(&err.field).is_none() {
                    errors.push(err.field.clone(), err.message.clone());
                }
            }
        }
        errors.into_result().map(|()| payload)
    }
}
