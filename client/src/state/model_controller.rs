//! Model-list controller: runs model mutations against the API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller owns no UI state. It is built from three injected pieces:
//! a `ModelApi` (HTTP in the app, a fake in tests), the shared `QueryCache`,
//! and a `Notifier`. Every mutation resolves the same way: on success the
//! model list query is invalidated and a success toast is shown; on failure
//! the error is logged and an error toast is shown. Nothing is applied
//! optimistically, so a failure needs no rollback.

#[cfg(test)]
#[path = "model_controller_test.rs"]
mod model_controller_test;

use records::{AiModel, AiModelPayload};

use super::models::duplicate_payload;
use super::toast::{MutationMessages, Notifier, settle_mutation};
use crate::net::api::{ApiError, ModelApi};
use crate::net::cache::{AI_MODELS, QueryCache};

/// A remote change to the model collection.
#[derive(Clone, Debug, PartialEq)]
pub enum ModelMutation {
    Create(AiModelPayload),
    Update { id: String, payload: AiModelPayload },
    Delete(String),
    ToggleDefault(String),
    ToggleStatus(String),
}

impl ModelMutation {
    /// Create a copy of `model` (see [`duplicate_payload`]).
    #[must_use]
    pub fn duplicate(model: &AiModel) -> Self {
        Self::Create(duplicate_payload(model))
    }

    #[must_use]
    pub fn messages(&self) -> MutationMessages {
        match self {
            Self::Create(_) => MutationMessages {
                success_title: "Model created",
                success_message: "The AI model was added.",
                error_message: "Failed to create AI model.",
            },
            Self::Update { .. } => MutationMessages {
                success_title: "Model updated",
                success_message: "The AI model was saved.",
                error_message: "Failed to update AI model.",
            },
            Self::Delete(_) => MutationMessages {
                success_title: "Model deleted",
                success_message: "The AI model was removed.",
                error_message: "Failed to delete AI model.",
            },
            Self::ToggleDefault(_) => MutationMessages {
                success_title: "Default updated",
                success_message: "The default model was changed.",
                error_message: "Failed to change default model.",
            },
            Self::ToggleStatus(_) => MutationMessages {
                success_title: "Status updated",
                success_message: "The model status was changed.",
                error_message: "Failed to change model status.",
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct ModelListController<A, N> {
    api: A,
    cache: QueryCache,
    notifier: N,
}

impl<A: ModelApi, N: Notifier> ModelListController<A, N> {
    pub fn new(api: A, cache: QueryCache, notifier: N) -> Self {
        Self { api, cache, notifier }
    }

    #[must_use]
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// The model list, from cache when fresh, otherwise fetched.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; a stale cached list stays available via `peek`.
    pub async fn load(&self) -> Result<Vec<AiModel>, ApiError> {
        self.cache.query(AI_MODELS, || self.api.fetch_models()).await
    }

    /// Run one mutation and report its outcome.
    ///
    /// # Errors
    ///
    /// Returns the API error after it has been logged and surfaced as a toast.
    pub async fn execute(&self, mutation: &ModelMutation) -> Result<(), ApiError> {
        let result = match mutation {
            ModelMutation::Create(payload) => self.api.create_model(payload).await,
            ModelMutation::Update { id, payload } => self.api.update_model(id, payload).await,
            ModelMutation::Delete(id) => self.api.delete_model(id).await,
            ModelMutation::ToggleDefault(id) => self.api.toggle_default(id).await,
            ModelMutation::ToggleStatus(id) => self.api.toggle_status(id).await,
        };
        settle_mutation(&self.notifier, &self.cache, AI_MODELS, mutation.messages(), result)
    }
}
