//! Model-list state: collection, filters, and the editing target.
//!
//! DESIGN
//! ======
//! Everything here is synchronous and UI-framework agnostic. The page keeps a
//! `RwSignal<ModelsState>` and hands remote work to `ModelListController`;
//! this module only decides *what* mutation a user action means.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use records::{AiModel, AiModelPayload, ModelStatus};

use super::model_controller::ModelMutation;
use crate::net::api::ApiError;

/// Suffix appended to the name of a duplicated model.
pub const COPY_SUFFIX: &str = " (Copy)";

/// Status tabs above the model list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModelTab {
    #[default]
    All,
    Active,
    Inactive,
    Testing,
}

impl ModelTab {
    pub const ALL: [Self; 4] = [Self::All, Self::Active, Self::Inactive, Self::Testing];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Testing => "Testing",
        }
    }

    /// Whether a model with `status` belongs under this tab.
    #[must_use]
    pub fn admits(self, status: ModelStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == ModelStatus::Active,
            Self::Inactive => status == ModelStatus::Inactive,
            Self::Testing => status == ModelStatus::Testing,
        }
    }
}

/// Per-status totals for the stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModelCounts {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub testing: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ModelsState {
    pub items: Vec<AiModel>,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    pub tab: ModelTab,
    /// Model being edited; `None` means the form creates a new model.
    pub editing: Option<AiModel>,
    pub form_open: bool,
    /// Model awaiting delete confirmation.
    pub pending_delete: Option<String>,
}

/// Tab predicate AND case-insensitive substring match on name, provider, or description.
#[must_use]
pub fn matches_filter(model: &AiModel, tab: ModelTab, search: &str) -> bool {
    if !tab.admits(model.status) {
        return false;
    }
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [&model.name, &model.provider, &model.description]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Create payload for a copy of `model`: no id, `testing` status, `" (Copy)"` name suffix.
#[must_use]
pub fn duplicate_payload(model: &AiModel) -> AiModelPayload {
    let mut payload = model.to_payload();
    payload.name.push_str(COPY_SUFFIX);
    payload.status = ModelStatus::Testing;
    payload
}

impl ModelsState {
    /// Models passing the current tab and search, in collection order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&AiModel> {
        self.items
            .iter()
            .filter(|m| matches_filter(m, self.tab, &self.search))
            .collect()
    }

    #[must_use]
    pub fn counts(&self) -> ModelCounts {
        let mut counts = ModelCounts { total: self.items.len(), ..ModelCounts::default() };
        for model in &self.items {
            match model.status {
                ModelStatus::Active => counts.active += 1,
                ModelStatus::Inactive => counts.inactive += 1,
                ModelStatus::Testing => counts.testing += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn default_model(&self) -> Option<&AiModel> {
        self.items.iter().find(|m| m.is_default)
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&AiModel> {
        self.items.iter().find(|m| m.id == id)
    }

    /// Open the form for a new model.
    pub fn open_create(&mut self) {
        self.editing = None;
        self.form_open = true;
    }

    /// Open the form on an existing model. Returns `false` if `id` is unknown.
    pub fn open_configure(&mut self, id: &str) -> bool {
        let Some(model) = self.find(id).cloned() else {
            return false;
        };
        self.editing = Some(model);
        self.form_open = true;
        true
    }

    pub fn close_form(&mut self) {
        self.editing = None;
        self.form_open = false;
    }

    /// Turn a valid form submission into a create or update mutation.
    ///
    /// The editing target is cleared and the form closed regardless of how the
    /// mutation later resolves; see [`ModelsState::restore_failed_update`].
    pub fn take_submission(&mut self, payload: AiModelPayload) -> ModelMutation {
        let mutation = match self.editing.take() {
            Some(model) => ModelMutation::Update { id: model.id, payload },
            None => ModelMutation::Create(payload),
        };
        self.form_open = false;
        mutation
    }

    /// Reopen the form on the submitted values after an update failed, so the
    /// user does not lose their edit. No-op for other mutations or when the
    /// user already opened the form again.
    pub fn restore_failed_update(&mut self, mutation: &ModelMutation) {
        let ModelMutation::Update { id, payload } = mutation else {
            return;
        };
        if self.form_open {
            return;
        }
        self.editing = Some(AiModel::from_payload(id.clone(), payload.clone()));
        self.form_open = true;
    }

    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_owned());
    }

    /// Confirmed delete, consuming the pending id.
    pub fn confirm_delete(&mut self) -> Option<ModelMutation> {
        self.pending_delete.take().map(ModelMutation::Delete)
    }

    /// Apply the outcome of a list fetch. A failed refetch keeps the previous items.
    pub fn apply_loaded(&mut self, result: Result<Vec<AiModel>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                log::warn!("model list fetch failed: {e}");
                self.error = Some("Failed to load AI models.".to_owned());
            }
        }
    }
}
