//! Follow-up list state and the flow editor.
//!
//! DESIGN
//! ======
//! Mirrors `models`: the list state filters and decides which mutation a user
//! action means, and `FollowUpEditor` holds the in-progress payload while the
//! form is open. Branch targets reference other follow-ups by id; the editor
//! never offers the flow being edited as its own target.

#[cfg(test)]
#[path = "follow_ups_test.rs"]
mod follow_ups_test;

use records::{
    ActivationRules, Condition, FollowUp, FollowUpOption, FollowUpPayload, RuleOperator, UseCase,
    ValidationErrors, validate,
};

use super::follow_up_controller::FollowUpMutation;
use crate::net::api::ApiError;

/// Use-case filter above the follow-up list; `None` shows every use case.
pub type UseCaseFilter = Option<UseCase>;

/// Use-case predicate AND case-insensitive substring match on name or content.
#[must_use]
pub fn matches_filter(follow_up: &FollowUp, use_case: UseCaseFilter, search: &str) -> bool {
    if use_case.is_some_and(|u| u != follow_up.use_case) {
        return false;
    }
    let needle = search.trim().to_lowercase();
    needle.is_empty()
        || follow_up.name.to_lowercase().contains(&needle)
        || follow_up.content.to_lowercase().contains(&needle)
}

#[derive(Clone, Debug, Default)]
pub struct FollowUpsState {
    pub items: Vec<FollowUp>,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    pub use_case: UseCaseFilter,
    /// Open editor, if any.
    pub editor: Option<FollowUpEditor>,
    pub pending_delete: Option<String>,
}

impl FollowUpsState {
    #[must_use]
    pub fn filtered(&self) -> Vec<&FollowUp> {
        self.items
            .iter()
            .filter(|f| matches_filter(f, self.use_case, &self.search))
            .collect()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&FollowUp> {
        self.items.iter().find(|f| f.id == id)
    }

    /// Number of enabled flows.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        self.items
            .iter()
            .filter(|f| f.status == records::FollowUpStatus::Enabled)
            .count()
    }

    pub fn open_create(&mut self) {
        self.editor = Some(FollowUpEditor::new());
    }

    /// Returns `false` if `id` is unknown.
    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(follow_up) = self.find(id) else {
            return false;
        };
        self.editor = Some(FollowUpEditor::edit(follow_up));
        true
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Validate the open editor and turn it into a create or update.
    ///
    /// # Errors
    ///
    /// Returns the validation errors and leaves the editor open.
    pub fn submit(&mut self) -> Result<Option<FollowUpMutation>, ValidationErrors> {
        let Some(editor) = self.editor.as_ref() else {
            return Ok(None);
        };
        let payload = editor.build()?;
        let mutation = match editor.editing_id.clone() {
            Some(id) => FollowUpMutation::Update { id, payload },
            None => FollowUpMutation::Create(payload),
        };
        self.editor = None;
        Ok(Some(mutation))
    }

    /// Reopen the editor on the submitted values after an update failed.
    /// No-op for other mutations or when an editor is already open.
    pub fn restore_failed_update(&mut self, mutation: &FollowUpMutation) {
        let FollowUpMutation::Update { id, payload } = mutation else {
            return;
        };
        if self.editor.is_some() {
            return;
        }
        self.editor = Some(FollowUpEditor { editing_id: Some(id.clone()), payload: payload.clone() });
    }

    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_owned());
    }

    pub fn confirm_delete(&mut self) -> Option<FollowUpMutation> {
        self.pending_delete.take().map(FollowUpMutation::Delete)
    }

    /// Branch targets offered by the open editor: every follow-up but the edited one.
    #[must_use]
    pub fn branch_choices(&self) -> Vec<(String, String)> {
        let own = self.editor.as_ref().and_then(|e| e.editing_id.as_deref());
        self.items
            .iter()
            .filter(|f| Some(f.id.as_str()) != own)
            .map(|f| (f.id.clone(), f.name.clone()))
            .collect()
    }

    pub fn apply_loaded(&mut self, result: Result<Vec<FollowUp>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                log::warn!("follow-up list fetch failed: {e}");
                self.error = Some("Failed to load follow-ups.".to_owned());
            }
        }
    }
}

/// Direction for reordering an option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
}

/// In-progress follow-up being created or edited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FollowUpEditor {
    /// `None` while creating.
    pub editing_id: Option<String>,
    pub payload: FollowUpPayload,
}

impl FollowUpEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn edit(follow_up: &FollowUp) -> Self {
        Self { editing_id: Some(follow_up.id.clone()), payload: follow_up.to_payload() }
    }

    /// Append an empty option and return its id.
    pub fn add_option(&mut self) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.payload.options.push(FollowUpOption {
            id: id.clone(),
            label: String::new(),
            next_follow_up_id: None,
        });
        id
    }

    pub fn remove_option(&mut self, option_id: &str) {
        self.payload.options.retain(|o| o.id != option_id);
    }

    pub fn set_option_label(&mut self, option_id: &str, label: &str) {
        if let Some(option) = self.option_mut(option_id) {
            option.label = label.to_owned();
        }
    }

    /// Swap an option with its neighbour. Returns `false` at either end.
    pub fn move_option(&mut self, option_id: &str, direction: Move) -> bool {
        let options = &mut self.payload.options;
        let Some(index) = options.iter().position(|o| o.id == option_id) else {
            return false;
        };
        let target = match direction {
            Move::Up if index > 0 => index - 1,
            Move::Down if index + 1 < options.len() => index + 1,
            _ => return false,
        };
        options.swap(index, target);
        true
    }

    /// Point an option at another follow-up, or clear it with `None`.
    /// Branching to the flow being edited is ignored.
    pub fn set_branch(&mut self, option_id: &str, target: Option<&str>) -> bool {
        if target.is_some() && target == self.editing_id.as_deref() {
            return false;
        }
        match self.option_mut(option_id) {
            Some(option) => {
                option.next_follow_up_id = target.map(str::to_owned);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn rules_enabled(&self) -> bool {
        self.payload.rules.is_some()
    }

    /// Turning rules on starts from an empty `AND` set; turning them off drops them.
    pub fn set_rules_enabled(&mut self, enabled: bool) {
        match (enabled, self.payload.rules.is_some()) {
            (true, false) => self.payload.rules = Some(ActivationRules::default()),
            (false, true) => self.payload.rules = None,
            _ => {}
        }
    }

    pub fn set_operator(&mut self, operator: RuleOperator) {
        if let Some(rules) = self.payload.rules.as_mut() {
            rules.operator = operator;
        }
    }

    /// Append a blank condition, enabling rules if needed.
    pub fn add_condition(&mut self) {
        self.payload
            .rules
            .get_or_insert_with(ActivationRules::default)
            .conditions
            .push(Condition::default());
    }

    pub fn remove_condition(&mut self, index: usize) {
        if let Some(rules) = self.payload.rules.as_mut()
            && index < rules.conditions.len()
        {
            rules.conditions.remove(index);
        }
    }

    pub fn condition_mut(&mut self, index: usize) -> Option<&mut Condition> {
        self.payload.rules.as_mut()?.conditions.get_mut(index)
    }

    /// Validated payload ready to send.
    ///
    /// # Errors
    ///
    /// Returns every field that failed validation.
    pub fn build(&self) -> Result<FollowUpPayload, ValidationErrors> {
        let mut payload = self.payload.clone();
        payload.name = payload.name.trim().to_owned();
        for option in &mut payload.options {
            option.label = option.label.trim().to_owned();
        }
        validate::follow_up(&payload)?;
        Ok(payload)
    }

    fn option_mut(&mut self, option_id: &str) -> Option<&mut FollowUpOption> {
        self.payload.options.iter_mut().find(|o| o.id == option_id)
    }
}
