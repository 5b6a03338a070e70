//! Follow-up controller: same settle pattern as the model controller.

#[cfg(test)]
#[path = "follow_up_controller_test.rs"]
mod follow_up_controller_test;

use records::{FollowUp, FollowUpPayload};

use super::toast::{MutationMessages, Notifier, settle_mutation};
use crate::net::api::{ApiError, FollowUpApi};
use crate::net::cache::{FOLLOW_UPS, QueryCache};

#[derive(Clone, Debug, PartialEq)]
pub enum FollowUpMutation {
    Create(FollowUpPayload),
    Update { id: String, payload: FollowUpPayload },
    Delete(String),
    ToggleStatus(String),
}

impl FollowUpMutation {
    #[must_use]
    pub fn messages(&self) -> MutationMessages {
        match self {
            Self::Create(_) => MutationMessages {
                success_title: "Follow-up created",
                success_message: "The follow-up flow was added.",
                error_message: "Failed to create follow-up.",
            },
            Self::Update { .. } => MutationMessages {
                success_title: "Follow-up updated",
                success_message: "The follow-up flow was saved.",
                error_message: "Failed to update follow-up.",
            },
            Self::Delete(_) => MutationMessages {
                success_title: "Follow-up deleted",
                success_message: "The follow-up flow was removed.",
                error_message: "Failed to delete follow-up.",
            },
            Self::ToggleStatus(_) => MutationMessages {
                success_title: "Status updated",
                success_message: "The follow-up status was changed.",
                error_message: "Failed to change follow-up status.",
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct FollowUpController<A, N> {
    api: A,
    cache: QueryCache,
    notifier: N,
}

impl<A: FollowUpApi, N: Notifier> FollowUpController<A, N> {
    pub fn new(api: A, cache: QueryCache, notifier: N) -> Self {
        Self { api, cache, notifier }
    }

    /// # Errors
    ///
    /// Returns the fetch error.
    pub async fn load(&self) -> Result<Vec<FollowUp>, ApiError> {
        self.cache.query(FOLLOW_UPS, || self.api.fetch_follow_ups()).await
    }

    /// # Errors
    ///
    /// Returns the API error after it has been logged and surfaced as a toast.
    pub async fn execute(&self, mutation: &FollowUpMutation) -> Result<(), ApiError> {
        let result = match mutation {
            FollowUpMutation::Create(payload) => self.api.create_follow_up(payload).await,
            FollowUpMutation::Update { id, payload } => self.api.update_follow_up(id, payload).await,
            FollowUpMutation::Delete(id) => self.api.delete_follow_up(id).await,
            FollowUpMutation::ToggleStatus(id) => self.api.toggle_status(id).await,
        };
        settle_mutation(&self.notifier, &self.cache, FOLLOW_UPS, mutation.messages(), result)
    }
}
