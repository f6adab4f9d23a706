// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Two-phase delete confirmation
//!
//! A delete button press arms the flow and produces a [`ConfirmPrompt`] for
//! the host's modal. The modal's answer comes back as a [`ConfirmAction`];
//! only an armed flow acts on it.

use serde::Serialize;

use super::outcome::DeleteOutcome;
use super::store::FileHistoryStore;

/// Namespace used when none is configured
pub const DEFAULT_NAMESPACE: &str = "output_";

/// Answer from the confirmation modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmAction {
    Confirm,
    Cancel,
    /// Addressed to another panel, empty, or neither confirm nor cancel
    Unrelated,
}

impl ConfirmAction {
    /// Interpret a raw token from a confirmation channel shared between panels.
    ///
    /// Tokens must start with `namespace`; in the remainder, `cancel` takes
    /// precedence over `confirm`.
    pub fn from_token(token: Option<&str>, namespace: &str) -> Self {
        let Some(token) = token else {
            return ConfirmAction::Unrelated;
        };
        if token.trim().is_empty() {
            return ConfirmAction::Unrelated;
        }
        // The namespace itself may contain "cancel" or "confirm".
        let Some(answer) = token.strip_prefix(namespace) else {
            return ConfirmAction::Unrelated;
        };
        if answer.contains("cancel") {
            ConfirmAction::Cancel
        } else if answer.contains("confirm") {
            ConfirmAction::Confirm
        } else {
            ConfirmAction::Unrelated
        }
    }
}

/// Content for the host's confirmation modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    /// Prefix the modal must put on the tokens it emits
    pub namespace: String,
}

impl ConfirmPrompt {
    pub fn delete_output(namespace: &str) -> Self {
        Self {
            title: "Delete Output File?".to_string(),
            message: "This will permanently delete the generated audio and its metadata. \
                      This action cannot be undone."
                .to_string(),
            confirm_label: "Delete".to_string(),
            namespace: namespace.to_string(),
        }
    }
}

/// Where the delete flow currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeletePhase {
    #[default]
    Idle,
    /// Waiting on the modal; holds the selection captured at request time
    AwaitingConfirmation { base_name: Option<String> },
    Confirmed,
    Cancelled,
}

/// Delete confirmation state machine
#[derive(Debug, Clone)]
pub struct DeleteFlow {
    phase: DeletePhase,
    namespace: String,
}

impl Default for DeleteFlow {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl DeleteFlow {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            phase: DeletePhase::Idle,
            namespace: namespace.into(),
        }
    }

    pub fn phase(&self) -> &DeletePhase {
        &self.phase
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.phase, DeletePhase::AwaitingConfirmation { .. })
    }

    /// Arm the flow for `base_name`. A pending request is replaced.
    pub fn request(&mut self, base_name: Option<&str>) -> ConfirmPrompt {
        let base_name = base_name.filter(|name| !name.is_empty()).map(str::to_string);
        tracing::debug!(
            target: "output_history.flow",
            base_name = base_name.as_deref().unwrap_or(""),
            "delete requested, awaiting confirmation"
        );
        self.phase = DeletePhase::AwaitingConfirmation { base_name };
        ConfirmPrompt::delete_output(&self.namespace)
    }

    /// Apply the modal's answer.
    ///
    /// Answers that arrive while nothing is pending are stale and ignored, as
    /// are unrelated answers; the latter leave a pending request armed.
    pub fn resolve(&mut self, action: ConfirmAction, store: &FileHistoryStore) -> DeleteOutcome {
        let base_name = match (&self.phase, action) {
            (_, ConfirmAction::Unrelated) => return DeleteOutcome::unchanged(),
            (DeletePhase::AwaitingConfirmation { base_name }, _) => base_name.clone(),
            (phase, _) => {
                tracing::debug!(
                    target: "output_history.flow",
                    ?phase,
                    ?action,
                    "ignoring stale confirmation"
                );
                return DeleteOutcome::unchanged();
            }
        };

        self.phase = match action {
            ConfirmAction::Confirm => DeletePhase::Confirmed,
            _ => DeletePhase::Cancelled,
        };
        store.delete(action, base_name.as_deref())
    }

    /// Apply a raw token from a shared confirmation channel.
    pub fn resolve_token(&mut self, token: &str, store: &FileHistoryStore) -> DeleteOutcome {
        let action = ConfirmAction::from_token(Some(token), &self.namespace);
        self.resolve(action, store)
    }
}
