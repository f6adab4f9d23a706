// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Output History panel
//!
//! Host-facing facade: the UI layer forwards its refresh, selection and
//! delete events here and renders whatever comes back.

use serde::Serialize;

use crate::config::Settings;
use crate::error::Result;
use crate::history::{
    ConfirmAction, ConfirmPrompt, DeleteFlow, DeleteOutcome, FileHistoryStore, LoadedArtifact,
    Update,
};

/// Static description of the panel for the host's tab registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabInfo {
    pub name: &'static str,
    pub module_name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const TAB_INFO: TabInfo = TabInfo {
    name: "Output History",
    module_name: "tab_output_history",
    description: "Browse and manage generated audio files",
    category: "utility",
};

/// Artifact list to show after a refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshView {
    pub choices: Vec<String>,
    /// Always `None`: a refresh drops the current selection
    pub selection: Option<String>,
}

/// Output History panel state
#[derive(Debug, Clone)]
pub struct OutputHistoryPanel {
    store: FileHistoryStore,
    flow: DeleteFlow,
    /// Mirrors the host's hidden selection field
    selection: String,
}

impl OutputHistoryPanel {
    pub fn new(store: FileHistoryStore, namespace: impl Into<String>) -> Self {
        Self {
            store,
            flow: DeleteFlow::new(namespace),
            selection: String::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let store = FileHistoryStore::from_settings(settings)?;
        Ok(Self::new(store, settings.confirm.namespace.clone()))
    }

    pub fn tab_info() -> TabInfo {
        TAB_INFO
    }

    pub fn store(&self) -> &FileHistoryStore {
        &self.store
    }

    pub fn flow(&self) -> &DeleteFlow {
        &self.flow
    }

    /// Base name currently selected, empty when none.
    pub fn selection(&self) -> &str {
        &self.selection
    }

    /// Choices for the initial render.
    pub fn initial_choices(&self) -> Vec<String> {
        self.store.list()
    }

    pub fn refresh(&mut self) -> RefreshView {
        self.selection.clear();
        let choices = self.store.list();
        tracing::debug!(
            target: "output_history.panel",
            count = choices.len(),
            "refreshed output list"
        );
        RefreshView {
            choices,
            selection: None,
        }
    }

    /// Selection changed in the list.
    pub fn select(&mut self, base_name: Option<&str>) -> LoadedArtifact {
        let loaded = self.store.load(base_name);
        self.selection = loaded.selection.clone();
        loaded
    }

    /// Delete button pressed; returns the prompt for the confirmation modal.
    pub fn request_delete(&mut self) -> ConfirmPrompt {
        self.flow.request(Some(self.selection.as_str()))
    }

    /// Modal answered.
    pub fn confirm(&mut self, action: ConfirmAction) -> DeleteOutcome {
        let outcome = self.flow.resolve(action, &self.store);
        self.apply_selection(&outcome.selection);
        outcome
    }

    /// Modal answered through a shared token channel.
    pub fn confirm_token(&mut self, token: &str) -> DeleteOutcome {
        let outcome = self.flow.resolve_token(token, &self.store);
        self.apply_selection(&outcome.selection);
        outcome
    }

    fn apply_selection(&mut self, update: &Update<String>) {
        if let Update::Set(selection) = update {
            self.selection = selection.clone();
        }
    }
}
