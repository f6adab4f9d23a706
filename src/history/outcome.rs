// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Values handed back to the host UI after each operation

use serde::Serialize;
use std::path::PathBuf;

/// Prefix that distinguishes failure statuses from success messages
pub const ERROR_PREFIX: &str = "[ERROR] ";

pub const STATUS_CANCELLED: &str = "Deletion cancelled";
pub const STATUS_NO_SELECTION: &str = "[ERROR] No file selected";
pub const STATUS_NOT_FOUND: &str = "[ERROR] Files not found";

/// Whether a widget keeps its current value or receives a new one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "update", content = "value", rename_all = "snake_case")]
pub enum Update<T> {
    #[default]
    Keep,
    Set(T),
}

impl<T> Update<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Update::Keep)
    }

    /// Value to show given what the widget currently holds.
    pub fn resolve(self, current: T) -> T {
        match self {
            Update::Keep => current,
            Update::Set(value) => value,
        }
    }
}

/// Result of loading an artifact for playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct LoadedArtifact {
    /// Audio file to hand to the player; `None` clears it
    pub audio_path: Option<PathBuf>,
    /// Metadata text to display
    pub metadata: String,
    /// Selection token the host carries into the delete flow; empty when nothing is selected
    pub selection: String,
}

impl LoadedArtifact {
    /// Nothing selected, nothing playing, no metadata.
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn is_neutral(&self) -> bool {
        self.audio_path.is_none() && self.metadata.is_empty() && self.selection.is_empty()
    }
}

/// Parts of an artifact pair that a delete removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RemovedParts {
    pub audio: bool,
    pub text: bool,
}

impl RemovedParts {
    pub fn any(&self) -> bool {
        self.audio || self.text
    }

    /// Human-readable list such as `audio, text`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if self.audio {
            parts.push("audio");
        }
        if self.text {
            parts.push("text");
        }
        parts.join(", ")
    }
}

/// Widget updates produced by resolving a delete confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct DeleteOutcome {
    /// Status line text
    pub status: Update<String>,
    /// Refreshed artifact list
    pub choices: Update<Vec<String>>,
    /// Audio player source
    pub audio: Update<Option<PathBuf>>,
    /// Hidden selection token
    pub selection: Update<String>,
}

impl DeleteOutcome {
    /// Leave every widget untouched.
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn cancelled() -> Self {
        Self {
            status: Update::Set(STATUS_CANCELLED.to_string()),
            selection: Update::Set(String::new()),
            ..Self::default()
        }
    }

    pub fn no_selection() -> Self {
        Self {
            status: Update::Set(STATUS_NO_SELECTION.to_string()),
            audio: Update::Set(None),
            selection: Update::Set(String::new()),
            ..Self::default()
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: Update::Set(STATUS_NOT_FOUND.to_string()),
            ..Self::default()
        }
    }

    pub fn deleted(audio_file_name: &str, removed: RemovedParts, choices: Vec<String>) -> Self {
        Self {
            status: Update::Set(format!(
                "Deleted: {} ({})",
                audio_file_name,
                removed.describe()
            )),
            choices: Update::Set(choices),
            audio: Update::Set(None),
            selection: Update::Set(String::new()),
        }
    }

    /// Removal failed part-way; `removed` is what went before the failure.
    /// A player still pointing at a removed audio file is cleared.
    pub fn failed(message: impl std::fmt::Display, removed: RemovedParts) -> Self {
        Self {
            status: Update::Set(format!("{}Error: {}", ERROR_PREFIX, message)),
            audio: if removed.audio {
                Update::Set(None)
            } else {
                Update::Keep
            },
            ..Self::default()
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.status.is_keep()
            && self.choices.is_keep()
            && self.audio.is_keep()
            && self.selection.is_keep()
    }

    /// Status text, if this outcome sets one.
    pub fn status_text(&self) -> Option<&str> {
        match &self.status {
            Update::Set(status) => Some(status.as_str()),
            Update::Keep => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status_text()
            .is_some_and(|status| status.starts_with(ERROR_PREFIX))
    }
}
