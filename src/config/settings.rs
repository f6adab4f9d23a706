// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for output-history
//!
//! Handles loading and saving settings from ~/.output-history/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod io;
mod migration;
mod validation;

/// Environment variable that overrides the configured output directory.
pub const OUTPUT_DIR_ENV: &str = "OUTPUT_HISTORY_DIR";

/// Environment variable that relocates the settings home directory.
pub const HOME_ENV: &str = "OUTPUT_HISTORY_HOME";

/// Main settings structure, stored in ~/.output-history/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Directory holding generated artifacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Artifact file naming
    #[serde(default)]
    pub files: FilesConfig,

    /// Delete confirmation settings
    #[serde(default)]
    pub confirm: ConfirmConfig,
}

/// Extensions used to pair audio files with their metadata sidecars
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilesConfig {
    /// Audio file extension, without the leading dot
    #[serde(default = "default_audio_extension")]
    pub audio_extension: String,

    /// Metadata sidecar extension, without the leading dot
    #[serde(default = "default_metadata_extension")]
    pub metadata_extension: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            audio_extension: default_audio_extension(),
            metadata_extension: default_metadata_extension(),
        }
    }
}

/// Confirmation channel settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfirmConfig {
    /// Prefix that marks a confirmation token as belonging to this panel.
    /// Hosts that share one confirmation channel between panels rely on it.
    #[serde(default = "default_confirm_namespace")]
    pub namespace: String,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            namespace: default_confirm_namespace(),
        }
    }
}

fn default_audio_extension() -> String {
    "wav".to_string()
}

fn default_metadata_extension() -> String {
    "txt".to_string()
}

fn default_confirm_namespace() -> String {
    "output_".to_string()
}
