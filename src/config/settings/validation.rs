// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::PathBuf;

use crate::error::{HistoryError, Result};

use super::{Settings, OUTPUT_DIR_ENV};

impl Settings {
    /// Get the output directory, checking the env var first.
    pub fn effective_output_dir(&self) -> Option<PathBuf> {
        // Priority: env var > config file.
        std::env::var(OUTPUT_DIR_ENV)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| self.output_dir.clone())
    }

    /// Reject naming settings that would make pairing ambiguous.
    pub fn validate(&self) -> Result<()> {
        let audio = &self.files.audio_extension;
        let metadata = &self.files.metadata_extension;

        for (label, ext) in [("audio_extension", audio), ("metadata_extension", metadata)] {
            if ext.is_empty() {
                return Err(HistoryError::Config(format!("{} must not be empty", label)));
            }
            if ext.contains('.') || ext.contains('/') || ext.contains('\\') {
                return Err(HistoryError::Config(format!(
                    "{} must be a bare extension, got {:?}",
                    label, ext
                )));
            }
        }

        if audio == metadata {
            return Err(HistoryError::Config(format!(
                "audio and metadata extensions must differ (both {:?})",
                audio
            )));
        }

        if self.confirm.namespace.trim().is_empty() {
            return Err(HistoryError::Config(
                "confirm namespace must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
