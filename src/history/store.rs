// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! File history store implementation
//!
//! The output directory is the only index: every call rescans it, so the
//! store holds nothing beyond its configuration.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::Result;

use super::artifact::{artifact_path, validate_base_name, ArtifactRecord, MetadataRead};
use super::confirm::ConfirmAction;
use super::outcome::{DeleteOutcome, LoadedArtifact, RemovedParts};

/// Lists, loads and deletes artifact pairs in one output directory
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    /// Directory holding the artifacts; `None` behaves like an empty directory
    output_dir: Option<PathBuf>,
    audio_extension: String,
    metadata_extension: String,
}

impl FileHistoryStore {
    /// Create a store over `output_dir` with `.wav` audio and `.txt` metadata.
    pub fn new(output_dir: Option<PathBuf>) -> Self {
        let files = crate::config::FilesConfig::default();
        Self {
            output_dir,
            audio_extension: files.audio_extension,
            metadata_extension: files.metadata_extension,
        }
    }

    /// Create a store from settings, honouring the output directory env override.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::new(settings.effective_output_dir()).with_extensions(
            &settings.files.audio_extension,
            &settings.files.metadata_extension,
        ))
    }

    /// Override the audio and metadata extensions (without leading dots).
    pub fn with_extensions(mut self, audio: &str, metadata: &str) -> Self {
        self.audio_extension = audio.to_string();
        self.metadata_extension = metadata.to_string();
        self
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Directory to scan, if it is configured and currently exists.
    fn existing_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref().filter(|dir| dir.is_dir())
    }

    /// Path of the audio file for `base_name`, if the name is usable.
    pub fn audio_path(&self, base_name: &str) -> Option<PathBuf> {
        let dir = self.output_dir.as_deref()?;
        validate_base_name(base_name).ok()?;
        Some(artifact_path(dir, base_name, &self.audio_extension))
    }

    /// Path of the metadata sidecar for `base_name`, if the name is usable.
    pub fn metadata_path(&self, base_name: &str) -> Option<PathBuf> {
        let dir = self.output_dir.as_deref()?;
        validate_base_name(base_name).ok()?;
        Some(artifact_path(dir, base_name, &self.metadata_extension))
    }

    /// All artifacts, most recently modified first; ties ordered by base name.
    pub fn records(&self) -> Vec<ArtifactRecord> {
        let Some(dir) = self.existing_dir() else {
            return Vec::new();
        };

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    target: "output_history.store",
                    dir = %dir.display(),
                    error = %e,
                    "failed to read output directory"
                );
                return Vec::new();
            }
        };

        let mut records: Vec<ArtifactRecord> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.record_for(dir, &entry.path()))
            .collect();

        records.sort_by(|a, b| {
            b.last_modified
                .cmp(&a.last_modified)
                .then_with(|| a.base_name.cmp(&b.base_name))
        });
        records
    }

    fn record_for(&self, dir: &Path, path: &Path) -> Option<ArtifactRecord> {
        if path.extension()? != self.audio_extension.as_str() {
            return None;
        }
        let base_name = path.file_stem()?.to_str()?.to_string();

        let modified = match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => meta.modified().ok()?,
            Ok(_) => return None,
            Err(e) => {
                // Removed between read_dir and stat.
                tracing::debug!(
                    target: "output_history.store",
                    path = %path.display(),
                    error = %e,
                    "skipping vanished entry"
                );
                return None;
            }
        };

        let metadata_path = artifact_path(dir, &base_name, &self.metadata_extension);
        Some(ArtifactRecord {
            audio_path: path.to_path_buf(),
            metadata_path: metadata_path.is_file().then_some(metadata_path),
            last_modified: DateTime::<Utc>::from(modified),
            base_name,
        })
    }

    /// Base names of all artifacts, most recently modified first.
    pub fn list(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .map(|record| record.base_name)
            .collect()
    }

    /// Load an artifact for playback.
    ///
    /// Empty selections and missing audio files yield the neutral state; a
    /// missing or unreadable sidecar yields placeholder metadata.
    pub fn load(&self, base_name: Option<&str>) -> LoadedArtifact {
        let Some(base_name) = base_name.filter(|name| !name.is_empty()) else {
            return LoadedArtifact::neutral();
        };
        let Some(audio_path) = self.audio_path(base_name).filter(|path| path.is_file()) else {
            return LoadedArtifact::neutral();
        };

        let metadata = self
            .metadata_path(base_name)
            .map(|path| self.read_metadata(&path))
            .unwrap_or(MetadataRead::Missing);

        LoadedArtifact {
            audio_path: Some(audio_path),
            metadata: metadata.into_display_text(),
            selection: base_name.to_string(),
        }
    }

    fn read_metadata(&self, path: &Path) -> MetadataRead {
        let read = MetadataRead::from_path(path);
        if let MetadataRead::Unreadable(e) = &read {
            tracing::warn!(
                target: "output_history.store",
                path = %path.display(),
                error = %e,
                "metadata sidecar unreadable"
            );
        }
        read
    }

    /// Resolve a delete confirmation for `base_name`.
    pub fn delete(&self, action: ConfirmAction, base_name: Option<&str>) -> DeleteOutcome {
        match action {
            ConfirmAction::Unrelated => return DeleteOutcome::unchanged(),
            ConfirmAction::Cancel => return DeleteOutcome::cancelled(),
            ConfirmAction::Confirm => {}
        }

        let Some(base_name) = base_name.filter(|name| !name.is_empty()) else {
            return DeleteOutcome::no_selection();
        };

        let mut removed = RemovedParts::default();
        match self.remove_pair(base_name, &mut removed) {
            Ok(()) if removed.any() => {
                tracing::info!(
                    target: "output_history.store",
                    base_name,
                    audio = removed.audio,
                    text = removed.text,
                    "deleted artifact"
                );
                let audio_file_name = format!("{}.{}", base_name, self.audio_extension);
                DeleteOutcome::deleted(&audio_file_name, removed, self.list())
            }
            Ok(()) => DeleteOutcome::not_found(),
            Err(e) => {
                tracing::warn!(
                    target: "output_history.store",
                    base_name,
                    audio_removed = removed.audio,
                    error = %e,
                    "failed to delete artifact"
                );
                DeleteOutcome::failed(e, removed)
            }
        }
    }

    /// Remove the audio file and sidecar for `base_name`, each only if present.
    /// `removed` records progress even when the second removal fails.
    fn remove_pair(&self, base_name: &str, removed: &mut RemovedParts) -> std::io::Result<()> {
        // Unusable names cannot address anything inside the directory.
        let (Some(audio_path), Some(metadata_path)) =
            (self.audio_path(base_name), self.metadata_path(base_name))
        else {
            return Ok(());
        };

        if audio_path.is_file() {
            std::fs::remove_file(&audio_path)?;
            removed.audio = true;
        }
        if metadata_path.is_file() {
            std::fs::remove_file(&metadata_path)?;
            removed.text = true;
        }
        Ok(())
    }
}
