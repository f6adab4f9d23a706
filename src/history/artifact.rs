// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Artifact records derived from the output directory

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{HistoryError, Result};

/// Text shown in place of metadata when the sidecar is missing or unreadable
pub const NO_METADATA: &str = "No metadata available";

/// A generated audio file and its optional metadata sidecar
///
/// Records are derived from the directory on every scan and never cached,
/// so a record says nothing about whether its files still exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRecord {
    /// File stem shared by the audio file and its sidecar
    pub base_name: String,
    /// Path to the audio file
    pub audio_path: PathBuf,
    /// Path to the sidecar, if it existed when the record was derived
    pub metadata_path: Option<PathBuf>,
    /// Modification time of the audio file
    pub last_modified: DateTime<Utc>,
}

/// Outcome of reading a metadata sidecar
#[derive(Debug)]
pub enum MetadataRead {
    /// Sidecar contents, verbatim
    Contents(String),
    /// No sidecar next to the audio file
    Missing,
    /// Sidecar exists but could not be read as UTF-8 text
    Unreadable(std::io::Error),
}

impl MetadataRead {
    /// Read the sidecar at `path`.
    pub fn from_path(path: &Path) -> Self {
        if !path.is_file() {
            return MetadataRead::Missing;
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => MetadataRead::Contents(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => MetadataRead::Missing,
            Err(e) => MetadataRead::Unreadable(e),
        }
    }

    /// Text to display for this read, substituting the placeholder on failure.
    pub fn into_display_text(self) -> String {
        match self {
            MetadataRead::Contents(contents) => contents,
            MetadataRead::Missing | MetadataRead::Unreadable(_) => NO_METADATA.to_string(),
        }
    }
}

/// Check that `name` addresses a single file directly inside the output directory.
pub fn validate_base_name(name: &str) -> Result<()> {
    let unsafe_name = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if unsafe_name {
        return Err(HistoryError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Build `<dir>/<base_name>.<extension>`.
///
/// Appends rather than using `Path::with_extension`, which would replace
/// the last dotted segment of names like `take.2`.
pub(crate) fn artifact_path(dir: &Path, base_name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", base_name, extension))
}
