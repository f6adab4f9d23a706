// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Output history for generated audio
//!
//! Lists generated audio files newest first, loads one together with its
//! metadata sidecar, and deletes pairs behind a confirmation step.

pub mod artifact;
pub mod confirm;
pub mod outcome;
pub mod store;

pub use artifact::{validate_base_name, ArtifactRecord, MetadataRead, NO_METADATA};
pub use confirm::{ConfirmAction, ConfirmPrompt, DeleteFlow, DeletePhase};
pub use outcome::{DeleteOutcome, LoadedArtifact, RemovedParts, Update};
pub use store::FileHistoryStore;
