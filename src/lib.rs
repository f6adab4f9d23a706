// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! output-history - browse and manage generated audio outputs.
//!
//! Generated audio lives in one directory as `<name>.wav` files, each with an
//! optional `<name>.txt` metadata sidecar. This crate backs the host UI's
//! "Output History" tab:
//! - `history`: directory-backed store, delete confirmation flow, outcome types
//! - `panel`: facade the host's refresh/select/delete events call into
//! - `config`: settings file and environment overrides
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod panel;

pub use error::{HistoryError, Result};
pub use history::{ConfirmAction, FileHistoryStore};
pub use panel::OutputHistoryPanel;
