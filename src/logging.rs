// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tracing setup for hosts embedding the panel

use tracing_subscriber::EnvFilter;

/// Targets raised to debug when verbose logging is requested.
pub const DEBUG_TARGETS: [&str; 3] = [
    "output_history.store=debug",
    "output_history.flow=debug",
    "output_history.panel=debug",
];

/// Build the filter: `RUST_LOG` first, WARN otherwise, plus debug for this
/// crate's targets when `verbose` is set.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let mut filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    if verbose {
        for directive in DEBUG_TARGETS {
            if let Ok(parsed) = directive.parse() {
                filter = filter.add_directive(parsed);
            }
        }
    }
    filter
}

/// Install a global fmt subscriber. Returns false if one was already set.
pub fn init(verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .try_init()
        .is_ok()
}
