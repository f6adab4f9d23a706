// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde_json::Value;

/// Older hosts stored the directory as a flat `OUTPUT_DIR` key.
const LEGACY_OUTPUT_DIR_KEY: &str = "OUTPUT_DIR";

pub(super) fn migrate_on_load(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            if let Some(legacy) = map.remove(LEGACY_OUTPUT_DIR_KEY) {
                map.entry("output_dir").or_insert(legacy);
            }
            Value::Object(map)
        }
        other => other,
    }
}
