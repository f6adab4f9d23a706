// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use output_history::history::{
    ConfirmAction, DeleteOutcome, FileHistoryStore, LoadedArtifact, Update, NO_METADATA,
};
use output_history::OutputHistoryPanel;
use proptest::prelude::*;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn write_with_age(dir: &Path, name: &str, contents: &str, age_secs: u64) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    std::fs::File::options()
        .write(true)
        .open(&path)
        .and_then(|file| file.set_modified(SystemTime::now() - Duration::from_secs(age_secs)))
        .expect("set mtime");
    path
}

/// `a.wav` + `a.txt` older, `b.wav` alone newer.
fn two_artifact_dir() -> (TempDir, FileHistoryStore) {
    let temp_dir = TempDir::new().unwrap();
    write_with_age(temp_dir.path(), "a.wav", "RIFFa", 120);
    write_with_age(temp_dir.path(), "a.txt", "Voice: narrator\nSeed: 1", 120);
    write_with_age(temp_dir.path(), "b.wav", "RIFFb", 30);
    let store = FileHistoryStore::new(Some(temp_dir.path().to_path_buf()));
    (temp_dir, store)
}

#[test]
fn test_list_and_load_example_directory() {
    let (temp_dir, store) = two_artifact_dir();

    assert_eq!(store.list(), vec!["b", "a"]);

    assert_eq!(
        store.load(Some("a")),
        LoadedArtifact {
            audio_path: Some(temp_dir.path().join("a.wav")),
            metadata: "Voice: narrator\nSeed: 1".to_string(),
            selection: "a".to_string(),
        }
    );
    assert_eq!(
        store.load(Some("b")),
        LoadedArtifact {
            audio_path: Some(temp_dir.path().join("b.wav")),
            metadata: NO_METADATA.to_string(),
            selection: "b".to_string(),
        }
    );
}

#[test]
fn test_list_counts_audio_not_metadata() {
    let (temp_dir, store) = two_artifact_dir();
    write_with_age(temp_dir.path(), "c.txt", "orphan", 5);

    assert_eq!(store.list().len(), 2);
}

#[test]
fn test_list_reflects_external_changes() {
    let (temp_dir, store) = two_artifact_dir();
    write_with_age(temp_dir.path(), "c.wav", "RIFFc", 1);
    assert_eq!(store.list(), vec!["c", "b", "a"]);

    std::fs::remove_file(temp_dir.path().join("b.wav")).unwrap();
    assert_eq!(store.list(), vec!["c", "a"]);
}

#[test]
fn test_load_rechecks_existence() {
    let (temp_dir, store) = two_artifact_dir();
    assert!(!store.load(Some("b")).is_neutral());

    std::fs::remove_file(temp_dir.path().join("b.wav")).unwrap();
    assert!(store.load(Some("b")).is_neutral());
}

#[test]
fn test_delete_pair_refreshes_list() {
    let (temp_dir, store) = two_artifact_dir();

    let outcome = store.delete(ConfirmAction::Confirm, Some("a"));
    let status = outcome.status_text().expect("status set");

    assert!(status.contains("a.wav"));
    assert!(status.contains("audio"));
    assert!(status.contains("text"));
    assert_eq!(outcome.choices, Update::Set(vec!["b".to_string()]));
    assert!(!temp_dir.path().join("a.wav").exists());
    assert!(!temp_dir.path().join("a.txt").exists());
}

#[test]
fn test_delete_audio_only_reports_audio() {
    let (temp_dir, store) = two_artifact_dir();

    let outcome = store.delete(ConfirmAction::Confirm, Some("b"));
    let status = outcome.status_text().expect("status set");

    assert_eq!(status, "Deleted: b.wav (audio)");
    assert!(!status.contains("text"));
    assert!(temp_dir.path().join("a.wav").exists());
}

#[test]
fn test_delete_without_selection_changes_nothing() {
    let (temp_dir, store) = two_artifact_dir();

    let outcome = store.delete(ConfirmAction::Confirm, Some(""));

    assert!(outcome.is_error());
    assert_eq!(store.list(), vec!["b", "a"]);
    assert!(temp_dir.path().join("a.txt").exists());
}

#[test]
fn test_delete_cancel_changes_nothing() {
    let (_temp_dir, store) = two_artifact_dir();

    let outcome = store.delete(ConfirmAction::Cancel, Some("a"));

    assert_eq!(outcome.status_text(), Some("Deletion cancelled"));
    assert_eq!(store.list(), vec!["b", "a"]);
}

#[test]
fn test_delete_foreign_token_is_full_noop() {
    let (_temp_dir, store) = two_artifact_dir();

    let action = ConfirmAction::from_token(Some("voice_clone_confirm"), "output_");
    let outcome = store.delete(action, Some("a"));

    assert_eq!(outcome, DeleteOutcome::unchanged());
    assert_eq!(store.list(), vec!["b", "a"]);
}

#[cfg(unix)]
#[test]
fn test_delete_io_failure_reports_error() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let outputs = temp_dir.path().join("outputs");
    std::fs::create_dir(&outputs).unwrap();
    write_with_age(&outputs, "a.wav", "RIFF", 10);
    std::fs::set_permissions(&outputs, std::fs::Permissions::from_mode(0o555)).unwrap();

    let store = FileHistoryStore::new(Some(outputs.clone()));
    let outcome = store.delete(ConfirmAction::Confirm, Some("a"));

    std::fs::set_permissions(&outputs, std::fs::Permissions::from_mode(0o755)).unwrap();

    // Privileged users can unlink regardless of directory permissions.
    if outputs.join("a.wav").exists() {
        assert!(outcome.is_error());
        let status = outcome.status_text().unwrap();
        assert!(status.starts_with("[ERROR] Error: "));
        // Raw OS message, not the crate error's display.
        assert!(!status.contains("IO error"));
        assert!(outcome.choices.is_keep());
        assert!(outcome.audio.is_keep());
    }
}

#[test]
fn test_panel_flow_end_to_end() {
    let (temp_dir, store) = two_artifact_dir();
    let mut panel = OutputHistoryPanel::new(store, "output_");

    assert_eq!(panel.initial_choices(), vec!["b", "a"]);

    let loaded = panel.select(Some("a"));
    assert_eq!(loaded.metadata, "Voice: narrator\nSeed: 1");

    // Answer for another panel sharing the channel.
    assert!(panel.confirm_token("voice_confirm").is_unchanged());

    panel.request_delete();
    let outcome = panel.confirm_token("output_confirm_1700000000");
    assert_eq!(outcome.choices, Update::Set(vec!["b".to_string()]));
    assert!(!temp_dir.path().join("a.wav").exists());

    // A repeated answer after completion is stale.
    assert!(panel.confirm_token("output_confirm_1700000000").is_unchanged());
    assert_eq!(panel.refresh().choices, vec!["b"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_list_orders_by_mtime_desc(ages in proptest::collection::btree_set(1u64..10_000, 1..8)) {
        let temp_dir = TempDir::new().unwrap();
        let ages: Vec<u64> = ages.into_iter().collect();
        for (i, age) in ages.iter().enumerate() {
            write_with_age(temp_dir.path(), &format!("take_{}.wav", i), "x", *age);
            if i % 2 == 0 {
                write_with_age(temp_dir.path(), &format!("take_{}.txt", i), "meta", *age);
            }
        }

        let store = FileHistoryStore::new(Some(temp_dir.path().to_path_buf()));
        let listed = store.list();

        // Youngest file (smallest age) first.
        let mut expected: Vec<(u64, String)> = ages
            .iter()
            .enumerate()
            .map(|(i, age)| (*age, format!("take_{}", i)))
            .collect();
        expected.sort();
        let expected: Vec<String> = expected.into_iter().map(|(_, name)| name).collect();

        prop_assert_eq!(listed, expected);
    }
}
