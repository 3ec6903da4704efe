// ==========================================
// Entry API Integration Tests
// ==========================================
// Submission pipeline: validation, derivation, persistence and
// the CSV snapshot side effect.
// ==========================================


use spool_winding::api::ApiError;
use test_helpers::{create_test_app, sample_draft, week23_monday};

#[test]
fn test_valid_entry_accepted_with_derived_metrics() {
    let (_dir, state) = create_test_app();

    let outcome = state.entry_api.submit_entry(&sample_draft(week23_monday())).unwrap();

    assert_eq!(outcome.id, 1);
    assert_eq!(outcome.metrics.kg_per_frame, 52);
    assert_eq!(outcome.metrics.kg_per_winder, 104);
    assert_eq!(outcome.metrics.diff, 20);
    assert_eq!(state.entry_api.entry_count().unwrap(), 1);
}

#[test]
fn test_snapshot_exported_after_accept() {
    let (_dir, state) = create_test_app();

    let outcome = state.entry_api.submit_entry(&sample_draft(week23_monday())).unwrap();

    let path = outcome.snapshot_path.expect("snapshot should be written");
    assert!(path.is_file());
    assert!(path.ends_with("winding_2026-06-01.csv"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("supervisor_name"));
    assert!(content.contains("R. Das"));
}

#[test]
fn test_snapshot_contains_full_table() {
    let (_dir, state) = create_test_app();

    state.entry_api.submit_entry(&sample_draft(week23_monday())).unwrap();
    let mut second = sample_draft(week23_monday());
    second.supervisor_name = "S. Roy".to_string();
    let outcome = state.entry_api.submit_entry(&second).unwrap();

    let content = std::fs::read_to_string(outcome.snapshot_path.unwrap()).unwrap();
    // header + both rows
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains("R. Das"));
    assert!(content.contains("S. Roy"));
}

#[test]
fn test_empty_supervisor_rejected_nothing_persisted() {
    let (_dir, state) = create_test_app();

    let mut draft = sample_draft(week23_monday());
    draft.supervisor_name = "  ".to_string();

    match state.entry_api.submit_entry(&draft) {
        Err(ApiError::ValidationFailed { violations, .. }) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].field, "supervisor_name");
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
    assert_eq!(state.entry_api.entry_count().unwrap(), 0);
}

#[test]
fn test_quality_mismatch_rejected() {
    let (_dir, state) = create_test_app();

    let mut draft = sample_draft(week23_monday());
    draft.avg_count = 39.5;

    assert!(matches!(
        state.entry_api.submit_entry(&draft),
        Err(ApiError::ValidationFailed { .. })
    ));
    assert_eq!(state.entry_api.entry_count().unwrap(), 0);
}

#[test]
fn test_zero_frame_count_rejected_not_derived() {
    let (_dir, state) = create_test_app();

    let mut draft = sample_draft(week23_monday());
    draft.no_of_frame = 0;

    match state.entry_api.submit_entry(&draft) {
        Err(ApiError::ValidationFailed { violations, .. }) => {
            assert!(violations.iter().any(|v| v.field == "no_of_frame"));
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
    assert_eq!(state.entry_api.entry_count().unwrap(), 0);
}

#[test]
fn test_supervisor_name_stored_trimmed() {
    let (_dir, state) = create_test_app();

    let mut draft = sample_draft(week23_monday());
    draft.supervisor_name = "  R. Das  ".to_string();
    state.entry_api.submit_entry(&draft).unwrap();

    let entries = state.entry_api.list_entries().unwrap();
    assert_eq!(entries[0].supervisor_name, "R. Das");
}

#[test]
fn test_list_entries_most_recent_first() {
    let (_dir, state) = create_test_app();

    state.entry_api.submit_entry(&sample_draft(week23_monday())).unwrap();
    let mut second = sample_draft(week23_monday());
    second.supervisor_name = "S. Roy".to_string();
    state.entry_api.submit_entry(&second).unwrap();

    let entries = state.entry_api.list_entries().unwrap();
    assert_eq!(entries[0].supervisor_name, "S. Roy");
    assert_eq!(entries[1].supervisor_name, "R. Das");
}
