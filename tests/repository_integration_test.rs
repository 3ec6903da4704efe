// ==========================================
// Repository Integration Tests
// ==========================================
// Append-only store behavior: ordered reads, idempotent listing,
// durable counts.
// ==========================================


use spool_winding::engine::MetricsDeriver;
use spool_winding::{EntryDraft, NewProductionEntry};
use test_helpers::{create_test_app, sample_draft, week23_monday};

fn new_entry(draft: &EntryDraft) -> NewProductionEntry {
    let metrics = MetricsDeriver::derive(
        draft.actual_prod,
        draft.target_prod,
        draft.no_of_frame,
        draft.no_of_winder,
    )
    .unwrap();
    NewProductionEntry::from_draft(draft, metrics)
}

#[test]
fn test_insert_assigns_increasing_ids() {
    let (_dir, state) = create_test_app();

    let id1 = state.entry_repo.insert(&new_entry(&sample_draft(week23_monday()))).unwrap();
    let id2 = state.entry_repo.insert(&new_entry(&sample_draft(week23_monday()))).unwrap();

    assert_eq!(id1, 1);
    assert_eq!(id2, 2);
    assert_eq!(state.entry_repo.count().unwrap(), 2);
}

#[test]
fn test_list_all_most_recent_first() {
    let (_dir, state) = create_test_app();

    let mut first = sample_draft(week23_monday());
    first.supervisor_name = "First In".to_string();
    let mut second = sample_draft(week23_monday());
    second.supervisor_name = "Second In".to_string();

    state.entry_repo.insert(&new_entry(&first)).unwrap();
    state.entry_repo.insert(&new_entry(&second)).unwrap();

    let entries = state.entry_repo.list_all().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].supervisor_name, "Second In");
    assert_eq!(entries[1].supervisor_name, "First In");
}

#[test]
fn test_list_all_idempotent() {
    let (_dir, state) = create_test_app();

    state.entry_repo.insert(&new_entry(&sample_draft(week23_monday()))).unwrap();
    state.entry_repo.insert(&new_entry(&sample_draft(week23_monday()))).unwrap();

    let a = state.entry_repo.list_all().unwrap();
    let b = state.entry_repo.list_all().unwrap();

    let ids_a: Vec<i64> = a.iter().map(|e| e.id).collect();
    let ids_b: Vec<i64> = b.iter().map(|e| e.id).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn test_roundtrip_preserves_fields() {
    let (_dir, state) = create_test_app();

    let draft = sample_draft(week23_monday());
    state.entry_repo.insert(&new_entry(&draft)).unwrap();

    let entries = state.entry_repo.list_all().unwrap();
    let stored = &entries[0];
    assert_eq!(stored.zone, draft.zone);
    assert_eq!(stored.entry_date, draft.entry_date);
    assert_eq!(stored.shift, draft.shift);
    assert_eq!(stored.supervisor_name, draft.supervisor_name);
    assert_eq!(stored.quality, draft.quality);
    assert_eq!(stored.spindle, draft.spindle);
    assert_eq!(stored.no_of_frame, draft.no_of_frame);
    assert_eq!(stored.no_of_winder, draft.no_of_winder);
    assert_eq!(stored.target_prod, draft.target_prod);
    assert_eq!(stored.actual_prod, draft.actual_prod);
    assert_eq!(stored.kg_per_frame, 52);
    assert_eq!(stored.kg_per_winder, 104);
    assert_eq!(stored.diff, 20);
}

#[test]
fn test_empty_store_lists_nothing() {
    let (_dir, state) = create_test_app();
    assert!(state.entry_repo.list_all().unwrap().is_empty());
    assert_eq!(state.entry_repo.count().unwrap(), 0);
}
