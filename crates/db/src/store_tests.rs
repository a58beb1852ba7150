//! Behavioural tests for `RecordStore`.
//!
//! Most tests run against a private in-memory database; the re-open tests
//! use a temporary file so the schema and data outlive the pool.

use crate::{DeleteOutcome, Record, RecordStore, UpdateOutcome};

async fn store() -> RecordStore {
    RecordStore::open_in_memory()
        .await
        .expect("in-memory store should open")
}

fn widget() -> Record {
    Record::new("Widget A", 9.99, "Gadgets", "a small widget")
}

// ============================================================
// create / get_by_id / list_all
// ============================================================

#[tokio::test]
async fn created_record_reads_back_with_assigned_id() {
    let store = store().await;
    let original = widget();

    let id = store.create(&original).await.unwrap();
    let fetched = store.get_by_id(id).await.unwrap().expect("record should exist");

    assert_eq!(fetched, original.clone().with_id(id));
}

#[tokio::test]
async fn create_ignores_caller_supplied_id() {
    let store = store().await;
    let first = store.create(&widget()).await.unwrap();

    let id = store.create(&widget().with_id(first)).await.unwrap();

    assert_ne!(id, first);
    assert_eq!(store.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn null_description_round_trips() {
    let store = store().await;
    let mut record = widget();
    record.description = None;

    let id = store.create(&record).await.unwrap();
    let fetched = store.get_by_id(id).await.unwrap().unwrap();

    assert_eq!(fetched.description, None);
    assert_eq!(fetched.description_or_empty(), "");
}

#[tokio::test]
async fn empty_table_lists_nothing() {
    let store = store().await;
    assert!(store.list_all().await.unwrap().is_empty());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn missing_id_is_absent_not_an_error() {
    let store = store().await;
    assert_eq!(store.get_by_id(42).await.unwrap(), None);
}

#[tokio::test]
async fn list_all_reflects_creates_updates_and_deletes() {
    let store = store().await;
    let a = store.create(&Record::new("a", 1.0, "x", "")).await.unwrap();
    let b = store.create(&Record::new("b", 2.0, "y", "")).await.unwrap();
    let c = store.create(&Record::new("c", 3.0, "z", "")).await.unwrap();

    store.update(&Record::new("b2", 20.0, "y", "changed").with_id(b)).await.unwrap();
    store.delete(a).await.unwrap();

    let all = store.list_all().await.unwrap();
    assert_eq!(
        all,
        vec![
            Record::new("b2", 20.0, "y", "changed").with_id(b),
            Record::new("c", 3.0, "z", "").with_id(c),
        ]
    );
    assert_eq!(store.count().await.unwrap(), 2);
}

// ============================================================
// update
// ============================================================

#[tokio::test]
async fn update_without_id_is_a_no_op() {
    let store = store().await;
    let id = store.create(&widget()).await.unwrap();

    let outcome = store.update(&Record::new("other", 0.0, "x", "")).await.unwrap();

    assert_eq!(outcome, UpdateOutcome::MissingId);
    assert!(!outcome.is_updated());
    assert_eq!(store.get_by_id(id).await.unwrap(), Some(widget().with_id(id)));
}

#[tokio::test]
async fn update_on_unknown_id_leaves_store_unchanged() {
    let store = store().await;
    let id = store.create(&widget()).await.unwrap();
    let before = store.list_all().await.unwrap();

    let outcome = store.update(&widget().with_id(id + 100)).await.unwrap();

    assert_eq!(outcome, UpdateOutcome::NoSuchId);
    assert_eq!(store.list_all().await.unwrap(), before);
}

// ============================================================
// delete
// ============================================================

#[tokio::test]
async fn delete_is_idempotent() {
    let store = store().await;
    let id = store.create(&widget()).await.unwrap();

    assert_eq!(store.delete(id).await.unwrap(), DeleteOutcome::Deleted);
    assert_eq!(store.delete(id).await.unwrap(), DeleteOutcome::NoSuchId);
    assert_eq!(store.get_by_id(id).await.unwrap(), None);
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let store = store().await;
    let keep = store.create(&Record::new("keep", 1.0, "x", "")).await.unwrap();
    let gone = store.create(&Record::new("drop", 2.0, "x", "")).await.unwrap();

    assert!(store.delete(gone).await.unwrap().is_deleted());
    assert!(!store.delete(gone + 100).await.unwrap().is_deleted());

    let remaining: Vec<_> = store.list_all().await.unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(remaining, vec![Some(keep)]);
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let store = store().await;
    let first = store.create(&widget()).await.unwrap();
    store.delete(first).await.unwrap();

    let second = store.create(&widget()).await.unwrap();

    assert!(second > first);
}

// ============================================================
// search
// ============================================================

#[tokio::test]
async fn search_finds_name_substring() {
    let store = store().await;
    let id = store.create(&widget()).await.unwrap();

    let hits = store.search("Widget").await.unwrap();
    assert_eq!(hits, vec![widget().with_id(id)]);

    assert!(store.search("nomatch__").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_covers_description_and_category() {
    let store = store().await;
    let by_desc = store.create(&Record::new("one", 1.0, "misc", "made of brass")).await.unwrap();
    let by_cat = store.create(&Record::new("two", 2.0, "Brassware", "")).await.unwrap();
    store.create(&Record::new("three", 3.0, "misc", "steel")).await.unwrap();

    let ids: Vec<_> = store.search("brass").await.unwrap().into_iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![Some(by_desc), Some(by_cat)]);
}

#[tokio::test]
async fn search_treats_wildcards_literally() {
    let store = store().await;
    let percent = store.create(&Record::new("50% off", 1.0, "deals", "")).await.unwrap();
    store.create(&Record::new("500", 1.0, "deals", "")).await.unwrap();
    store.create(&Record::new("a-b", 1.0, "deals", "")).await.unwrap();

    let ids: Vec<_> = store.search("50%").await.unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(percent)]);

    assert!(store.search("a_b").await.unwrap().is_empty());
}

// ============================================================
// scenario
// ============================================================

#[tokio::test]
async fn bolt_and_nut_scenario() {
    let store = store().await;

    let bolt = store.create(&Record::new("Bolt", 1.5, "Hardware", "steel")).await.unwrap();
    let nut = store.create(&Record::new("Nut", 0.5, "Hardware", "")).await.unwrap();
    assert_eq!((bolt, nut), (1, 2));

    assert_eq!(store.search("Hardware").await.unwrap().len(), 2);

    let outcome = store
        .update(&Record::new("Bolt", 2.0, "Hardware", "steel").with_id(1))
        .await
        .unwrap();
    assert!(outcome.is_updated());
    assert_eq!(store.get_by_id(1).await.unwrap().unwrap().value, 2.0);

    assert!(store.delete(2).await.unwrap().is_deleted());
    assert_eq!(store.list_all().await.unwrap().len(), 1);
}

// ============================================================
// schema lifecycle (file-backed)
// ============================================================

#[tokio::test]
async fn reopening_a_file_keeps_schema_and_data() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("catalog.db").display());

    let store = RecordStore::open(&url, 2).await.unwrap();
    let id = store.create(&widget()).await.unwrap();
    store.ensure_schema().await.unwrap();
    store.close().await;

    let reopened = RecordStore::open(&url, 2).await.unwrap();
    assert_eq!(reopened.get_by_id(id).await.unwrap(), Some(widget().with_id(id)));
    reopened.close().await;
}

#[tokio::test]
async fn operations_fail_with_storage_error_after_close() {
    let store = store().await;
    store.close().await;

    let err = store.list_all().await.unwrap_err();
    assert!(matches!(err, crate::DbError::Storage(_)));
}
