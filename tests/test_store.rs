use roster::store::{RecordStore, StoreError};
use tempfile::TempDir;

fn temp_store() -> (TempDir, RecordStore) {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::init(dir.path().join("roster.db")).unwrap();
    (dir, store)
}

#[test]
fn test_list_on_fresh_store_is_empty() {
    let (_dir, store) = temp_store();

    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_insert_then_list() {
    let (_dir, store) = temp_store();
    store.insert("Alice").unwrap();

    let records = store.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].name, "Alice");
}

#[test]
fn test_ids_are_unique_and_increasing() {
    let (_dir, store) = temp_store();
    store.insert("Alice").unwrap();
    store.insert("Bob").unwrap();
    store.insert("Carol").unwrap();

    let ids: Vec<i64> = store.list().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_update_changes_name_only() {
    let (_dir, store) = temp_store();
    store.insert("Alice").unwrap();
    store.insert("Bob").unwrap();

    store.update(1, "Eve").unwrap();

    let records = store.list().unwrap();
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].name, "Eve");
    assert_eq!(records[1].name, "Bob");
}

#[test]
fn test_update_missing_id_is_not_found() {
    let (_dir, store) = temp_store();
    store.insert("Alice").unwrap();

    let result = store.update(42, "Bob");

    assert!(matches!(result, Err(StoreError::NotFound { id: 42 })));
    assert_eq!(store.list().unwrap()[0].name, "Alice");
}

#[test]
fn test_delete_removes_record() {
    let (_dir, store) = temp_store();
    store.insert("Alice").unwrap();
    store.insert("Bob").unwrap();

    store.delete(1).unwrap();

    let records = store.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 2);
}

#[test]
fn test_delete_missing_id_is_not_found() {
    let (_dir, store) = temp_store();

    assert!(matches!(store.delete(7), Err(StoreError::NotFound { id: 7 })));
}

#[test]
fn test_deleted_ids_are_never_reused() {
    let (_dir, store) = temp_store();
    store.insert("Alice").unwrap();
    store.insert("Bob").unwrap();
    store.delete(2).unwrap();
    store.insert("Carol").unwrap();

    let ids: Vec<i64> = store.list().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_sql_metacharacters_stored_verbatim() {
    let (_dir, store) = temp_store();
    let name = "Robert'); DROP TABLE test;--";
    store.insert(name).unwrap();

    let records = store.list().unwrap();
    assert_eq!(records[0].name, name);

    // The table survived and stays usable.
    store.insert("Alice").unwrap();
    assert_eq!(store.list().unwrap().len(), 2);
}

#[test]
fn test_init_is_idempotent_and_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("roster.db");

    let store = RecordStore::init(&db_path).unwrap();
    store.insert("Alice").unwrap();

    let reopened = RecordStore::init(&db_path).unwrap();
    let records = reopened.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Alice");
}

#[test]
fn test_record_serializes_id_as_text() {
    let (_dir, store) = temp_store();
    store.insert("Alice").unwrap();

    let records = store.list().unwrap();
    let body = serde_json::to_value(&records).unwrap();

    assert_eq!(body, serde_json::json!([{"id": "1", "name": "Alice"}]));
}
