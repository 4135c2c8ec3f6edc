use rusqlite::Connection;
use todo_core::store::sqlite::SCHEMA_VERSION;
use todo_core::{KeyValueStorage, SqliteStorage, StorageError, TodoStore, TODOS_KEY};

#[test]
fn fresh_file_is_stamped_with_current_layout() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("todos.sqlite3");

    let storage = SqliteStorage::open(&path).expect("open fresh database");
    assert_eq!(user_version(storage.connection()), SCHEMA_VERSION);
    assert_eq!(storage.get(TODOS_KEY).expect("read missing key"), None);
}

#[test]
fn reopening_keeps_stored_values() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("todos.sqlite3");

    let first = SqliteStorage::open(&path).expect("open database");
    first.set(TODOS_KEY, "[]").expect("write payload");
    drop(first);

    let second = SqliteStorage::open(&path).expect("reopen database");
    assert_eq!(user_version(second.connection()), SCHEMA_VERSION);
    assert_eq!(
        second.get(TODOS_KEY).expect("read payload").as_deref(),
        Some("[]")
    );
}

#[test]
fn newer_layout_is_refused_without_rewrite() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).expect("create database");
    conn.execute_batch("PRAGMA user_version = 999;")
        .expect("stamp future version");
    drop(conn);

    let err = match SqliteStorage::open(&path) {
        Ok(_) => panic!("newer layout should be refused"),
        Err(err) => err,
    };
    match err {
        StorageError::UnsupportedSchema { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }

    let conn = Connection::open(&path).expect("reopen raw database");
    assert_eq!(user_version(&conn), 999);
}

#[test]
fn set_overwrites_and_remove_deletes() {
    let storage = SqliteStorage::open_in_memory().expect("open in-memory sqlite");

    storage.set(TODOS_KEY, "[1]").expect("first write");
    storage.set(TODOS_KEY, "[2]").expect("overwrite");
    assert_eq!(
        storage.get(TODOS_KEY).expect("read payload").as_deref(),
        Some("[2]")
    );
    let rows: i64 = storage
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .expect("count rows");
    assert_eq!(rows, 1);

    storage.remove(TODOS_KEY).expect("remove key");
    storage.remove(TODOS_KEY).expect("remove missing key");
    assert_eq!(storage.get(TODOS_KEY).expect("read removed key"), None);
}

#[test]
fn invalid_keys_are_rejected_before_sql() {
    let storage = SqliteStorage::open_in_memory().expect("open in-memory sqlite");

    let err = storage.set("../todos", "[]").expect_err("path-like key");
    assert!(matches!(err, StorageError::InvalidKey(_)));
    let err = storage.get("").expect_err("empty key");
    assert!(matches!(err, StorageError::InvalidKey(_)));
}

#[test]
fn todo_store_survives_sqlite_reopen() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("todos.sqlite3");
    let payload = r#"[{"id":7,"title":"Stretch","createdAt":"x","completed":true}]"#;

    SqliteStorage::open(&path)
        .expect("open database")
        .set(TODOS_KEY, payload)
        .expect("seed payload");

    let store = TodoStore::new(SqliteStorage::open(&path).expect("reopen database"));
    let todos = store.load();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "Stretch");
    assert!(todos[0].completed);
}

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .expect("read user_version")
}
