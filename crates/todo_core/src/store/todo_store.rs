//! Todo payload persistence over a key-value medium.
//!
//! # Responsibility
//! - Serialize the whole collection to JSON under `TODOS_KEY`.
//! - Load it back, degrading to an empty list on any failure.
//!
//! # Invariants
//! - `load()` never returns an error; failures are logged and yield `[]`.
//! - A payload that is not an array of todo records is rejected as a whole.
//! - Records breaking model invariants are dropped one by one.

use crate::model::todo::{Todo, TodoValidationError};
use crate::store::kv::{KeyValueStorage, StorageError};
use log::{debug, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized collection.
pub const TODOS_KEY: &str = "todos";

pub type StoreResult<T> = Result<T, StoreError>;

/// Write-path failure of the todo store.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode todos: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Persists the todo collection through an injectable storage medium.
pub struct TodoStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> TodoStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the persisted collection.
    ///
    /// Returns `[]` when nothing was saved yet, the medium read fails, or the
    /// payload is not a JSON array of todo records. Individual records that
    /// break model invariants are dropped; the rest are kept.
    pub fn load(&self) -> Vec<Todo> {
        let raw = match self.storage.get(TODOS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=store_load module=store status=empty reason=missing_key");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=degraded error_code=storage_read_failed error={}",
                    err
                );
                return Vec::new();
            }
        };

        let decoded = match decode_todos(&raw) {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!(
                    "event=store_load module=store status=degraded error_code=malformed_payload bytes={} error={}",
                    raw.len(),
                    err
                );
                return Vec::new();
            }
        };

        for (index, reason) in &decoded.skipped {
            warn!(
                "event=store_load module=store status=degraded error_code=invalid_record index={} error={}",
                index, reason
            );
        }
        debug!(
            "event=store_load module=store status=ok count={} skipped={}",
            decoded.todos.len(),
            decoded.skipped.len()
        );
        decoded.todos
    }

    /// Overwrites the persisted collection with `todos`.
    pub fn save(&self, todos: &[Todo]) -> StoreResult<()> {
        let encoded = serde_json::to_string(todos).map_err(StoreError::Encode)?;
        self.storage.set(TODOS_KEY, &encoded)?;
        debug!(
            "event=store_save module=store status=ok count={} bytes={}",
            todos.len(),
            encoded.len()
        );
        Ok(())
    }

    /// Drops the persisted collection entirely.
    pub fn clear(&self) -> StoreResult<()> {
        self.storage.remove(TODOS_KEY)?;
        Ok(())
    }
}

struct DecodedTodos {
    todos: Vec<Todo>,
    /// Record index in the payload and the invariant it broke.
    skipped: Vec<(usize, TodoValidationError)>,
}

/// Shape errors reject the payload; invariant errors drop one record.
fn decode_todos(raw: &str) -> Result<DecodedTodos, serde_json::Error> {
    let records: Vec<Todo> = serde_json::from_str(raw)?;
    let mut seen = HashSet::with_capacity(records.len());
    let mut decoded = DecodedTodos {
        todos: Vec::with_capacity(records.len()),
        skipped: Vec::new(),
    };

    for (index, todo) in records.into_iter().enumerate() {
        let checked = todo.validate().and_then(|()| {
            if seen.contains(&todo.id) {
                Err(TodoValidationError::DuplicateId(todo.id))
            } else {
                Ok(())
            }
        });
        match checked {
            Ok(()) => {
                seen.insert(todo.id);
                decoded.todos.push(todo);
            }
            Err(reason) => decoded.skipped.push((index, reason)),
        }
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::decode_todos;
    use crate::model::todo::TodoValidationError;

    #[test]
    fn decode_keeps_first_of_duplicate_ids() {
        let raw = r#"[
            {"id":1,"title":"a","createdAt":"x","completed":false},
            {"id":1,"title":"b","createdAt":"x","completed":true}
        ]"#;
        let decoded = decode_todos(raw).expect("array payload should decode");
        assert_eq!(decoded.todos.len(), 1);
        assert_eq!(decoded.todos[0].title, "a");
        assert_eq!(
            decoded.skipped,
            vec![(1, TodoValidationError::DuplicateId(1))]
        );
    }

    #[test]
    fn decode_drops_blank_titles_only() {
        let raw = r#"[
            {"id":2,"title":"Keep me","createdAt":"x","completed":false},
            {"id":1,"title":"   ","createdAt":"x","completed":false}
        ]"#;
        let decoded = decode_todos(raw).expect("array payload should decode");
        assert_eq!(decoded.todos.len(), 1);
        assert_eq!(decoded.todos[0].id, 2);
        assert_eq!(decoded.skipped, vec![(1, TodoValidationError::EmptyTitle)]);
    }

    #[test]
    fn decode_rejects_wrong_shapes() {
        assert!(decode_todos(r#"{"todos":[]}"#).is_err());
        assert!(decode_todos(r#"[{"id":"1","title":"a","createdAt":"x","completed":false}]"#).is_err());
        assert!(decode_todos("not json").is_err());
    }

    #[test]
    fn decode_accepts_empty_array() {
        let decoded = decode_todos("[]").expect("empty array should decode");
        assert!(decoded.todos.is_empty());
        assert!(decoded.skipped.is_empty());
    }
}
