//! Persistence for the todo collection.
//!
//! # Responsibility
//! - Abstract the key-value storage medium behind `KeyValueStorage`.
//! - Encode/decode the collection payload stored under one key.
//!
//! # Invariants
//! - The payload is overwritten wholesale on every save, never patched.
//! - Loading never fails the caller; bad payloads degrade to empty.

pub mod kv;
pub mod sqlite;
pub mod todo_store;
