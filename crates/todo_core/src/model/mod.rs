//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical task record rendered and persisted by core.
//! - Provide immutable collection snapshots for the service layer.
//!
//! # Invariants
//! - Every todo is identified by a `TodoId` unique within its collection.
//! - Titles are non-empty after trimming.

pub mod todo;
pub mod todo_list;
