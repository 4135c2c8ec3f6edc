//! Title search over the in-memory collection.
//!
//! # Responsibility
//! - Derive the displayed subsequence of todos for a search term.

pub mod filter;
