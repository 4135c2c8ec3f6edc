//! Case-insensitive title filter.
//!
//! # Invariants
//! - Pure: the input slice is never modified.
//! - Relative order of matches equals collection order.
//! - Only the empty term disables filtering; whitespace is a literal term.

use crate::model::todo::Todo;

/// Returns todos whose title contains `term`, ignoring case.
pub fn filter_todos(todos: &[Todo], term: &str) -> Vec<Todo> {
    if term.is_empty() {
        return todos.to_vec();
    }
    let needle = term.to_lowercase();
    todos
        .iter()
        .filter(|todo| title_matches(&todo.title, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn title_matches(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}
