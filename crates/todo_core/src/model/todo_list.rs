//! Immutable todo collection snapshots.
//!
//! # Responsibility
//! - Hold the ordered collection as a shared, read-only value.
//! - Derive successor snapshots for add/toggle/remove.
//!
//! # Invariants
//! - A snapshot is never modified after construction.
//! - Order is newest first; `prepended` puts the new todo at index 0.

use crate::model::todo::{Todo, TodoId};
use std::ops::Deref;
use std::sync::Arc;

/// Shared snapshot of the whole collection.
///
/// Cloning is cheap; successor snapshots are separate allocations, so
/// [`TodoList::same_snapshot`] tells whether anything changed.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Arc<Vec<Todo>>,
}

impl TodoList {
    pub fn new(items: Vec<Todo>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    pub fn as_slice(&self) -> &[Todo] {
        self.items.as_slice()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|todo| todo.completed).count()
    }

    /// Returns whether both values share one snapshot allocation.
    pub fn same_snapshot(&self, other: &TodoList) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Successor with `todo` inserted at the front.
    pub fn prepended(&self, todo: Todo) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(todo);
        items.extend(self.items.iter().cloned());
        Self::new(items)
    }

    /// Successor with the matching todo's `completed` flipped.
    ///
    /// Returns `None` when no todo has `id`.
    pub fn toggled(&self, id: TodoId) -> Option<Self> {
        self.get(id)?;
        let items = self
            .items
            .iter()
            .map(|todo| if todo.id == id { todo.toggled() } else { todo.clone() })
            .collect();
        Some(Self::new(items))
    }

    /// Successor without the matching todo.
    ///
    /// Returns `None` when no todo has `id`.
    pub fn without(&self, id: TodoId) -> Option<Self> {
        self.get(id)?;
        let items = self
            .items
            .iter()
            .filter(|todo| todo.id != id)
            .cloned()
            .collect();
        Some(Self::new(items))
    }
}

impl Deref for TodoList {
    type Target = [Todo];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl PartialEq for TodoList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for TodoList {}

impl From<Vec<Todo>> for TodoList {
    fn from(value: Vec<Todo>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::TodoList;
    use crate::model::todo::Todo;

    fn todo(id: i64, title: &str) -> Todo {
        Todo::new(id, title, "Monday, Oct 7, 03:04 PM").expect("valid title")
    }

    #[test]
    fn successors_leave_original_snapshot_untouched() {
        let original = TodoList::new(vec![todo(2, "b"), todo(1, "a")]);

        let toggled = original.toggled(1).expect("id 1 present");
        let removed = original.without(2).expect("id 2 present");
        let added = original.prepended(todo(3, "c"));

        assert!(!original.get(1).expect("id 1 present").completed);
        assert_eq!(original.len(), 2);
        assert!(toggled.get(1).expect("id 1 present").completed);
        assert_eq!(removed.len(), 1);
        assert_eq!(added[0].id, 3);
        assert!(!added.same_snapshot(&original));
        assert!(original.same_snapshot(&original.clone()));
    }

    #[test]
    fn unknown_ids_produce_no_successor() {
        let list = TodoList::new(vec![todo(1, "a")]);
        assert!(list.toggled(9).is_none());
        assert!(list.without(9).is_none());
    }
}
