//! Todo collection use-case service.
//!
//! # Responsibility
//! - Own the authoritative `TodoList` snapshot for one session.
//! - Apply add/toggle/remove and persist the full result on every change.
//!
//! # Invariants
//! - The current snapshot is replaced only after `save` succeeds.
//! - Blank titles and unknown ids are silent no-ops without a write.
//! - Ids stay unique: the generator is seeded above every loaded id.
//! - Id exhaustion refuses the add instead of wrapping or panicking.

use crate::model::todo::{normalize_title, IdGenerator, Todo, TodoId};
use crate::model::todo_list::TodoList;
use crate::store::kv::KeyValueStorage;
use crate::store::todo_store::{StoreResult, TodoStore};
use log::{debug, info, warn};

/// Session-owned todo collection mirrored to a `TodoStore`.
pub struct TodoService<S: KeyValueStorage> {
    store: TodoStore<S>,
    todos: TodoList,
    ids: IdGenerator,
}

impl<S: KeyValueStorage> TodoService<S> {
    /// Creates a service and loads whatever the store currently holds.
    pub fn open(store: TodoStore<S>) -> Self {
        let todos = TodoList::new(store.load());
        let ids = IdGenerator::seeded_from(todos.iter());
        info!(
            "event=collection_open module=service status=ok count={}",
            todos.len()
        );
        Self { store, todos, ids }
    }

    /// Current snapshot. Clone it to keep a stable view across mutations.
    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn store(&self) -> &TodoStore<S> {
        &self.store
    }

    /// Adds a todo with a trimmed `title` at the front of the collection.
    ///
    /// # Contract
    /// - Returns `Ok(None)` and writes nothing when `title` is blank or no
    ///   id above the newest one is left.
    /// - Otherwise generates `id`/`created_at`, saves, and returns the todo.
    pub fn add(&mut self, title: &str) -> StoreResult<Option<Todo>> {
        let Some(title) = normalize_title(title) else {
            debug!("event=todo_add module=service status=skipped reason=blank_title");
            return Ok(None);
        };

        let Some((id, created_at)) = self.ids.stamp_now() else {
            warn!("event=todo_add module=service status=skipped error_code=id_space_exhausted");
            return Ok(None);
        };
        let todo = Todo {
            id,
            title,
            created_at,
            completed: false,
        };
        self.commit(self.todos.prepended(todo.clone()))?;
        info!("event=todo_add module=service status=ok id={}", todo.id);
        Ok(Some(todo))
    }

    /// Flips `completed` on the todo with `id`.
    ///
    /// Returns `Ok(false)` without writing when `id` is unknown.
    pub fn toggle_complete(&mut self, id: TodoId) -> StoreResult<bool> {
        let Some(next) = self.todos.toggled(id) else {
            debug!("event=todo_toggle module=service status=skipped reason=unknown_id id={id}");
            return Ok(false);
        };
        self.commit(next)?;
        info!("event=todo_toggle module=service status=ok id={id}");
        Ok(true)
    }

    /// Removes the todo with `id`.
    ///
    /// Returns `Ok(false)` without writing when `id` is unknown.
    pub fn remove(&mut self, id: TodoId) -> StoreResult<bool> {
        let Some(next) = self.todos.without(id) else {
            debug!("event=todo_remove module=service status=skipped reason=unknown_id id={id}");
            return Ok(false);
        };
        self.commit(next)?;
        info!("event=todo_remove module=service status=ok id={id}");
        Ok(true)
    }

    fn commit(&mut self, next: TodoList) -> StoreResult<()> {
        self.store.save(next.as_slice())?;
        self.todos = next;
        Ok(())
    }
}
