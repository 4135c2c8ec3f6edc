//! View-layer session: intent dispatch and view model derivation.
//!
//! # Responsibility
//! - Accept add/search/toggle/delete intents and forward them to the
//!   collection service.
//! - Derive the displayed list and progress from the single collection.
//! - Notify subscribers when the derived view changes.
//!
//! # Invariants
//! - The filtered list is always recomputed from the full collection; no
//!   second list is ever mutated.
//! - Deriving a view model from unchanged state yields an equal value.

use crate::model::todo::{Todo, TodoId};
use crate::model::todo_list::TodoList;
use crate::search::filter::filter_todos;
use crate::service::todo_service::TodoService;
use crate::store::kv::KeyValueStorage;
use crate::store::todo_store::{StoreError, TodoStore};
use crate::view::progress::ProgressGauge;
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AppResult<T> = Result<T, AppError>;

/// Failure surfaced while handling an intent.
#[derive(Debug)]
pub enum AppError {
    Store(StoreError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "failed to persist todos: {err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// User action coming from the rendering environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Search(String),
    Toggle(TodoId),
    Delete(TodoId),
}

/// What an intent did to the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    Added(Todo),
    /// Blank title; nothing created.
    Rejected,
    Toggled(TodoId),
    Deleted(TodoId),
    /// Toggle/delete named an id that is not in the collection.
    UnknownId(TodoId),
    Searched,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub gauge: ProgressGauge,
    pub search_term: String,
    /// Filtered rows, collection order.
    pub rows: Vec<Todo>,
    /// Size of the full collection, independent of the filter.
    pub total: usize,
}

impl ViewModel {
    pub fn derive(todos: &TodoList, search_term: &str) -> Self {
        Self {
            gauge: ProgressGauge::from_todos(todos),
            search_term: search_term.to_string(),
            rows: filter_todos(todos, search_term),
            total: todos.len(),
        }
    }

    pub fn is_filtered(&self) -> bool {
        !self.search_term.is_empty()
    }
}

/// Handle returned by [`TodoApp::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ViewModel)>;

/// One rendering session over a persisted collection.
pub struct TodoApp<S: KeyValueStorage> {
    service: TodoService<S>,
    search_term: String,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: KeyValueStorage> TodoApp<S> {
    /// Loads the stored collection; the initial view shows all of it.
    pub fn start(storage: S) -> Self {
        Self::with_service(TodoService::open(TodoStore::new(storage)))
    }

    pub fn with_service(service: TodoService<S>) -> Self {
        Self {
            service,
            search_term: String::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn todos(&self) -> &TodoList {
        self.service.todos()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn service(&self) -> &TodoService<S> {
        &self.service
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::derive(self.service.todos(), &self.search_term)
    }

    /// Registers `listener` to receive every changed view model.
    pub fn subscribe(&mut self, listener: impl FnMut(&ViewModel) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether a listener was registered under `id`.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Applies one intent and notifies subscribers if the view changed.
    ///
    /// # Errors
    /// - `AppError::Store` when persisting a mutation fails; the collection
    ///   keeps its previous state in that case.
    pub fn dispatch(&mut self, intent: Intent) -> AppResult<IntentOutcome> {
        let before = self.service.todos().clone();
        let term_before = self.search_term.clone();

        let outcome = match intent {
            Intent::Add(title) => match self.service.add(&title) {
                Ok(Some(todo)) => IntentOutcome::Added(todo),
                Ok(None) => IntentOutcome::Rejected,
                Err(err) => return Err(self.fail("add", err)),
            },
            Intent::Toggle(id) => match self.service.toggle_complete(id) {
                Ok(true) => IntentOutcome::Toggled(id),
                Ok(false) => IntentOutcome::UnknownId(id),
                Err(err) => return Err(self.fail("toggle", err)),
            },
            Intent::Delete(id) => match self.service.remove(id) {
                Ok(true) => IntentOutcome::Deleted(id),
                Ok(false) => IntentOutcome::UnknownId(id),
                Err(err) => return Err(self.fail("delete", err)),
            },
            Intent::Search(term) => {
                self.search_term = term;
                IntentOutcome::Searched
            }
        };

        let changed = !before.same_snapshot(self.service.todos()) || term_before != self.search_term;
        if changed {
            self.notify();
        }
        debug!("event=intent module=view status=ok changed={changed}");
        Ok(outcome)
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let view = self.view();
        for (_, listener) in &mut self.listeners {
            listener(&view);
        }
    }

    fn fail(&self, intent: &'static str, err: StoreError) -> AppError {
        error!(
            "event=intent module=view status=error intent={} error_code=store_save_failed error={}",
            intent, err
        );
        AppError::from(err)
    }
}
