//! Core logic for the todo list: model, persistence, collection, view.
//! Front-ends render what this crate derives and never touch storage directly.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;
pub mod view;

pub use config::{AppConfig, StorageBackend};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{IdGenerator, Todo, TodoId, TodoValidationError};
pub use model::todo_list::TodoList;
pub use search::filter::filter_todos;
pub use service::todo_service::TodoService;
pub use store::kv::{FileStorage, KeyValueStorage, MemoryStorage, StorageError, StorageResult};
pub use store::sqlite::SqliteStorage;
pub use store::todo_store::{StoreError, StoreResult, TodoStore, TODOS_KEY};
pub use view::app::{AppError, AppResult, Intent, IntentOutcome, SubscriptionId, TodoApp, ViewModel};
pub use view::progress::{progress_percent, ProgressGauge};
pub use view::render::render_text;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
