//! Todo domain model.
//!
//! # Responsibility
//! - Define the record shared by the collection, the store and the view.
//! - Generate monotonic ids and display timestamps for new todos.
//!
//! # Invariants
//! - `id` and `title` never change after creation.
//! - `title` is non-empty after trimming.
//! - `completed` is the only mutable field and only flips via `toggled()`.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Integer identifier derived from the creation timestamp (epoch millis).
pub type TodoId = i64;

/// Display format for `created_at`, e.g. `Monday, Oct 19, 03:04 PM`.
pub const CREATED_AT_FORMAT: &str = "%A, %b %-d, %I:%M %p";

/// One task record.
///
/// Field names are serialized in the persisted payload shape
/// (`id`, `title`, `createdAt`, `completed`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    /// Display-only; never used for ordering.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub completed: bool,
}

/// Validation errors for todo invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    EmptyTitle,
    DuplicateId(TodoId),
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "todo title cannot be empty"),
            Self::DuplicateId(id) => write!(f, "duplicate todo id: {id}"),
        }
    }
}

impl Error for TodoValidationError {}

impl Todo {
    /// Builds an open todo from already generated identity fields.
    ///
    /// # Errors
    /// - Returns `EmptyTitle` when `title` is blank after trimming.
    pub fn new(
        id: TodoId,
        title: impl AsRef<str>,
        created_at: impl Into<String>,
    ) -> Result<Self, TodoValidationError> {
        let title = normalize_title(title.as_ref()).ok_or(TodoValidationError::EmptyTitle)?;
        Ok(Self {
            id,
            title,
            created_at: created_at.into(),
            completed: false,
        })
    }

    /// Returns a copy with `completed` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Checks single-record invariants.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Trims a candidate title, returning `None` for blank input.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Formats a timestamp with [`CREATED_AT_FORMAT`].
pub fn format_created_at<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(CREATED_AT_FORMAT).to_string()
}

/// Hands out strictly increasing ids seeded from wall-clock milliseconds.
///
/// Two todos created within the same millisecond would collide on a plain
/// timestamp; the generator bumps to `last + 1` instead. Once `last` reaches
/// `TodoId::MAX` no further ids exist and `next_id` returns `None`.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: TodoId,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts above every id already present in `existing`.
    pub fn seeded_from<'a>(existing: impl IntoIterator<Item = &'a Todo>) -> Self {
        let last = existing.into_iter().map(|todo| todo.id).max().unwrap_or(0);
        Self { last }
    }

    /// Returns the next id for a todo created at `now_ms`.
    pub fn next_id(&mut self, now_ms: i64) -> Option<TodoId> {
        let id = if now_ms > self.last {
            now_ms
        } else {
            self.last.checked_add(1)?
        };
        self.last = id;
        Some(id)
    }

    /// Generates id and display timestamp from the local clock.
    pub fn stamp_now(&mut self) -> Option<(TodoId, String)> {
        let now = Local::now();
        let id = self.next_id(now.timestamp_millis())?;
        Some((id, format_created_at(&now)))
    }
}

#[cfg(test)]
mod tests {
    use super::{format_created_at, normalize_title, IdGenerator, Todo, TodoValidationError};
    use chrono::{TimeZone, Utc};

    #[test]
    fn normalize_title_trims_and_rejects_blank() {
        assert_eq!(normalize_title("  Buy milk \n").as_deref(), Some("Buy milk"));
        assert_eq!(normalize_title("   "), None);
        assert_eq!(normalize_title(""), None);
    }

    #[test]
    fn new_rejects_blank_title() {
        assert_eq!(
            Todo::new(1, " \t", "now").expect_err("blank title"),
            TodoValidationError::EmptyTitle
        );
    }

    #[test]
    fn id_generator_bumps_within_same_millisecond() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(1_000), Some(1_000));
        assert_eq!(ids.next_id(1_000), Some(1_001));
        assert_eq!(ids.next_id(999), Some(1_002));
        assert_eq!(ids.next_id(5_000), Some(5_000));
    }

    #[test]
    fn id_generator_stops_at_max_id() {
        let last = Todo::new(i64::MAX, "last", "now").expect("valid title");
        let mut ids = IdGenerator::seeded_from([&last]);
        assert_eq!(ids.next_id(1_000), None);
        assert_eq!(ids.next_id(i64::MAX), None);
        assert!(ids.stamp_now().is_none());

        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(i64::MAX - 1), Some(i64::MAX - 1));
        assert_eq!(ids.next_id(0), Some(i64::MAX));
        assert_eq!(ids.next_id(0), None);
    }

    #[test]
    fn created_at_uses_weekday_month_day_and_12h_clock() {
        let at = Utc
            .with_ymd_and_hms(2024, 10, 7, 15, 4, 0)
            .single()
            .expect("unambiguous utc time");
        assert_eq!(format_created_at(&at), "Monday, Oct 7, 03:04 PM");
    }
}
