//! Runtime configuration for a todo session.
//!
//! # Responsibility
//! - Describe which storage backend to open and where.
//! - Validate settings before any storage or logging side effect.
//!
//! # Invariants
//! - `log_dir`, when set, is absolute (the logger rejects relative paths).

use crate::logging::default_log_level;
use crate::store::kv::{FileStorage, KeyValueStorage, MemoryStorage, StorageResult};
use crate::store::sqlite::SqliteStorage;
use log::info;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_DATA_DIR_NAME: &str = "todo-data";
const SQLITE_FILE_NAME: &str = "todos.sqlite3";

/// Storage medium selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    Memory,
    File,
    #[default]
    Sqlite,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::File => "file",
            Self::Sqlite => "sqlite",
        }
    }
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            "sqlite" | "db" => Ok(Self::Sqlite),
            other => Err(format!(
                "unsupported storage backend `{other}`; expected memory|file|sqlite"
            )),
        }
    }
}

/// Settings for one application session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: StorageBackend,
    /// Data directory. SQLite uses `<data_dir>/todos.sqlite3`; the file
    /// backend stores `<data_dir>/todos.json`.
    pub data_dir: PathBuf,
    pub log_level: String,
    /// File logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Checks settings without touching the filesystem.
    pub fn validate(&self) -> Result<(), String> {
        if self.data_dir.as_os_str().is_empty() {
            return Err("data_dir cannot be empty".to_string());
        }
        if let Some(log_dir) = &self.log_dir {
            if !log_dir.is_absolute() {
                return Err(format!(
                    "log_dir must be an absolute path, got `{}`",
                    log_dir.display()
                ));
            }
        }
        Ok(())
    }

    pub fn sqlite_path(&self) -> PathBuf {
        self.data_dir.join(SQLITE_FILE_NAME)
    }

    /// Opens the configured storage medium.
    ///
    /// # Side effects
    /// - Creates `data_dir` for the file and SQLite backends.
    /// - Creates the `kv_entries` table on a fresh SQLite file.
    pub fn open_storage(&self) -> StorageResult<Box<dyn KeyValueStorage>> {
        let storage: Box<dyn KeyValueStorage> = match self.backend {
            StorageBackend::Memory => Box::new(MemoryStorage::new()),
            StorageBackend::File => Box::new(FileStorage::open(&self.data_dir)?),
            StorageBackend::Sqlite => {
                std::fs::create_dir_all(&self.data_dir)?;
                Box::new(SqliteStorage::open(self.sqlite_path())?)
            }
        };
        info!(
            "event=storage_open module=config status=ok backend={} data_dir={}",
            self.backend,
            self.data_dir.display()
        );
        Ok(storage)
    }
}

fn default_data_dir() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_DATA_DIR_NAME)
}
