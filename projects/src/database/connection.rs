//! Connection provider.
//!
//! [`Database`] holds only configuration. Each call to
//! [`Database::connect`] opens a fresh `SQLite` connection with the PRAGMA
//! settings every unit of work relies on; the connection is closed when it
//! is dropped.

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::config::DatabaseConfig;

/// Handle to a configured project database.
///
/// # Examples
///
/// ```no_run
/// use projects::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/projects.db");
/// let db = Database::open(config).unwrap();
/// let conn = db.connect().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    config: DatabaseConfig,
}

impl Database {
    /// Opens the database described by `config` and makes sure its schema
    /// is initialized and compatible.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open one connection to verify or initialize the schema
    /// - Close that connection again
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file cannot be opened
    /// - The parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - Schema initialization or verification fails
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Self { config };
        let conn = db.connect()?;
        super::migrations::check_schema_compatibility(&conn)?;
        log::debug!("opened database at {}", db.config.path.display());

        Ok(db)
    }

    /// Opens a new connection.
    ///
    /// Foreign keys are enforced on every connection so that dependent
    /// materials, steps and category links follow their project.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or a PRAGMA fails.
    pub fn connect(&self) -> Result<Connection> {
        let config = &self.config;

        let flags = if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // PRAGMA journal_mode returns a result, so we use query_row
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {}",
            config.busy_timeout.as_millis()
        ))?;

        Ok(conn)
    }

    /// Returns the configuration this database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}
