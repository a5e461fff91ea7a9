//! Database layer for persistent storage of projects.
//!
//! This module provides a SQLite-based storage layer: connection
//! management, schema versioning, statement helpers and scoped
//! transactions. Repositories build on these pieces.
//!
//! # Examples
//!
//! ```no_run
//! use projects::database::{Access, Database, DatabaseConfig};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/projects.db")).unwrap();
//! let names: Vec<String> = db
//!     .unit_of_work(Access::Read, |tx| {
//!         let mut stmt = tx.prepare("SELECT project_name FROM project")?;
//!         let names = stmt
//!             .query_map([], |row| row.get(0))?
//!             .collect::<rusqlite::Result<Vec<String>>>()?;
//!         Ok(names)
//!     })
//!     .unwrap();
//! ```

mod config;
mod connection;
pub mod migrations;
pub mod schema;
mod statement;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DATA_DIR_ENV,
};
pub use connection::Database;
pub use statement::{
    bind_parameter, bind_parameters, extract, last_insert_id, query_all, query_optional, FromRow,
    SqlParam,
};
pub use transaction::Access;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
