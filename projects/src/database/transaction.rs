//! Scoped units of work.
//!
//! [`Database::unit_of_work`] acquires a connection, starts a transaction,
//! runs one closure and either commits or rolls back. The connection is
//! closed on every exit path because it never leaves this function.

use std::fmt;

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

/// Whether a unit of work writes.
///
/// Writes take the database lock up front (`BEGIN IMMEDIATE`) so they fail
/// fast under contention instead of at commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Read-only work.
    Read,
    /// Work that modifies rows.
    Write,
}

impl Access {
    const fn behavior(self) -> TransactionBehavior {
        match self {
            Self::Read => TransactionBehavior::Deferred,
            Self::Write => TransactionBehavior::Immediate,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

impl Database {
    /// Runs `work` inside a transaction on a fresh connection.
    ///
    /// The transaction is committed exactly once when `work` returns `Ok`.
    /// When `work` returns `Err` the transaction is rolled back and that
    /// same error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened, the transaction
    /// cannot be started or committed, or `work` fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use projects::database::{Access, Database, DatabaseConfig};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/projects.db")).unwrap();
    /// let count: i64 = db
    ///     .unit_of_work(Access::Read, |tx| {
    ///         Ok(tx.query_row("SELECT COUNT(*) FROM project", [], |row| row.get(0))?)
    ///     })
    ///     .unwrap();
    /// ```
    pub fn unit_of_work<T, F>(&self, access: Access, work: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let mut conn = self.connect()?;
        let tx = conn.transaction_with_behavior(access.behavior())?;
        log::debug!("started {access} transaction");

        match work(&tx) {
            Ok(value) => {
                tx.commit()?;
                log::debug!("committed {access} transaction");
                Ok(value)
            }
            Err(err) => {
                log::debug!("rolling back {access} transaction: {err}");
                if let Err(rollback_err) = tx.rollback() {
                    log::warn!("rollback failed: {rollback_err}");
                }
                Err(err)
            }
        }
    }
}
