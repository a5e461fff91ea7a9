//! Statement helpers: positional binding, row extraction and generated keys.

use rusqlite::{Connection, OptionalExtension, Row, Statement};

use crate::error::{Error, Result};
use crate::Decimal;

/// A typed value for a positional placeholder.
///
/// `None` payloads bind SQL `NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlParam<'a> {
    /// Text column.
    Text(Option<&'a str>),
    /// Fixed-point decimal column, stored as text.
    Decimal(Option<Decimal>),
    /// Integer column.
    Integer(Option<i64>),
}

/// Binds one value into the one-based placeholder `position`.
///
/// # Errors
///
/// Returns [`Error::Bind`] if `position` is outside the statement's
/// placeholders or `SQLite` rejects the value.
pub fn bind_parameter(
    stmt: &mut Statement<'_>,
    position: usize,
    param: SqlParam<'_>,
) -> Result<()> {
    let count = stmt.parameter_count();
    if position == 0 || position > count {
        return Err(Error::Bind {
            position,
            message: format!("statement has {count} placeholder(s)"),
        });
    }

    let bound = match param {
        SqlParam::Text(value) => stmt.raw_bind_parameter(position, value),
        SqlParam::Decimal(value) => stmt.raw_bind_parameter(position, value),
        SqlParam::Integer(value) => stmt.raw_bind_parameter(position, value),
    };
    bound.map_err(|e| Error::Bind {
        position,
        message: e.to_string(),
    })
}

/// Binds `params` into placeholders `1..=params.len()`.
///
/// # Errors
///
/// Returns [`Error::Bind`] if the statement has a different number of
/// placeholders or any value is rejected.
pub fn bind_parameters(stmt: &mut Statement<'_>, params: &[SqlParam<'_>]) -> Result<()> {
    let count = stmt.parameter_count();
    if params.len() != count {
        return Err(Error::Bind {
            position: params.len().min(count) + 1,
            message: format!("statement has {count} placeholder(s), got {}", params.len()),
        });
    }
    for (index, param) in params.iter().enumerate() {
        bind_parameter(stmt, index + 1, *param)?;
    }
    Ok(())
}

/// An entity that can be decoded from a result row by column name.
pub trait FromRow: Sized {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    /// Decodes the current row.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when a column is missing or has an
    /// incompatible type.
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Decodes the current row into `T`.
///
/// # Errors
///
/// Returns [`Error::Extract`] naming the entity when a required column is
/// missing or holds an incompatible value.
pub fn extract<T: FromRow>(row: &Row<'_>) -> Result<T> {
    T::from_row(row).map_err(|e| Error::Extract {
        entity: T::ENTITY.to_string(),
        message: e.to_string(),
    })
}

/// Runs an already-bound query and extracts every row.
///
/// # Errors
///
/// Returns a database error if stepping fails or [`Error::Extract`] if a
/// row cannot be decoded.
pub fn query_all<T: FromRow>(stmt: &mut Statement<'_>) -> Result<Vec<T>> {
    let mut rows = stmt.raw_query();
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(extract(row)?);
    }
    Ok(items)
}

/// Runs an already-bound query and extracts the first row, if any.
///
/// # Errors
///
/// See [`query_all`].
pub fn query_optional<T: FromRow>(stmt: &mut Statement<'_>) -> Result<Option<T>> {
    let mut rows = stmt.raw_query();
    match rows.next()? {
        Some(row) => Ok(Some(extract(row)?)),
        None => Ok(None),
    }
}

/// Returns the `<table>_id` generated by the most recent insert on `conn`.
///
/// `table` must be one of the schema's table constants; it is interpolated
/// into the lookup query.
///
/// # Errors
///
/// Returns [`Error::MissingInsertId`] if the connection has not inserted a
/// row into `table`.
pub fn last_insert_id(conn: &Connection, table: &str) -> Result<i64> {
    let rowid = conn.last_insert_rowid();
    if rowid == 0 {
        return Err(Error::MissingInsertId {
            table: table.to_string(),
        });
    }

    let sql = format!("SELECT {table}_id FROM {table} WHERE rowid = ?");
    conn.query_row(&sql, [rowid], |row| row.get(0))
        .optional()?
        .ok_or_else(|| Error::MissingInsertId {
            table: table.to_string(),
        })
}
