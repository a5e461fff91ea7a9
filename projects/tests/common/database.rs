//! Shared database test utilities.

use projects::database::{Database, DatabaseConfig};
use projects::{ProjectRepository, ProjectService};

/// Creates a temporary test database that outlives the test.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Repository over a fresh test database.
#[allow(dead_code)]
pub fn create_test_repository() -> ProjectRepository {
    ProjectRepository::new(create_test_database())
}

/// Service over a fresh test database.
#[allow(dead_code)]
pub fn create_test_service() -> ProjectService<ProjectRepository> {
    ProjectService::new(create_test_repository())
}

/// Counts the rows of `table`.
#[allow(dead_code)]
pub fn count_rows(db: &Database, table: &str) -> i64 {
    let conn = db.connect().unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
