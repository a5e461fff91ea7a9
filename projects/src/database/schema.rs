//! Database schema definitions and SQL constants.
//!
//! Every entity table has an auto-generated integer primary key named
//! `<table>_id`. Materials, steps and category links reference their
//! project with `ON DELETE CASCADE`.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Project table name.
pub const PROJECT_TABLE: &str = "project";
/// Category table name.
pub const CATEGORY_TABLE: &str = "category";
/// Material table name.
pub const MATERIAL_TABLE: &str = "material";
/// Step table name.
pub const STEP_TABLE: &str = "step";
/// Project/category join table name.
pub const PROJECT_CATEGORY_TABLE: &str = "project_category";

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Hours are stored as TEXT so the two fractional digits survive exactly.
pub const CREATE_PROJECT_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS project (
        project_id INTEGER PRIMARY KEY AUTOINCREMENT,
        project_name TEXT NOT NULL,
        estimated_hours TEXT,
        actual_hours TEXT,
        difficulty INTEGER,
        notes TEXT
    )";

/// SQL statement to create the category table.
pub const CREATE_CATEGORY_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS category (
        category_id INTEGER PRIMARY KEY AUTOINCREMENT,
        category_name TEXT NOT NULL UNIQUE
    )";

/// SQL statement to create the material table.
pub const CREATE_MATERIAL_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS material (
        material_id INTEGER PRIMARY KEY AUTOINCREMENT,
        project_id INTEGER NOT NULL REFERENCES project (project_id) ON DELETE CASCADE,
        material_name TEXT NOT NULL,
        num_required INTEGER,
        cost TEXT
    )";

/// SQL statement to create the step table.
pub const CREATE_STEP_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS step (
        step_id INTEGER PRIMARY KEY AUTOINCREMENT,
        project_id INTEGER NOT NULL REFERENCES project (project_id) ON DELETE CASCADE,
        step_text TEXT NOT NULL,
        step_order INTEGER NOT NULL
    )";

/// SQL statement to create the project/category join table.
pub const CREATE_PROJECT_CATEGORY_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS project_category (
        project_id INTEGER NOT NULL REFERENCES project (project_id) ON DELETE CASCADE,
        category_id INTEGER NOT NULL REFERENCES category (category_id) ON DELETE CASCADE,
        PRIMARY KEY (project_id, category_id)
    )";

/// Indices on the foreign key columns.
pub const CREATE_INDICES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS idx_material_project ON material(project_id)",
    "CREATE INDEX IF NOT EXISTS idx_step_project ON step(project_id)",
    "CREATE INDEX IF NOT EXISTS idx_project_category_category ON project_category(category_id)",
];

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
