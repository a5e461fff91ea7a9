//! Project repository.
//!
//! [`ProjectStore`] is the seam the service layer depends on;
//! [`ProjectRepository`] implements it over `SQLite`. Every operation runs
//! in its own unit of work, and no two operations share a transaction.

use rusqlite::{Connection, Statement};

use crate::database::schema::{CATEGORY_TABLE, MATERIAL_TABLE, PROJECT_TABLE, STEP_TABLE};
use crate::database::{
    bind_parameters, last_insert_id, query_all, query_optional, Access, Database, FromRow,
    SqlParam,
};
use crate::entity::{Category, Material, Project, Step};
use crate::error::{Error, Result};

// Projects
const INSERT_PROJECT: &str = r"
    INSERT INTO project
    (project_name, estimated_hours, actual_hours, difficulty, notes)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_ALL_PROJECTS: &str = "SELECT * FROM project ORDER BY project_name";

const SELECT_PROJECT_BY_ID: &str = "SELECT * FROM project WHERE project_id = ?";

const UPDATE_PROJECT: &str = r"
    UPDATE project SET
    project_name = ?,
    estimated_hours = ?,
    actual_hours = ?,
    difficulty = ?,
    notes = ?
    WHERE project_id = ?
";

const DELETE_PROJECT: &str = "DELETE FROM project WHERE project_id = ?";

// Owned and linked rows
const SELECT_PROJECT_MATERIALS: &str =
    "SELECT * FROM material WHERE project_id = ? ORDER BY material_id";

const SELECT_PROJECT_STEPS: &str =
    "SELECT * FROM step WHERE project_id = ? ORDER BY step_order, step_id";

const SELECT_PROJECT_CATEGORIES: &str = r"
    SELECT c.*
    FROM category c
    JOIN project_category pc USING (category_id)
    WHERE pc.project_id = ?
    ORDER BY c.category_name
";

const INSERT_MATERIAL: &str = r"
    INSERT INTO material (project_id, material_name, num_required, cost)
    VALUES (?, ?, ?, ?)
";

const SELECT_MATERIAL_BY_ID: &str = "SELECT * FROM material WHERE material_id = ?";

const INSERT_STEP: &str = r"
    INSERT INTO step (project_id, step_text, step_order)
    SELECT ?1, ?2, COALESCE(MAX(step_order), 0) + 1 FROM step WHERE project_id = ?1
";

const SELECT_STEP_BY_ID: &str = "SELECT * FROM step WHERE step_id = ?";

const INSERT_CATEGORY: &str = "INSERT OR IGNORE INTO category (category_name) VALUES (?)";

const SELECT_CATEGORY_BY_NAME: &str = "SELECT * FROM category WHERE category_name = ?";

const SELECT_ALL_CATEGORIES: &str = "SELECT * FROM category ORDER BY category_name";

const LINK_CATEGORY: &str =
    "INSERT OR IGNORE INTO project_category (project_id, category_id) VALUES (?, ?)";

/// Storage operations for projects and their related rows.
///
/// Absence is reported as `None` or `false`; deciding whether that is an
/// error is left to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectStore {
    /// Inserts `project` and returns it with its new identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if binding or executing the insert fails.
    fn insert(&self, project: Project) -> Result<Project>;

    /// Returns every project ordered by name, without related rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row extraction fails.
    fn fetch_all(&self) -> Result<Vec<Project>>;

    /// Returns the project with its materials, steps and categories.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the queries or row extraction fails.
    fn fetch_by_id(&self, project_id: i64) -> Result<Option<Project>>;

    /// Overwrites the five mutable fields; `true` if exactly one row changed.
    ///
    /// # Errors
    ///
    /// Returns an error if `project` has no identifier or the update fails.
    fn update(&self, project: &Project) -> Result<bool>;

    /// Deletes a project; `true` if exactly one row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete(&self, project_id: i64) -> Result<bool>;

    /// Adds a material to a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the project
    /// does not exist.
    fn add_material(&self, project_id: i64, material: Material) -> Result<Material>;

    /// Appends a step after the project's current last step.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the project
    /// does not exist.
    fn add_step(&self, project_id: i64, text: &str) -> Result<Step>;

    /// Returns the category called `name`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert or lookup fails.
    fn add_category(&self, name: &str) -> Result<Category>;

    /// Links a category to a project; `false` if they were already linked.
    ///
    /// # Errors
    ///
    /// Returns an error if either side does not exist or the insert fails.
    fn link_category(&self, project_id: i64, category_id: i64) -> Result<bool>;

    /// Returns every category ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or row extraction fails.
    fn fetch_categories(&self) -> Result<Vec<Category>>;
}

/// `SQLite`-backed [`ProjectStore`].
///
/// # Examples
///
/// ```no_run
/// use projects::database::{Database, DatabaseConfig};
/// use projects::{Project, ProjectRepository, ProjectStore};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/projects.db")).unwrap();
/// let repo = ProjectRepository::new(db);
///
/// let saved = repo.insert(Project::new("Build deck")).unwrap();
/// assert!(saved.id.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    db: Database,
}

impl ProjectRepository {
    /// Creates a repository over `db`.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Returns the underlying database handle.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }
}

fn prepare_bound<'conn>(
    conn: &'conn Connection,
    sql: &str,
    params: &[SqlParam<'_>],
) -> Result<Statement<'conn>> {
    let mut stmt = conn.prepare(sql)?;
    bind_parameters(&mut stmt, params)?;
    Ok(stmt)
}

fn fetch_children<T: FromRow>(conn: &Connection, sql: &str, project_id: i64) -> Result<Vec<T>> {
    let mut stmt = prepare_bound(conn, sql, &[SqlParam::Integer(Some(project_id))])?;
    query_all(&mut stmt)
}

fn fetch_inserted<T: FromRow>(conn: &Connection, sql: &str, table: &str) -> Result<T> {
    let id = last_insert_id(conn, table)?;
    let mut stmt = prepare_bound(conn, sql, &[SqlParam::Integer(Some(id))])?;
    query_optional(&mut stmt)?.ok_or_else(|| Error::MissingInsertId {
        table: table.to_string(),
    })
}

impl ProjectStore for ProjectRepository {
    fn insert(&self, mut project: Project) -> Result<Project> {
        let project_id = self.db.unit_of_work(Access::Write, |tx| {
            let mut stmt = prepare_bound(
                tx,
                INSERT_PROJECT,
                &[
                    SqlParam::Text(Some(&project.name)),
                    SqlParam::Decimal(project.estimated_hours),
                    SqlParam::Decimal(project.actual_hours),
                    SqlParam::Integer(project.difficulty.map(i64::from)),
                    SqlParam::Text(project.notes.as_deref()),
                ],
            )?;
            stmt.raw_execute()?;
            last_insert_id(tx, PROJECT_TABLE)
        })?;

        log::info!("inserted project {project_id} ({})", project.name);
        project.id = Some(project_id);
        Ok(project)
    }

    fn fetch_all(&self) -> Result<Vec<Project>> {
        self.db.unit_of_work(Access::Read, |tx| {
            let mut stmt = prepare_bound(tx, SELECT_ALL_PROJECTS, &[])?;
            query_all(&mut stmt)
        })
    }

    fn fetch_by_id(&self, project_id: i64) -> Result<Option<Project>> {
        self.db.unit_of_work(Access::Read, |tx| {
            let mut stmt = prepare_bound(
                tx,
                SELECT_PROJECT_BY_ID,
                &[SqlParam::Integer(Some(project_id))],
            )?;
            let Some(mut project) = query_optional::<Project>(&mut stmt)? else {
                log::debug!("project {project_id} not found");
                return Ok(None);
            };

            project.materials = fetch_children(tx, SELECT_PROJECT_MATERIALS, project_id)?;
            project.steps = fetch_children(tx, SELECT_PROJECT_STEPS, project_id)?;
            project.categories = fetch_children(tx, SELECT_PROJECT_CATEGORIES, project_id)?;

            Ok(Some(project))
        })
    }

    fn update(&self, project: &Project) -> Result<bool> {
        let project_id = project.id.ok_or_else(|| Error::Validation {
            field: "project_id".into(),
            message: "project has no identifier".into(),
        })?;

        self.db.unit_of_work(Access::Write, |tx| {
            let mut stmt = prepare_bound(
                tx,
                UPDATE_PROJECT,
                &[
                    SqlParam::Text(Some(&project.name)),
                    SqlParam::Decimal(project.estimated_hours),
                    SqlParam::Decimal(project.actual_hours),
                    SqlParam::Integer(project.difficulty.map(i64::from)),
                    SqlParam::Text(project.notes.as_deref()),
                    SqlParam::Integer(Some(project_id)),
                ],
            )?;
            Ok(stmt.raw_execute()? == 1)
        })
    }

    fn delete(&self, project_id: i64) -> Result<bool> {
        self.db.unit_of_work(Access::Write, |tx| {
            let mut stmt =
                prepare_bound(tx, DELETE_PROJECT, &[SqlParam::Integer(Some(project_id))])?;
            Ok(stmt.raw_execute()? == 1)
        })
    }

    fn add_material(&self, project_id: i64, material: Material) -> Result<Material> {
        self.db.unit_of_work(Access::Write, |tx| {
            let mut stmt = prepare_bound(
                tx,
                INSERT_MATERIAL,
                &[
                    SqlParam::Integer(Some(project_id)),
                    SqlParam::Text(Some(&material.name)),
                    SqlParam::Integer(material.num_required.map(i64::from)),
                    SqlParam::Decimal(material.cost),
                ],
            )?;
            stmt.raw_execute()?;
            fetch_inserted(tx, SELECT_MATERIAL_BY_ID, MATERIAL_TABLE)
        })
    }

    fn add_step(&self, project_id: i64, text: &str) -> Result<Step> {
        self.db.unit_of_work(Access::Write, |tx| {
            let mut stmt = prepare_bound(
                tx,
                INSERT_STEP,
                &[SqlParam::Integer(Some(project_id)), SqlParam::Text(Some(text))],
            )?;
            stmt.raw_execute()?;
            fetch_inserted(tx, SELECT_STEP_BY_ID, STEP_TABLE)
        })
    }

    fn add_category(&self, name: &str) -> Result<Category> {
        self.db.unit_of_work(Access::Write, |tx| {
            let mut insert = prepare_bound(tx, INSERT_CATEGORY, &[SqlParam::Text(Some(name))])?;
            if insert.raw_execute()? == 0 {
                log::debug!("category '{name}' already exists");
            }

            let mut select =
                prepare_bound(tx, SELECT_CATEGORY_BY_NAME, &[SqlParam::Text(Some(name))])?;
            query_optional(&mut select)?.ok_or_else(|| Error::MissingInsertId {
                table: CATEGORY_TABLE.to_string(),
            })
        })
    }

    fn link_category(&self, project_id: i64, category_id: i64) -> Result<bool> {
        self.db.unit_of_work(Access::Write, |tx| {
            let mut stmt = prepare_bound(
                tx,
                LINK_CATEGORY,
                &[
                    SqlParam::Integer(Some(project_id)),
                    SqlParam::Integer(Some(category_id)),
                ],
            )?;
            Ok(stmt.raw_execute()? == 1)
        })
    }

    fn fetch_categories(&self) -> Result<Vec<Category>> {
        self.db.unit_of_work(Access::Read, |tx| {
            let mut stmt = prepare_bound(tx, SELECT_ALL_CATEGORIES, &[])?;
            query_all(&mut stmt)
        })
    }
}
