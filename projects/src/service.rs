//! Project service.
//!
//! A thin layer over a [`ProjectStore`] that turns absent results into
//! [`Error::NotFound`] and checks that a project exists before attaching
//! anything to it.

use crate::entity::{Category, Material, Project, Step};
use crate::error::{Error, Result};
use crate::repository::ProjectStore;

/// Validating front end for a [`ProjectStore`].
///
/// # Examples
///
/// ```no_run
/// use projects::database::{Database, DatabaseConfig};
/// use projects::{Project, ProjectRepository, ProjectService};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/projects.db")).unwrap();
/// let service = ProjectService::new(ProjectRepository::new(db));
///
/// let saved = service.add_project(Project::new("Build deck")).unwrap();
/// let loaded = service.fetch_project_by_id(saved.id.unwrap()).unwrap();
/// assert_eq!(loaded.name, "Build deck");
/// ```
#[derive(Debug, Clone)]
pub struct ProjectService<S> {
    store: S,
}

impl<S: ProjectStore> ProjectService<S> {
    /// Creates a service over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Saves a new project.
    ///
    /// # Errors
    ///
    /// Propagates storage errors.
    pub fn add_project(&self, project: Project) -> Result<Project> {
        self.store.insert(project)
    }

    /// Lists every project by name, without materials, steps or categories.
    ///
    /// # Errors
    ///
    /// Propagates storage errors.
    pub fn fetch_all_projects(&self) -> Result<Vec<Project>> {
        self.store.fetch_all()
    }

    /// Loads a project with everything attached to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no project has `project_id`.
    pub fn fetch_project_by_id(&self, project_id: i64) -> Result<Project> {
        self.store
            .fetch_by_id(project_id)?
            .ok_or_else(|| Error::project_not_found(project_id))
    }

    /// Overwrites a project's name, hours, difficulty and notes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `project` has no identifier and
    /// [`Error::NotFound`] if no row was updated.
    pub fn modify_project_details(&self, project: &Project) -> Result<()> {
        let project_id = project.id.ok_or_else(|| Error::Validation {
            field: "project_id".into(),
            message: "project has no identifier".into(),
        })?;

        if self.store.update(project)? {
            Ok(())
        } else {
            Err(Error::project_not_found(project_id))
        }
    }

    /// Deletes a project along with its materials, steps and links.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no row was deleted.
    pub fn delete_project(&self, project_id: i64) -> Result<()> {
        if self.store.delete(project_id)? {
            Ok(())
        } else {
            Err(Error::project_not_found(project_id))
        }
    }

    /// Adds a material to an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the project does not exist.
    pub fn add_material(&self, project_id: i64, material: Material) -> Result<Material> {
        self.ensure_project(project_id)?;
        self.store.add_material(project_id, material)
    }

    /// Appends a step to an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the project does not exist and
    /// [`Error::Validation`] if `text` is blank.
    pub fn add_step(&self, project_id: i64, text: &str) -> Result<Step> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Validation {
                field: "step_text".into(),
                message: "must not be empty".into(),
            });
        }
        self.ensure_project(project_id)?;
        self.store.add_step(project_id, text)
    }

    /// Returns the category called `name`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `name` is blank.
    pub fn add_category(&self, name: &str) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation {
                field: "category_name".into(),
                message: "must not be empty".into(),
            });
        }
        self.store.add_category(name)
    }

    /// Links an existing category to an existing project.
    ///
    /// Returns `false` if the two were already linked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the project does not exist.
    pub fn link_category(&self, project_id: i64, category_id: i64) -> Result<bool> {
        self.ensure_project(project_id)?;
        self.store.link_category(project_id, category_id)
    }

    /// Creates the category if needed and links it to the project.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the project does not exist and
    /// [`Error::Validation`] if `name` is blank.
    pub fn add_category_to_project(&self, project_id: i64, name: &str) -> Result<Category> {
        self.ensure_project(project_id)?;
        let category = self.add_category(name)?;
        if !self.store.link_category(project_id, category.id)? {
            log::info!("project {project_id} already has category '{}'", category.name);
        }
        Ok(category)
    }

    /// Lists every category by name.
    ///
    /// # Errors
    ///
    /// Propagates storage errors.
    pub fn fetch_all_categories(&self) -> Result<Vec<Category>> {
        self.store.fetch_categories()
    }

    fn ensure_project(&self, project_id: i64) -> Result<()> {
        self.fetch_project_by_id(project_id).map(|_| ())
    }
}
