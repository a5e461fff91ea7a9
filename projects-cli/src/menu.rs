//! The numbered menu loop.
//!
//! [`ProjectsApp`] reads a selection, runs one operation, reports any error
//! and goes round again until it reads a blank line or reaches end of input.

use std::fmt;
use std::io::{BufRead, Write};

use projects::{Material, Project, ProjectService, ProjectStore};

use crate::error::CliError;
use crate::input::{parse_number, Console};

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Create a project.
    AddProject,
    /// List every project.
    ListProjects,
    /// Make a project current.
    SelectProject,
    /// Edit the current project's details.
    UpdateProject,
    /// Delete a project.
    DeleteProject,
    /// Add a material to the current project.
    AddMaterial,
    /// Add a step to the current project.
    AddStep,
    /// Add a category to the current project.
    AddCategory,
}

impl Operation {
    /// Menu order.
    pub const ALL: [Self; 8] = [
        Self::AddProject,
        Self::ListProjects,
        Self::SelectProject,
        Self::UpdateProject,
        Self::DeleteProject,
        Self::AddMaterial,
        Self::AddStep,
        Self::AddCategory,
    ];

    /// Maps a typed selection onto an entry.
    pub fn from_selection(selection: i64) -> Option<Self> {
        let index = usize::try_from(selection).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|op| *op == self)
            .map_or(0, |index| index + 1)
    }

    fn needs_project(self) -> bool {
        matches!(
            self,
            Self::UpdateProject | Self::AddMaterial | Self::AddStep | Self::AddCategory
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AddProject => "Add a project",
            Self::ListProjects => "List projects",
            Self::SelectProject => "Select a project",
            Self::UpdateProject => "Update project details",
            Self::DeleteProject => "Delete a project",
            Self::AddMaterial => "Add a material to the current project",
            Self::AddStep => "Add a step to the current project",
            Self::AddCategory => "Add a category to the current project",
        };
        write!(f, "{}) {label}", self.number())
    }
}

/// The interactive console.
pub struct ProjectsApp<R, W, S> {
    console: Console<R, W>,
    service: ProjectService<S>,
    current: Option<Project>,
}

impl<R: BufRead, W: Write, S: ProjectStore> ProjectsApp<R, W, S> {
    /// Creates an app reading from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W, service: ProjectService<S>) -> Self {
        Self {
            console: Console::new(reader, writer),
            service,
            current: None,
        }
    }

    /// The currently selected project, if any.
    pub fn current_project(&self) -> Option<&Project> {
        self.current.as_ref()
    }

    /// Consumes the app, returning the writer.
    pub fn into_writer(self) -> W {
        self.console.into_writer()
    }

    /// Runs the menu until the user quits.
    ///
    /// Operation failures are printed and the loop continues; only a
    /// failure of the console itself ends it early.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            self.print_operations()?;

            let outcome = match self.read_selection() {
                Ok(None) => {
                    self.console.say("Exiting the menu.")?;
                    return Ok(());
                }
                Ok(Some(selection)) => match Operation::from_selection(selection) {
                    Some(operation) => self.perform(operation),
                    None => self
                        .console
                        .say(format!("\n{selection} is not a valid selection. Try again.")),
                },
                Err(e) => Err(e),
            };

            if let Err(e) = outcome {
                if !e.is_recoverable() {
                    return Err(e);
                }
                log::debug!("menu operation failed: {e:?}");
                self.console
                    .say(format!("\nError: {} Try again.", as_sentence(&e)))?;
            }
        }
    }

    fn print_operations(&mut self) -> Result<(), CliError> {
        self.console
            .say("\nThese are the available selections. Press the Enter key to quit:")?;
        for operation in Operation::ALL {
            self.console.say(format!("  {operation}"))?;
        }

        match &self.current {
            Some(project) => self
                .console
                .say(format!("\nYou are working with project:\n{project}")),
            None => self.console.say("\nYou are not working with a project."),
        }
    }

    fn read_selection(&mut self) -> Result<Option<i64>, CliError> {
        match self.console.prompt("Enter a menu selection")? {
            Some(answer) => parse_number(&answer, "selection"),
            None => Ok(None),
        }
    }

    fn perform(&mut self, operation: Operation) -> Result<(), CliError> {
        if operation.needs_project() && self.current.is_none() {
            return self.console.say("\nPlease select a project.");
        }

        match operation {
            Operation::AddProject => self.create_project(),
            Operation::ListProjects => self.list_projects(),
            Operation::SelectProject => self.select_project(),
            Operation::UpdateProject => self.update_project_details(),
            Operation::DeleteProject => self.delete_project(),
            Operation::AddMaterial => self.add_material(),
            Operation::AddStep => self.add_step(),
            Operation::AddCategory => self.add_category(),
        }
    }

    fn current_id(&self) -> Result<i64, CliError> {
        self.current
            .as_ref()
            .and_then(|project| project.id)
            .ok_or_else(|| CliError::InvalidInput("No project is selected.".to_string()))
    }

    fn reload_current(&mut self) -> Result<(), CliError> {
        let project_id = self.current_id()?;
        self.current = Some(self.service.fetch_project_by_id(project_id)?);
        Ok(())
    }

    fn create_project(&mut self) -> Result<(), CliError> {
        let name = self
            .console
            .prompt_required("Enter the project name", "project name")?;
        let estimated = self.console.prompt_decimal("Enter the estimated hours")?;
        let actual = self.console.prompt_decimal("Enter the actual hours")?;
        let difficulty = self
            .console
            .prompt_integer("Enter the project difficulty (1-5)")?;
        let notes = self.console.prompt("Enter the project notes")?;

        let project = Project::new(name)
            .with_estimated_hours(estimated)
            .with_actual_hours(actual)
            .with_difficulty(difficulty)
            .with_notes(notes);

        let saved = self.service.add_project(project)?;
        self.console
            .say(format!("You have successfully created project:\n{saved}"))
    }

    fn list_projects(&mut self) -> Result<(), CliError> {
        let projects = self.service.fetch_all_projects()?;

        self.console.say("\nProjects:")?;
        for project in &projects {
            let id = project.id.map_or_else(String::new, |id| id.to_string());
            self.console.say(format!("   {id}: {}", project.name))?;
        }
        Ok(())
    }

    fn select_project(&mut self) -> Result<(), CliError> {
        self.list_projects()?;
        let project_id = self
            .console
            .prompt_integer::<i64>("Enter a project ID to select a project")?;

        self.current = None;
        if let Some(project_id) = project_id {
            self.current = Some(self.service.fetch_project_by_id(project_id)?);
        }
        Ok(())
    }

    fn update_project_details(&mut self) -> Result<(), CliError> {
        let Some(current) = self.current.clone() else {
            return self.console.say("\nPlease select a project.");
        };

        let name = self
            .console
            .prompt(&format!("Enter the project name [{}]", current.name))?;
        let estimated = self.console.prompt_decimal(&format!(
            "Enter the estimated hours [{}]",
            show(current.estimated_hours.as_ref())
        ))?;
        let actual = self.console.prompt_decimal(&format!(
            "Enter the actual hours [{}]",
            show(current.actual_hours.as_ref())
        ))?;
        let difficulty = self.console.prompt_integer(&format!(
            "Enter the project difficulty (1-5) [{}]",
            show(current.difficulty.as_ref())
        ))?;
        let notes = self.console.prompt(&format!(
            "Enter the project notes [{}]",
            show(current.notes.as_ref())
        ))?;

        let mut updated = current.details();
        updated.name = name.unwrap_or(current.name);
        updated.estimated_hours = estimated.or(current.estimated_hours);
        updated.actual_hours = actual.or(current.actual_hours);
        updated.difficulty = difficulty.or(current.difficulty);
        updated.notes = notes.or(current.notes);

        self.service.modify_project_details(&updated)?;
        self.reload_current()
    }

    fn delete_project(&mut self) -> Result<(), CliError> {
        self.list_projects()?;
        let Some(project_id) = self
            .console
            .prompt_integer::<i64>("Enter the ID of the project to delete")?
        else {
            return Ok(());
        };

        self.service.delete_project(project_id)?;
        self.console
            .say(format!("Project {project_id} was deleted successfully."))?;

        if self.current.as_ref().and_then(|p| p.id) == Some(project_id) {
            self.current = None;
        }
        Ok(())
    }

    fn add_material(&mut self) -> Result<(), CliError> {
        let project_id = self.current_id()?;
        let name = self
            .console
            .prompt_required("Enter the material name", "material name")?;
        let num_required = self.console.prompt_integer("Enter the number required")?;
        let cost = self.console.prompt_decimal("Enter the cost")?;

        let material = self
            .service
            .add_material(project_id, Material::new(name, num_required, cost))?;
        log::info!("added material {:?} to project {project_id}", material.id);
        self.reload_current()
    }

    fn add_step(&mut self) -> Result<(), CliError> {
        let project_id = self.current_id()?;
        let text = self.console.prompt_required("Enter the step text", "step")?;

        self.service.add_step(project_id, &text)?;
        self.reload_current()
    }

    fn add_category(&mut self) -> Result<(), CliError> {
        let project_id = self.current_id()?;

        let categories = self.service.fetch_all_categories()?;
        if !categories.is_empty() {
            self.console.say("\nCategories:")?;
            for category in &categories {
                self.console.say(format!("   {}", category.name))?;
            }
        }

        let name = self
            .console
            .prompt_required("Enter a category name", "category name")?;
        self.service.add_category_to_project(project_id, &name)?;
        self.reload_current()
    }
}

fn show<T: fmt::Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "none".to_string(), ToString::to_string)
}

/// Error text terminated with a full stop, added only when missing.
fn as_sentence(error: &CliError) -> String {
    let message = error.to_string();
    if message.ends_with(['.', '!', '?']) {
        message
    } else {
        format!("{message}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projects::database::{Database, DatabaseConfig};
    use projects::ProjectRepository;
    use std::io::Cursor;

    fn service() -> ProjectService<ProjectRepository> {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("menu.db"))).unwrap();
        std::mem::forget(dir);
        ProjectService::new(ProjectRepository::new(db))
    }

    fn run_script(
        service: ProjectService<ProjectRepository>,
        script: &str,
    ) -> (String, Option<Project>) {
        let mut app = ProjectsApp::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            service,
        );
        app.run().unwrap();
        let current = app.current_project().cloned();
        (String::from_utf8(app.into_writer()).unwrap(), current)
    }

    #[test]
    fn test_operation_numbering() {
        assert_eq!(Operation::from_selection(1), Some(Operation::AddProject));
        assert_eq!(Operation::from_selection(8), Some(Operation::AddCategory));
        assert_eq!(Operation::from_selection(0), None);
        assert_eq!(Operation::from_selection(9), None);
        assert_eq!(Operation::from_selection(-3), None);
        assert_eq!(Operation::AddStep.to_string(), "7) Add a step to the current project");
    }

    #[test]
    fn test_blank_line_quits() {
        let (output, current) = run_script(service(), "\n");
        assert!(output.contains("1) Add a project"));
        assert!(output.contains("You are not working with a project."));
        assert!(output.ends_with("Exiting the menu.\n"));
        assert!(current.is_none());
    }

    #[test]
    fn test_end_of_input_quits() {
        let (output, _) = run_script(service(), "");
        assert!(output.contains("Exiting the menu."));
    }

    #[test]
    fn test_error_messages_end_in_one_full_stop() {
        let parse = CliError::Library(projects::Error::Parse {
            input: "abc".to_string(),
            expected: "selection".to_string(),
        });
        assert_eq!(as_sentence(&parse), "abc is not a valid selection.");

        let required = CliError::InvalidInput("A step is required.".to_string());
        assert_eq!(as_sentence(&required), "A step is required.");
    }

    #[test]
    fn test_invalid_selection() {
        let (output, _) = run_script(service(), "42\nabc\n\n");
        assert!(output.contains("42 is not a valid selection. Try again."));
        assert!(output.contains("Error: abc is not a valid selection. Try again."));
    }

    #[test]
    fn test_add_project() {
        let (output, _) = run_script(service(), "1\nBuild deck\n10\n\n3\n\n\n");
        assert!(output.contains("You have successfully created project:"));
        assert!(output.contains("name=Build deck"));
        assert!(output.contains("estimated hours=10.00"));
        assert!(output.contains("actual hours=(none)"));
    }

    #[test]
    fn test_add_project_bad_decimal() {
        let (output, _) = run_script(service(), "1\nShed\nten\n\n");
        assert!(output.contains("Error: ten is not a valid decimal number. Try again."));
    }

    #[test]
    fn test_add_project_requires_name() {
        let service = service();
        let (output, _) = run_script(service.clone(), "1\n\n\n");
        assert!(output.contains("Error: A project name is required. Try again."));
        assert!(service.fetch_all_projects().unwrap().is_empty());
    }

    #[test]
    fn test_operations_need_selection() {
        let (output, _) = run_script(service(), "4\n6\n7\n8\n\n");
        assert_eq!(output.matches("Please select a project.").count(), 4);
    }

    #[test]
    fn test_select_and_populate_project() {
        let service = service();
        let id = service
            .add_project(Project::new("Garden bed"))
            .unwrap()
            .id
            .unwrap();

        let script = format!(
            "3\n{id}\n6\nCedar boards\n6\n12.5\n7\nCut boards\n7\nAssemble\n8\nGarden\n\n"
        );
        let (output, current) = run_script(service, &script);

        assert!(output.contains("You are working with project:"));
        let current = current.unwrap();
        assert_eq!(current.materials.len(), 1);
        assert_eq!(current.materials[0].cost.unwrap().to_string(), "12.50");
        assert_eq!(current.steps.len(), 2);
        assert_eq!(current.steps[1].order, 2);
        assert_eq!(current.categories[0].name, "Garden");
    }

    #[test]
    fn test_select_missing_project() {
        let (output, current) = run_script(service(), "3\n99\n\n");
        assert!(output.contains("Error: project with ID=99 does not exist. Try again."));
        assert!(current.is_none());
    }

    #[test]
    fn test_update_keeps_blank_fields() {
        let service = service();
        let id = service
            .add_project(
                Project::new("Bench")
                    .with_estimated_hours(Some("4".parse().unwrap()))
                    .with_notes(Some("pine".to_string())),
            )
            .unwrap()
            .id
            .unwrap();

        let script = format!("3\n{id}\n4\n\n\n5.5\n2\n\n\n");
        let (output, current) = run_script(service, &script);

        assert!(output.contains("Enter the project name [Bench]: "));
        let current = current.unwrap();
        assert_eq!(current.name, "Bench");
        assert_eq!(current.estimated_hours.unwrap().to_string(), "4.00");
        assert_eq!(current.actual_hours.unwrap().to_string(), "5.50");
        assert_eq!(current.difficulty, Some(2));
        assert_eq!(current.notes.as_deref(), Some("pine"));
    }

    #[test]
    fn test_delete_current_clears_selection() {
        let service = service();
        let id = service
            .add_project(Project::new("Old fence"))
            .unwrap()
            .id
            .unwrap();

        let script = format!("3\n{id}\n5\n{id}\n\n");
        let (output, current) = run_script(service.clone(), &script);

        assert!(output.contains(&format!("Project {id} was deleted successfully.")));
        assert!(current.is_none());
        assert!(service.fetch_all_projects().unwrap().is_empty());
    }

    #[test]
    fn test_delete_missing_project() {
        let (output, _) = run_script(service(), "5\n7\n\n");
        assert!(output.contains("Error: project with ID=7 does not exist. Try again."));
    }
}
