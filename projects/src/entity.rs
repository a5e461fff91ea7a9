//! Entity types mapped one-to-one onto storage rows.
//!
//! Each entity decodes itself from a result row by column name through
//! [`FromRow`]. Column names follow the `<table>_<field>` convention of the
//! schema, so `project_name` feeds [`Project::name`] and so on.

use std::fmt;

use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::database::FromRow;
use crate::Decimal;

/// A project with its scalar fields and, when fully loaded, the materials,
/// steps and categories attached to it.
///
/// Only a fetch by identifier populates the three collections; listings
/// leave them empty.
///
/// # Examples
///
/// ```
/// use projects::Project;
///
/// let project = Project::new("Build deck")
///     .with_estimated_hours(Some("10".parse().unwrap()))
///     .with_difficulty(Some(3));
///
/// assert!(project.id.is_none());
/// assert_eq!(project.estimated_hours.unwrap().to_string(), "10.00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Identifier assigned by storage on insert.
    pub id: Option<i64>,
    /// Project name.
    pub name: String,
    /// Estimated hours.
    pub estimated_hours: Option<Decimal>,
    /// Actual hours.
    pub actual_hours: Option<Decimal>,
    /// Difficulty, expected 1-5 but not enforced.
    pub difficulty: Option<i32>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Materials owned by the project.
    #[serde(default)]
    pub materials: Vec<Material>,
    /// Steps owned by the project, in step order.
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Categories linked to the project.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Project {
    /// Creates an unsaved project with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the estimated hours.
    #[must_use]
    pub fn with_estimated_hours(mut self, hours: Option<Decimal>) -> Self {
        self.estimated_hours = hours;
        self
    }

    /// Sets the actual hours.
    #[must_use]
    pub fn with_actual_hours(mut self, hours: Option<Decimal>) -> Self {
        self.actual_hours = hours;
        self
    }

    /// Sets the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Option<i32>) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Returns a copy carrying only the scalar fields.
    #[must_use]
    pub fn details(&self) -> Self {
        Self {
            materials: Vec::new(),
            steps: Vec::new(),
            categories: Vec::new(),
            ..self.clone()
        }
    }
}

impl FromRow for Project {
    const ENTITY: &'static str = "project";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("project_id")?),
            name: row.get("project_name")?,
            estimated_hours: row.get("estimated_hours")?,
            actual_hours: row.get("actual_hours")?,
            difficulty: row.get("difficulty")?,
            notes: row.get("notes")?,
            materials: Vec::new(),
            steps: Vec::new(),
            categories: Vec::new(),
        })
    }
}

fn or_none<T: fmt::Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "(none)".to_string(), ToString::to_string)
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   ID={}", or_none(self.id.as_ref()))?;
        writeln!(f, "   name={}", self.name)?;
        writeln!(f, "   estimated hours={}", or_none(self.estimated_hours.as_ref()))?;
        writeln!(f, "   actual hours={}", or_none(self.actual_hours.as_ref()))?;
        writeln!(f, "   difficulty={}", or_none(self.difficulty.as_ref()))?;
        write!(f, "   notes={}", or_none(self.notes.as_ref()))?;

        if !self.materials.is_empty() {
            write!(f, "\n   Materials:")?;
            for material in &self.materials {
                write!(f, "\n      {material}")?;
            }
        }
        if !self.steps.is_empty() {
            write!(f, "\n   Steps:")?;
            for step in &self.steps {
                write!(f, "\n      {step}")?;
            }
        }
        if !self.categories.is_empty() {
            write!(f, "\n   Categories:")?;
            for category in &self.categories {
                write!(f, "\n      {category}")?;
            }
        }
        Ok(())
    }
}

/// A category shared between any number of projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier assigned by storage.
    pub id: i64,
    /// Unique category name.
    pub name: String,
}

impl FromRow for Category {
    const ENTITY: &'static str = "category";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("category_id")?,
            name: row.get("category_name")?,
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID={}, name={}", self.id, self.name)
    }
}

/// A material owned by a single project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Identifier assigned by storage on insert.
    pub id: Option<i64>,
    /// Owning project.
    pub project_id: Option<i64>,
    /// Material name.
    pub name: String,
    /// How many are needed.
    pub num_required: Option<i32>,
    /// Unit cost.
    pub cost: Option<Decimal>,
}

impl Material {
    /// Creates an unsaved material.
    #[must_use]
    pub fn new(name: impl Into<String>, num_required: Option<i32>, cost: Option<Decimal>) -> Self {
        Self {
            id: None,
            project_id: None,
            name: name.into(),
            num_required,
            cost,
        }
    }
}

impl FromRow for Material {
    const ENTITY: &'static str = "material";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get("material_id")?),
            project_id: Some(row.get("project_id")?),
            name: row.get("material_name")?,
            num_required: row.get("num_required")?,
            cost: row.get("cost")?,
        })
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID={}, name={}, quantity={}, cost={}",
            or_none(self.id.as_ref()),
            self.name,
            or_none(self.num_required.as_ref()),
            or_none(self.cost.as_ref())
        )
    }
}

/// An ordered step owned by a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Identifier assigned by storage.
    pub id: i64,
    /// Owning project.
    pub project_id: i64,
    /// What to do.
    pub text: String,
    /// One-based position within the project.
    pub order: i32,
}

impl FromRow for Step {
    const ENTITY: &'static str = "step";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("step_id")?,
            project_id: row.get("project_id")?,
            text: row.get("step_text")?,
            order: row.get("step_order")?,
        })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.order, self.text)
    }
}
