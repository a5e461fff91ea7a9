//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the projects library.

pub mod database;

use projects::{Decimal, Project};

/// Parses a decimal literal.
#[allow(dead_code)]
pub fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

/// Builder for creating test projects with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::ProjectFixture;
/// let project = ProjectFixture::new("Build deck")
///     .estimated("10")
///     .difficulty(3)
///     .build();
/// ```
#[allow(dead_code)]
pub struct ProjectFixture {
    name: String,
    estimated_hours: Option<Decimal>,
    actual_hours: Option<Decimal>,
    difficulty: Option<i32>,
    notes: Option<String>,
}

#[allow(dead_code)]
impl ProjectFixture {
    /// Creates a fixture with only a name set.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            estimated_hours: None,
            actual_hours: None,
            difficulty: None,
            notes: None,
        }
    }

    pub fn estimated(mut self, hours: &str) -> Self {
        self.estimated_hours = Some(dec(hours));
        self
    }

    pub fn actual(mut self, hours: &str) -> Self {
        self.actual_hours = Some(dec(hours));
        self
    }

    pub fn difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn build(self) -> Project {
        Project::new(self.name)
            .with_estimated_hours(self.estimated_hours)
            .with_actual_hours(self.actual_hours)
            .with_difficulty(self.difficulty)
            .with_notes(self.notes)
    }
}
