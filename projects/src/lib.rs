#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # projects
//!
//! A library for cataloguing DIY projects with their materials, steps and
//! categories.
//!
//! Storage is a single `SQLite` file. Each repository call runs in its own
//! transaction on its own connection; the service layer on top turns absent
//! rows into [`Error::NotFound`].
//!
//! ## Core Types
//!
//! - [`Project`], [`Material`], [`Step`] and [`Category`]: stored entities
//! - [`Decimal`]: two-place fixed-point numbers for hours and costs
//! - [`ProjectStore`], [`ProjectRepository`] and [`ProjectService`]: data access
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use projects::database::{Database, DatabaseConfig};
//! use projects::{Project, ProjectRepository, ProjectService};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/projects.db")).unwrap();
//! let service = ProjectService::new(ProjectRepository::new(db));
//!
//! let project = Project::new("Build deck")
//!     .with_estimated_hours(Some("10".parse().unwrap()))
//!     .with_difficulty(Some(3));
//! let saved = service.add_project(project).unwrap();
//! println!("{saved}");
//! ```

pub mod config;
pub mod database;
pub mod decimal;
pub mod entity;
pub mod error;
pub mod logging;
pub mod repository;
pub mod service;

// Re-export key types at crate root for convenience
pub use config::Config;
pub use database::{Database, DatabaseConfig};
pub use decimal::Decimal;
pub use entity::{Category, Material, Project, Step};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use repository::{ProjectRepository, ProjectStore};
pub use service::ProjectService;
