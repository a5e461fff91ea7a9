//! Library exports for projects-cli.
//!
//! The entry point is a thin wrapper over [`run`]; the CLI structure is also
//! exported for the build script that generates the man page.

pub mod cli;
pub mod error;
pub mod input;
pub mod menu;
pub mod utils;

use std::io;

use projects::{init_logger, ProjectRepository, ProjectService};

pub use cli::Cli;
pub use error::CliError;
pub use menu::ProjectsApp;
pub use utils::GlobalOptions;

/// Loads configuration, opens the database and runs the menu on stdin and
/// stdout.
pub fn run(global: &GlobalOptions) -> Result<(), CliError> {
    let config = utils::load_configuration(global)?;

    init_logger(global.verbose, global.quiet, config.log_mode).install();

    let db = utils::open_database(global, &config)?;
    let service = ProjectService::new(ProjectRepository::new(db));

    let stdin = io::stdin();
    let stdout = io::stdout();
    ProjectsApp::new(stdin.lock(), stdout.lock(), service).run()
}
