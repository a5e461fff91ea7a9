//! Main entry point for the projects console.
//!
//! Parses the global options and hands over to the numbered menu, which
//! runs until a blank line or end of input.

use clap::Parser;
use projects_cli::{run, Cli, GlobalOptions};

fn main() {
    let cli = Cli::parse();
    let global = GlobalOptions::from(cli);

    match run(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
