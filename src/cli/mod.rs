//! Command-line interface
//!
//! Commands:
//! - export: run the bulk export (optionally one archive)
//! - archives: list the archives the source database knows
//! - plan: print the synthesized document query for one archive

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{archives, export, plan, run};
pub use errors::{CliError, CliResult};
