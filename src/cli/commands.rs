//! CLI command implementations
//!
//! Commands load configuration from the environment, build the tokio
//! runtime, and block on the sequential export pipeline.

use std::path::Path;

use crate::catalog;
use crate::config::Config;
use crate::executor::Database;
use crate::export::run_export;
use crate::observability::Logger;
use crate::planner::{self, fixed};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Log file written in the working directory, one file per run
const LOG_FILE: &str = "xtendis_export.log";

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Export { archive } => export(archive),
        Command::Archives { archive } => archives(archive),
        Command::Plan { archive } => plan(archive),
    }
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().map_err(CliError::Runtime)
}

/// Run the bulk export
pub fn export(archive: Option<i32>) -> CliResult<()> {
    let config = Config::from_env()?;
    Logger::init_file(Path::new(LOG_FILE)).map_err(CliError::LogFile)?;
    Logger::info("EXPORT_STARTED", &[]);

    let rt = runtime()?;
    let summary = rt.block_on(run_export(config, archive))?;

    Logger::info(
        "EXPORT_FINISHED",
        &[
            ("archives", &summary.archives.to_string()),
            ("documents", &summary.documents.to_string()),
            ("pages", &summary.pages.to_string()),
            ("skipped", &summary.skipped.to_string()),
        ],
    );

    Ok(())
}

/// Print the archive listing to stdout
pub fn archives(archive: Option<i32>) -> CliResult<()> {
    let config = Config::from_env()?;
    let rt = runtime()?;

    rt.block_on(async {
        let mut db = Database::connect(&config).await?;
        let result = db.query(&fixed::archives_query(archive)).await?;

        for row in result.to_mappings() {
            let id = row
                .get("ARCHIEFID")
                .map(|cell| cell.to_string())
                .unwrap_or_default();
            let name = row
                .get("NAAM")
                .map(|cell| cell.to_string())
                .unwrap_or_default();
            println!("{:>4}  {}", id, name);
        }

        Ok(())
    })
}

/// Synthesize and print the document query for one archive
pub fn plan(archive: i32) -> CliResult<()> {
    let config = Config::from_env()?;
    let rt = runtime()?;

    rt.block_on(async {
        let mut db = Database::connect(&config).await?;
        let descriptors = catalog::list_index_fields(&mut db, archive).await?;
        let plan = planner::document_query(archive, &descriptors)?;

        println!("{}", plan.to_sql());
        Ok(())
    })
}
