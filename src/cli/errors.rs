//! CLI error types

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::executor::DbError;
use crate::export::ExportError;
use crate::planner::PlanError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced at the command level; all terminate the process
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Could not open log file: {0}")]
    LogFile(#[source] std::io::Error),

    #[error("Could not start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
