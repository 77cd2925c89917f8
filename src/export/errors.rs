//! Export error types

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::executor::DbError;
use crate::planner::PlanError;
use crate::web::WebError;

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors during the export run
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Web(#[from] WebError),

    #[error("Could not write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize sidecar JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Document row in archive {archive_id} has no usable '{field}' column")]
    MissingColumn { archive_id: i32, field: String },

    #[error("Archive {0} has no key-field mapping")]
    UnknownArchive(i32),
}

impl ExportError {
    pub fn missing_column(archive_id: i32, field: impl Into<String>) -> Self {
        Self::MissingColumn {
            archive_id,
            field: field.into(),
        }
    }
}
