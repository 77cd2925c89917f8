//! Output tree naming
//!
//! Every document lands under
//! `archief {NN} - {name}/{year}/{month}/{key}`, relative to the export
//! root. The key is the archive's key-field value read from the row
//! mapping; year and month come from the indexing date.

use std::path::PathBuf;

use chrono::Datelike;

use crate::catalog::key_field;
use crate::executor::{Cell, RowMap};

use super::errors::{ExportError, ExportResult};

/// Indexing timestamp column, present in every document query
const INDEXED_AT_COLUMN: &str = "INDEXEERDATUM";

/// Where a document's files go, relative to the export root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocation {
    /// Folder the document's files are written into
    pub folder: PathBuf,
    /// File stem shared by the page images and sidecars
    pub file_stem: String,
}

/// Resolve the output location for one document row
pub fn document_location(
    archive_id: i32,
    archive_name: &str,
    row: &RowMap,
) -> ExportResult<DocumentLocation> {
    let field = key_field(archive_id).ok_or(ExportError::UnknownArchive(archive_id))?;

    let key = match row.get(field) {
        Some(cell) if !cell.is_null() => cell.to_string(),
        _ => return Err(ExportError::missing_column(archive_id, field)),
    };

    let indexed_at = row
        .get(INDEXED_AT_COLUMN)
        .and_then(Cell::as_datetime)
        .ok_or_else(|| ExportError::missing_column(archive_id, INDEXED_AT_COLUMN))?;

    let folder = PathBuf::from(format!("archief {:02} - {}", archive_id, archive_name))
        .join(indexed_at.year().to_string())
        .join(indexed_at.month().to_string())
        .join(&key);

    Ok(DocumentLocation {
        folder,
        file_stem: key,
    })
}
