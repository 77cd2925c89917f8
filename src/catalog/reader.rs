//! Schema descriptor reader
//!
//! Reads the index-field descriptors for one archive from the
//! `INDEXDEFINITIE` meta-table. An archive without custom index fields
//! yields an empty list, not an error.

use crate::executor::{Cell, Database, ResultSet};

use super::descriptor::IndexFieldDescriptor;
use super::errors::{CatalogError, CatalogResult};

/// Render the descriptor query for one archive
///
/// Fails fast on a non-positive archive id instead of sending a
/// malformed query to the database.
pub fn index_fields_query(archive_id: i32) -> CatalogResult<String> {
    if archive_id <= 0 {
        return Err(CatalogError::InvalidArchiveId(archive_id));
    }

    Ok(format!(
        "SELECT [WAARDENKOLOMNAAM], REPLACE([NAAM], ' ', '_') AS [NAAM], [WAARDENTABELNAAM] \
         FROM X10DBASE.dbo.[INDEXDEFINITIE] \
         WHERE [DOCUMENTARCHIEFID] = {}",
        archive_id
    ))
}

/// Turn descriptor rows into descriptors, preserving row order
///
/// Columns are read positionally (source column, display alias, source
/// table); rows with missing values are dropped.
pub fn descriptors_from(result: &ResultSet) -> Vec<IndexFieldDescriptor> {
    result
        .rows
        .iter()
        .filter_map(|row| match (row.first(), row.get(1), row.get(2)) {
            (Some(Cell::Text(column)), Some(Cell::Text(alias)), Some(Cell::Text(table))) => Some(
                IndexFieldDescriptor::new(column.as_str(), alias.as_str(), table.as_str()),
            ),
            _ => None,
        })
        .collect()
}

/// Fetch the index-field descriptors for `archive_id`
pub async fn list_index_fields(
    db: &mut Database,
    archive_id: i32,
) -> CatalogResult<Vec<IndexFieldDescriptor>> {
    let sql = index_fields_query(archive_id)?;
    let result = db.query(&sql).await?;
    Ok(descriptors_from(&result))
}
