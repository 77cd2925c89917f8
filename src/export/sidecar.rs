//! Sidecar JSON rendering
//!
//! Metadata sidecars carry the document's fields in query order with the
//! associated notes appended under a `Notes` key; audit sidecars are the
//! audit rows as-is. Both are pretty-printed, with decimals and dates
//! rendered as strings.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::executor::RowMap;

use super::errors::ExportResult;

/// One document's metadata: the row fields plus its notes
struct MetadataDocument<'a> {
    row: &'a RowMap,
    notes: &'a [RowMap],
}

impl Serialize for MetadataDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.row.len() + 1))?;
        for (field, value) in self.row.iter() {
            map.serialize_entry(field, value)?;
        }
        map.serialize_entry("Notes", self.notes)?;
        map.end()
    }
}

/// Render the metadata sidecar for one document
///
/// The document is wrapped in a single-element array, the shape existing
/// downstream tooling consumes.
pub fn metadata_json(row: &RowMap, notes: &[RowMap]) -> ExportResult<Vec<u8>> {
    let documents = [MetadataDocument { row, notes }];
    Ok(serde_json::to_vec_pretty(&documents)?)
}

/// Render the audit-trail sidecar
pub fn audit_json(rows: &[RowMap]) -> ExportResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(rows)?)
}
