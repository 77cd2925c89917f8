//! Document query synthesis
//!
//! The join-planning algorithm: seed the join collection with the
//! archive's document table, then walk the descriptors appending renamed
//! columns and, per distinct source table, one derived join. Two physical
//! naming conventions exist for the index-value tables; the `MVDOC`
//! family joins on the document id, everything else on the object id.
//! This prefix dispatch is a closed rule, not configuration.

use crate::catalog::IndexFieldDescriptor;

use super::errors::{PlanError, PlanResult};
use super::plan::{JoinSet, JoinSpec, QueryPlan, RenamedColumn};

/// Table-name prefix of the multi-value document family
pub const MULTI_VALUE_TABLE_PREFIX: &str = "MVDOC";

/// Alias the per-archive document table is joined under
const DOCUMENT_ALIAS: &str = "d";
/// Alias of the object half of the base table pair
const OBJECT_ALIAS: &str = "o";

/// Synthesize the document query plan for one archive
///
/// Descriptor order determines the order of the renamed SELECT columns;
/// duplicate source tables collapse into a single join. Building the same
/// plan twice from the same descriptors yields identical SQL.
pub fn document_query(
    archive_id: i32,
    descriptors: &[IndexFieldDescriptor],
) -> PlanResult<QueryPlan> {
    if archive_id <= 0 {
        return Err(PlanError::InvalidArchiveId(archive_id));
    }

    let mut joins = JoinSet::new();
    joins.insert(JoinSpec::new(
        format!("DOCUMENT_{}", archive_id),
        DOCUMENT_ALIAS,
        "OBJECTID",
        "OBJ_ID",
        OBJECT_ALIAS,
    ));

    let mut renamed_columns = Vec::with_capacity(descriptors.len());
    for (index, descriptor) in descriptors.iter().enumerate() {
        renamed_columns.push(RenamedColumn {
            source: descriptor.source_column.clone(),
            alias: descriptor.display_alias.clone(),
        });

        let (local_key, foreign_key) =
            if descriptor.source_table.starts_with(MULTI_VALUE_TABLE_PREFIX) {
                ("DOCUMENTID", "DOCUMENTID")
            } else {
                ("OBJECTID", "OBJ_ID")
            };

        // Alias indexes follow descriptor positions, so they stay stable
        // when a duplicate table is skipped.
        joins.insert(JoinSpec::new(
            descriptor.source_table.clone(),
            format!("x{}", index),
            local_key,
            foreign_key,
            DOCUMENT_ALIAS,
        ));
    }

    Ok(QueryPlan {
        archive_id,
        renamed_columns,
        joins: joins.into_vec(),
    })
}
