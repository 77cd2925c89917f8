//! Query synthesis
//!
//! Builds the per-archive document query at runtime from index-field
//! descriptors: a base sub-object/object table pair, the per-archive
//! document table, one derived join per distinct descriptor source table,
//! and fixed trailing joins for file-type and author-name resolution.
//! The output is a structured [`QueryPlan`] rendered to SQL text only at
//! execution time, so planning is testable without a live database.
//!
//! Fixed listings (archives, notes, audit trail) live in [`fixed`].

mod document;
mod errors;
pub mod fixed;
mod plan;

pub use document::{document_query, MULTI_VALUE_TABLE_PREFIX};
pub use errors::{PlanError, PlanResult};
pub use plan::{JoinSet, JoinSpec, QueryPlan, RenamedColumn};
