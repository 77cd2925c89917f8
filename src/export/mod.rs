//! Export orchestration
//!
//! Walks archives, documents and pages strictly sequentially, one query
//! at a time, and writes the output tree: one image per page, one
//! metadata JSON per document (fields plus notes), and for the financial
//! archive one audit-trail JSON per document. A failed document is
//! logged and skipped; the run continues.

mod errors;
mod layout;
mod orchestrator;
mod sidecar;
mod sink;

pub use errors::{ExportError, ExportResult};
pub use layout::{document_location, DocumentLocation};
pub use orchestrator::{run_export, Exporter, ExportSummary};
pub use sidecar::{audit_json, metadata_json};
pub use sink::ExportSink;
