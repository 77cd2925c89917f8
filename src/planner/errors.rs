//! Planner error types

use thiserror::Error;

/// Result type for query synthesis
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors synthesizing a document query
#[derive(Debug, Clone, Error)]
pub enum PlanError {
    /// Non-positive archive id; synthesis aborts before any SQL is
    /// rendered.
    #[error("Archive id {0} is not a valid archive identifier")]
    InvalidArchiveId(i32),
}
