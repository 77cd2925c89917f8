//! Catalog error types

use thiserror::Error;

use crate::executor::DbError;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors reading archive metadata
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The archive id must be a positive integer identifying an existing
    /// archive; anything else would reach the database as a malformed
    /// query, so the operation aborts up front.
    #[error("Archive id {0} is not a valid archive identifier")]
    InvalidArchiveId(i32),

    #[error(transparent)]
    Db(#[from] DbError),
}
