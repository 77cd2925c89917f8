//! Database error types

use thiserror::Error;

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;

/// Errors from connecting to or querying the source database
///
/// Query failures carry the rendered SQL so a schema-descriptor mismatch
/// can be diagnosed from the log alone.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Failed to connect to '{server}': {source}")]
    Connect {
        server: String,
        #[source]
        source: tiberius::error::Error,
    },

    #[error("Network error reaching '{server}': {source}")]
    Network {
        server: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Query failed: {source}; query was: {query}")]
    Query {
        query: String,
        #[source]
        source: tiberius::error::Error,
    },

    #[error("Could not convert column value: {0}")]
    Conversion(String),
}
