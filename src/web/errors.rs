//! Web-service error types

use thiserror::Error;

/// Result type for web-service operations
pub type WebResult<T> = Result<T, WebError>;

/// Errors talking to the document web service
#[derive(Debug, Error)]
pub enum WebError {
    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Login failed; fatal to the whole run, no downloads are possible
    #[error("Authentication against '{url}' failed: {source}")]
    Authentication {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx page fetch; the file is skipped, the export continues
    #[error("Download from '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },
}
