//! Observability for the export run
//!
//! Structured JSON logging:
//! - One log line = one event
//! - Deterministic key ordering
//! - Synchronous, no buffering
//! - Optional log-file sink next to stdout/stderr

mod logger;

pub use logger::{Logger, Severity};
