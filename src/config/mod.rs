//! Environment-based configuration
//!
//! Connection parameters, web credentials and the export root come from
//! environment variables. Every required value is validated non-empty
//! before a connection is opened; a missing value is fatal at startup.

mod errors;
mod settings;

pub use errors::{ConfigError, ConfigResult};
pub use settings::Config;
