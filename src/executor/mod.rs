//! Query execution against the source database
//!
//! The materializer executes a rendered query and eagerly collects the
//! full result into a [`ResultSet`]: ordered field names plus typed rows.
//! Result sizes per archive/document query are bounded, so there is no
//! streaming or pagination. Database errors propagate unmodified with the
//! offending query attached; the synthesized SQL is trusted, not
//! re-validated here.

mod database;
mod errors;
mod result;
mod value;

pub use database::Database;
pub use errors::{DbError, DbResult};
pub use result::{ResultSet, RowMap};
pub use value::Cell;
