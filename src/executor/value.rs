//! Typed cell values
//!
//! One database cell, decoupled from the driver so result handling and
//! serialization are testable without a live connection. Numeric/decimal
//! values keep their rendered digits and serialize as JSON strings, the
//! same way date and GUID values do; integers, floats and booleans stay
//! native JSON.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::ser::Serializer;
use serde::Serialize;
use uuid::Uuid;

/// A single value in a result row
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Decimal/numeric with digits and scale preserved as rendered text
    Decimal(String),
    Text(String),
    Guid(Uuid),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    Bytes(Vec<u8>),
}

impl Cell {
    /// Returns the integer value, if this cell holds one
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text value, if this cell holds one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the datetime value, if this cell holds one
    pub fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Cell::DateTime(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

/// Renders the cell as a plain scalar, used for folder and file names
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Bool(v) => write!(f, "{}", v),
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Decimal(v) => write!(f, "{}", v),
            Cell::Text(v) => write!(f, "{}", v),
            Cell::Guid(v) => write!(f, "{}", v),
            Cell::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Cell::DateTime(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S%.f")),
            Cell::Time(v) => write!(f, "{}", v.format("%H:%M:%S%.f")),
            Cell::Bytes(v) => {
                for byte in v {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Null => serializer.serialize_none(),
            Cell::Bool(v) => serializer.serialize_bool(*v),
            Cell::Int(v) => serializer.serialize_i64(*v),
            Cell::Float(v) => serializer.serialize_f64(*v),
            // Everything date-, decimal- or identifier-shaped becomes a
            // string, matching the sidecar format consumers expect.
            Cell::Decimal(_)
            | Cell::Text(_)
            | Cell::Guid(_)
            | Cell::Date(_)
            | Cell::DateTime(_)
            | Cell::Time(_)
            | Cell::Bytes(_) => serializer.collect_str(self),
        }
    }
}
