//! xtendis-export - bulk export of documents and metadata from an Xtendis DMS
//!
//! The interesting part lives in [`planner`]: archive document queries
//! are synthesized at runtime from the index-field descriptors the
//! [`catalog`] reads out of the source database itself. Everything else
//! is sequential I/O: execute ([`executor`]), download ([`web`]), write
//! ([`export`]).

pub mod catalog;
pub mod cli;
pub mod config;
pub mod executor;
pub mod export;
pub mod observability;
pub mod planner;
pub mod web;
