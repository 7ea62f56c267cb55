// src/types/mod.rs
//! Domain types: the identifier, the entry record and the export format.

use thiserror::Error;

mod entry;
mod format;
mod ids;

pub use entry::*;
pub use format::*;
pub use ids::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid published file ID: {0}")]
    InvalidId(String),

    #[error("Entry index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown export format: {0} (expected 'xml' or 'csv')")]
    UnknownFormat(String),
}
