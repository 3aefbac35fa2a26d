//! Summarize tabular sales records into per-category totals and row counts.

pub mod aggregator;
pub mod csv;
pub mod domain;
pub mod error;
pub mod json;

pub use crate::aggregator::{process, process_or_empty, process_reader, run, Summary};
pub use crate::domain::summary::CategorySummary;
pub use crate::error::{Error, ErrorKind, Result};
