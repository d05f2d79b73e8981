//! Table storage for the revenue query
//!
//! Holds the six input relations in memory and moves data in and out of
//! pipe-delimited files.
//!
//! # Design Principles
//!
//! - Rows are string-to-string mappings, untyped at rest
//! - Tables keep source order
//! - Nothing is validated on load beyond the presence of a header line
//! - The store is immutable once query execution begins

mod errors;
mod reader;
mod row;
mod writer;

pub use errors::{StorageError, StorageResult};
pub use reader::{TableReader, DELIMITER, TABLE_FILES};
pub use row::{Row, Table, TableStore};
pub use writer::{ResultWriter, RESULT_HEADER};
