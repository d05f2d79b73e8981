//! Pipe-delimited table reader
//!
//! File layout:
//! - first line: column names separated by `|`
//! - every following line: one row, values separated by `|`
//!
//! One trailing `|` (as written by dbgen) is dropped from every line, then
//! values are zipped with the header positionally. Cells beyond the header
//! are dropped, short lines leave the remaining columns absent, and blank
//! lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::errors::{StorageError, StorageResult};
use super::row::{Row, Table, TableStore};

/// Column separator
pub const DELIMITER: char = '|';

/// File names of the six input tables, in load order.
pub const TABLE_FILES: [&str; 6] = [
    "customer.tbl",
    "orders.tbl",
    "lineitem.tbl",
    "supplier.tbl",
    "nation.tbl",
    "region.tbl",
];

/// Reads tables from delimited files.
pub struct TableReader;

impl TableReader {
    /// Reads every table from `dir` into a store.
    pub fn read_store(dir: &Path) -> StorageResult<TableStore> {
        Ok(TableStore {
            customer: Self::read_table(&dir.join(TABLE_FILES[0]), "customer")?,
            orders: Self::read_table(&dir.join(TABLE_FILES[1]), "orders")?,
            lineitem: Self::read_table(&dir.join(TABLE_FILES[2]), "lineitem")?,
            supplier: Self::read_table(&dir.join(TABLE_FILES[3]), "supplier")?,
            nation: Self::read_table(&dir.join(TABLE_FILES[4]), "nation")?,
            region: Self::read_table(&dir.join(TABLE_FILES[5]), "region")?,
        })
    }

    /// Reads a single table file.
    pub fn read_table(path: &Path, name: &str) -> StorageResult<Table> {
        let file = File::open(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Self::read_from(BufReader::new(file), path, name)
    }

    /// Reads a table from any buffered source. `path` is only used in errors.
    pub fn read_from<R: BufRead>(reader: R, path: &Path, name: &str) -> StorageResult<Table> {
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line.map_err(|source| StorageError::Read {
                path: path.to_path_buf(),
                source,
            })?,
            None => return Err(StorageError::MissingHeader(path.to_path_buf())),
        };
        let header = strip_cr(&header);
        let header = header.strip_suffix(DELIMITER).unwrap_or(header);
        if header.is_empty() {
            return Err(StorageError::MissingHeader(path.to_path_buf()));
        }
        let columns: Vec<&str> = header.split(DELIMITER).collect();

        let mut table = Table::new(name);
        for line in lines {
            let line = line.map_err(|source| StorageError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let line = strip_cr(&line);
            if line.is_empty() {
                continue;
            }
            let line = line.strip_suffix(DELIMITER).unwrap_or(line);

            let row = Row::from_pairs(
                columns
                    .iter()
                    .zip(line.split(DELIMITER))
                    .map(|(column, value)| (*column, value)),
            );
            if !row.is_empty() {
                table.push(row);
            }
        }

        Ok(table)
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
