//! Result writer
//!
//! Output is a two-column delimited table:
//!
//! ```text
//! nation|revenue
//! CHINA|12345.68
//! ```
//!
//! Revenue is always written with exactly two decimals. Rows follow the
//! iteration order of the result, which is ascending by nation name.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::executor::NationRevenue;

use super::errors::{StorageError, StorageResult};
use super::reader::DELIMITER;

/// Header line of the result file
pub const RESULT_HEADER: &str = "nation|revenue";

/// Writes query results in delimited form.
pub struct ResultWriter;

impl ResultWriter {
    /// Creates (or truncates) `path` and writes the result to it.
    pub fn write_file(path: &Path, result: &NationRevenue) -> StorageResult<()> {
        let write_err = |source: std::io::Error| StorageError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut out = BufWriter::new(file);
        Self::write_to(&mut out, result).map_err(write_err)?;
        out.flush().map_err(write_err)?;

        Ok(())
    }

    /// Writes header and rows to any writer.
    pub fn write_to<W: Write>(writer: &mut W, result: &NationRevenue) -> std::io::Result<()> {
        writeln!(writer, "{}", RESULT_HEADER)?;
        for (nation, revenue) in result.iter() {
            writeln!(writer, "{}{}{:.2}", nation, DELIMITER, revenue)?;
        }
        Ok(())
    }
}
