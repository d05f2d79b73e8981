//! Row predicates for the revenue query
//!
//! Pure functions, no coercion. Dates are fixed-width `YYYY-MM-DD` strings,
//! so byte-wise ordering is calendar ordering.

use crate::storage::Row;

use super::columns::R_NAME;

/// Evaluates the query's filter conditions
pub struct RowPredicate;

impl RowPredicate {
    /// True iff `start <= date <= end`, compared as strings.
    pub fn date_in_range(date: &str, start: &str, end: &str) -> bool {
        start <= date && date <= end
    }

    /// True iff the row's region name equals `region_name` exactly.
    ///
    /// A row without a region name never matches.
    pub fn region_matches(row: &Row, region_name: &str) -> bool {
        row.column_eq(R_NAME, region_name)
    }
}
