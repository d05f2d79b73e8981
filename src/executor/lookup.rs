//! Lookup seam between the join engine and the tables
//!
//! The engine never touches tables directly. It asks a `JoinLookup` for the
//! row matching a key, so the default linear scans and the optional hash
//! index answer the same questions with the same rows.

use std::fmt;
use std::str::FromStr;

use crate::storage::{Row, TableStore};

use super::columns::{C_CUSTKEY, L_ORDERKEY, N_NATIONKEY, R_REGIONKEY, S_SUPPKEY};
use super::filters::RowPredicate;

/// Key lookups needed by the join.
///
/// Unique-key lookups return the first row in table order whose key
/// matches. `lines` returns every matching lineitem in table order.
pub trait JoinLookup<'a> {
    /// Customer by `c_custkey`
    fn customer(&self, custkey: &str) -> Option<&'a Row>;

    /// Nation by `n_nationkey`
    fn nation(&self, nationkey: &str) -> Option<&'a Row>;

    /// True if some region row has this `r_regionkey` and the target name
    fn region_selected(&self, regionkey: &str) -> bool;

    /// Supplier by `s_suppkey`
    fn supplier(&self, suppkey: &str) -> Option<&'a Row>;

    /// All lineitems with this `l_orderkey`
    fn lines(&self, orderkey: &str) -> impl Iterator<Item = &'a Row>;
}

/// How the join resolves keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupStrategy {
    /// Linear scan of the table for every probe
    #[default]
    LinearScan,
    /// Hash index built once before the workers start
    HashProbe,
}

impl LookupStrategy {
    /// Returns the name accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStrategy::LinearScan => "scan",
            LookupStrategy::HashProbe => "hash",
        }
    }
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LookupStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scan" => Ok(LookupStrategy::LinearScan),
            "hash" => Ok(LookupStrategy::HashProbe),
            other => Err(format!(
                "Invalid strategy: '{}'. Must be 'scan' or 'hash'.",
                other
            )),
        }
    }
}

/// Answers lookups with linear scans over the tables.
pub struct ScanLookup<'a> {
    tables: &'a TableStore,
    region_name: &'a str,
}

impl<'a> ScanLookup<'a> {
    /// Creates a scan lookup for one target region
    pub fn new(tables: &'a TableStore, region_name: &'a str) -> Self {
        Self {
            tables,
            region_name,
        }
    }
}

impl<'a> JoinLookup<'a> for ScanLookup<'a> {
    fn customer(&self, custkey: &str) -> Option<&'a Row> {
        self.tables.customer.find_first(C_CUSTKEY, custkey)
    }

    fn nation(&self, nationkey: &str) -> Option<&'a Row> {
        self.tables.nation.find_first(N_NATIONKEY, nationkey)
    }

    fn region_selected(&self, regionkey: &str) -> bool {
        self.tables.region.rows().iter().any(|row| {
            row.column_eq(R_REGIONKEY, regionkey)
                && RowPredicate::region_matches(row, self.region_name)
        })
    }

    fn supplier(&self, suppkey: &str) -> Option<&'a Row> {
        self.tables.supplier.find_first(S_SUPPKEY, suppkey)
    }

    fn lines(&self, orderkey: &str) -> impl Iterator<Item = &'a Row> {
        self.tables
            .lineitem
            .rows()
            .iter()
            .filter(move |row| row.column_eq(L_ORDERKEY, orderkey))
    }
}
