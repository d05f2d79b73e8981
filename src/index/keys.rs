//! Hash index over the join keys
//!
//! Built once from an immutable `TableStore`, then shared read-only by all
//! workers. Answers exactly what the linear scans answer:
//!
//! - unique-key maps keep the FIRST row seen per key
//! - lineitem lists keep table order per order key
//! - the region set holds every `r_regionkey` whose row carries the target name
//!
//! Rows missing the key column are left out, matching a scan that never
//! finds them.

use std::collections::{HashMap, HashSet};

use crate::executor::columns::{
    C_CUSTKEY, L_ORDERKEY, N_NATIONKEY, R_REGIONKEY, S_SUPPKEY,
};
use crate::executor::{JoinLookup, RowPredicate};
use crate::storage::{Row, Table, TableStore};

/// Size of each part of a built index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyIndexStats {
    pub customers: usize,
    pub nations: usize,
    pub suppliers: usize,
    pub orders_with_lines: usize,
    pub selected_regions: usize,
}

/// Hash lookups for one query's joins
pub struct KeyIndex<'a> {
    customers: HashMap<&'a str, &'a Row>,
    nations: HashMap<&'a str, &'a Row>,
    suppliers: HashMap<&'a str, &'a Row>,
    lines: HashMap<&'a str, Vec<&'a Row>>,
    selected_regions: HashSet<&'a str>,
}

impl<'a> KeyIndex<'a> {
    /// Builds the index for a target region
    pub fn build(tables: &'a TableStore, region_name: &str) -> Self {
        let mut lines: HashMap<&'a str, Vec<&'a Row>> = HashMap::new();
        for row in tables.lineitem.rows() {
            if let Some(key) = row.get(L_ORDERKEY) {
                lines.entry(key).or_default().push(row);
            }
        }

        let selected_regions = tables
            .region
            .rows()
            .iter()
            .filter(|row| RowPredicate::region_matches(row, region_name))
            .filter_map(|row| row.get(R_REGIONKEY))
            .collect();

        Self {
            customers: first_by_key(&tables.customer, C_CUSTKEY),
            nations: first_by_key(&tables.nation, N_NATIONKEY),
            suppliers: first_by_key(&tables.supplier, S_SUPPKEY),
            lines,
            selected_regions,
        }
    }

    /// Entry counts, for logging
    pub fn stats(&self) -> KeyIndexStats {
        KeyIndexStats {
            customers: self.customers.len(),
            nations: self.nations.len(),
            suppliers: self.suppliers.len(),
            orders_with_lines: self.lines.len(),
            selected_regions: self.selected_regions.len(),
        }
    }
}

fn first_by_key<'a>(table: &'a Table, column: &str) -> HashMap<&'a str, &'a Row> {
    let mut map = HashMap::with_capacity(table.len());
    for row in table.rows() {
        if let Some(key) = row.get(column) {
            map.entry(key).or_insert(row);
        }
    }
    map
}

impl<'a> JoinLookup<'a> for KeyIndex<'a> {
    fn customer(&self, custkey: &str) -> Option<&'a Row> {
        self.customers.get(custkey).copied()
    }

    fn nation(&self, nationkey: &str) -> Option<&'a Row> {
        self.nations.get(nationkey).copied()
    }

    fn region_selected(&self, regionkey: &str) -> bool {
        self.selected_regions.contains(regionkey)
    }

    fn supplier(&self, suppkey: &str) -> Option<&'a Row> {
        self.suppliers.get(suppkey).copied()
    }

    fn lines(&self, orderkey: &str) -> impl Iterator<Item = &'a Row> {
        self.lines.get(orderkey).into_iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::ScanLookup;

    fn row(pairs: &[(&str, &str)]) -> Row {
        Row::from_pairs(pairs.iter().copied())
    }

    fn store() -> TableStore {
        let mut s = TableStore::empty();
        s.region.push(row(&[("r_regionkey", "2"), ("r_name", "ASIA")]));
        s.region.push(row(&[("r_regionkey", "2"), ("r_name", "OTHER")]));
        s.region.push(row(&[("r_name", "ASIA")]));
        s.nation.push(row(&[("n_nationkey", "1"), ("n_name", "FIRST")]));
        s.nation.push(row(&[("n_nationkey", "1"), ("n_name", "SECOND")]));
        s.supplier.push(row(&[("s_nationkey", "1")]));
        s.lineitem.push(row(&[("l_orderkey", "5"), ("l_suppkey", "a")]));
        s.lineitem.push(row(&[("l_orderkey", "6"), ("l_suppkey", "b")]));
        s.lineitem.push(row(&[("l_orderkey", "5"), ("l_suppkey", "c")]));
        s
    }

    #[test]
    fn test_duplicate_keys_keep_first() {
        let s = store();
        let index = KeyIndex::build(&s, "ASIA");
        let scan = ScanLookup::new(&s, "ASIA");

        assert_eq!(index.nation("1").unwrap().get("n_name"), Some("FIRST"));
        assert_eq!(index.nation("1"), scan.nation("1"));
    }

    #[test]
    fn test_lines_match_scan_order() {
        let s = store();
        let index = KeyIndex::build(&s, "ASIA");
        let scan = ScanLookup::new(&s, "ASIA");

        let indexed: Vec<&Row> = index.lines("5").collect();
        let scanned: Vec<&Row> = scan.lines("5").collect();
        assert_eq!(indexed, scanned);
        assert_eq!(indexed.len(), 2);
        assert_eq!(index.lines("9").count(), 0);
    }

    #[test]
    fn test_region_set_matches_scan() {
        let s = store();
        let index = KeyIndex::build(&s, "ASIA");
        let scan = ScanLookup::new(&s, "ASIA");

        for key in ["2", "3", ""] {
            assert_eq!(index.region_selected(key), scan.region_selected(key));
        }
        assert!(index.region_selected("2"));
    }

    #[test]
    fn test_rows_without_key_not_indexed() {
        let s = store();
        let stats = KeyIndex::build(&s, "ASIA").stats();

        assert_eq!(stats.suppliers, 0);
        assert_eq!(stats.nations, 1);
        assert_eq!(stats.orders_with_lines, 2);
        assert_eq!(stats.selected_regions, 1);
    }
}
