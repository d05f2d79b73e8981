//! In-memory rows and tables
//!
//! Columns are untyped at rest. Every value is kept as the raw string read
//! from the source file; interpretation happens at the point of use.

use std::collections::BTreeMap;

/// A single row: column name to raw string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    columns: BTreeMap<String, String>,
}

impl Row {
    /// Builds a row from `(column, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            columns: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Sets a column value, replacing any previous value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Returns the raw value of a column, or `None` if the row lacks it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    /// Returns true if the column is present and equal to `value`.
    pub fn column_eq(&self, column: &str, value: &str) -> bool {
        self.get(column) == Some(value)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the row has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// An ordered sequence of rows, kept in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    name: String,
    rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a row
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Rows in source order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Mutable access to the rows, used to build fixtures.
    pub fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }

    /// Returns the first row whose `column` equals `value`.
    pub fn find_first(&self, column: &str, value: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.column_eq(column, value))
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The six relations consumed by the revenue query.
///
/// Built once before execution and only ever shared by `&` afterwards.
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    pub customer: Table,
    pub orders: Table,
    pub lineitem: Table,
    pub supplier: Table,
    pub nation: Table,
    pub region: Table,
}

impl TableStore {
    /// Creates a store with six empty, correctly named tables.
    pub fn empty() -> Self {
        Self {
            customer: Table::new("customer"),
            orders: Table::new("orders"),
            lineitem: Table::new("lineitem"),
            supplier: Table::new("supplier"),
            nation: Table::new("nation"),
            region: Table::new("region"),
        }
    }

    /// Tables in load order, for logging.
    pub fn tables(&self) -> [&Table; 6] {
        [
            &self.customer,
            &self.orders,
            &self.lineitem,
            &self.supplier,
            &self.nation,
            &self.region,
        ]
    }

    /// Total row count across all tables
    pub fn total_rows(&self) -> usize {
        self.tables().iter().map(|t| t.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_get_missing_column() {
        let row = Row::from_pairs([("c_custkey", "1")]);
        assert_eq!(row.get("c_custkey"), Some("1"));
        assert_eq!(row.get("c_nationkey"), None);
    }

    #[test]
    fn test_column_eq_requires_presence() {
        let row = Row::from_pairs([("r_name", "")]);
        assert!(row.column_eq("r_name", ""));
        assert!(!row.column_eq("r_regionkey", ""));
    }

    #[test]
    fn test_find_first_returns_earliest_match() {
        let mut table = Table::new("nation");
        table.push(Row::from_pairs([("n_nationkey", "1"), ("n_name", "FIRST")]));
        table.push(Row::from_pairs([("n_nationkey", "1"), ("n_name", "SECOND")]));

        let row = table.find_first("n_nationkey", "1").unwrap();
        assert_eq!(row.get("n_name"), Some("FIRST"));
        assert!(table.find_first("n_nationkey", "2").is_none());
    }

    #[test]
    fn test_store_names_and_counts() {
        let mut store = TableStore::empty();
        store.region.push(Row::from_pairs([("r_regionkey", "0")]));

        let names: Vec<&str> = store.tables().iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec!["customer", "orders", "lineitem", "supplier", "nation", "region"]
        );
        assert_eq!(store.total_rows(), 1);
    }
}
