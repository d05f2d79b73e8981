//! Result types for query execution

use std::collections::BTreeMap;

/// Revenue totals keyed by nation name.
///
/// Sparse: a nation appears only once revenue has been added for it.
/// Iteration is in ascending name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NationRevenue {
    totals: BTreeMap<String, f64>,
}

/// A worker's private accumulator. Same shape as the final result.
pub type PartialResult = NationRevenue;

impl NationRevenue {
    /// Creates an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `revenue` to `nation`, creating the entry at zero first.
    pub fn add(&mut self, nation: &str, revenue: f64) {
        match self.totals.get_mut(nation) {
            Some(total) => *total += revenue,
            None => {
                self.totals.insert(nation.to_string(), revenue);
            }
        }
    }

    /// Adds every entry of `other` into `self`.
    pub fn merge(&mut self, other: &NationRevenue) {
        for (nation, revenue) in &other.totals {
            self.add(nation, *revenue);
        }
    }

    /// Total for one nation
    pub fn get(&self, nation: &str) -> Option<f64> {
        self.totals.get(nation).copied()
    }

    /// Entries in ascending nation-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum over all nations
    pub fn grand_total(&self) -> f64 {
        self.totals.values().sum()
    }

    /// Number of nations with revenue
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns true if no nation has revenue
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Counters collected while executing one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionStats {
    /// Orders examined by all workers
    pub orders_scanned: u64,
    /// Orders that passed the date filter and the customer/region chain
    pub orders_qualified: u64,
    /// Lineitems that contributed revenue
    pub lines_joined: u64,
    /// Workers that merged their partial result
    pub workers: u64,
}

impl ExecutionStats {
    /// Adds another worker's counters into this one
    pub fn absorb(&mut self, other: &ExecutionStats) {
        self.orders_scanned += other.orders_scanned;
        self.orders_qualified += other.orders_qualified;
        self.lines_joined += other.lines_joined;
        self.workers += other.workers;
    }
}

/// Result of query execution
#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    /// Final per-nation totals
    pub revenue: NationRevenue,
    /// Counters summed over all workers
    pub stats: ExecutionStats,
}

impl ExecutionResult {
    /// Creates an empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if no nation has revenue
    pub fn is_empty(&self) -> bool {
        self.revenue.is_empty()
    }
}
