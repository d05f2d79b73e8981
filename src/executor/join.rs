//! Per-order five-way join
//!
//! For one order, strictly in this order:
//! 1. Date filter on `o_orderdate`
//! 2. Customer by `o_custkey`
//! 3. Customer nation by `c_nationkey`
//! 4. Region filter on the nation's `n_regionkey` and the target name
//! 5. Every lineitem of the order
//! 6. Supplier and supplier nation of each line
//! 7. `l_extendedprice * (1 - l_discount)` added to the supplier nation
//!
//! Any missing column or failed lookup drops the order (steps 1-4) or the
//! line (step 6) silently. A monetary column that is present but not a
//! number aborts the query.

use crate::storage::Row;

use super::columns::{
    C_NATIONKEY, L_DISCOUNT, L_EXTENDEDPRICE, L_SUPPKEY, N_NAME, N_NATIONKEY, N_REGIONKEY,
    O_CUSTKEY, O_ORDERDATE, O_ORDERKEY, S_NATIONKEY,
};
use super::errors::{ExecutorError, ExecutorResult};
use super::filters::RowPredicate;
use super::lookup::JoinLookup;
use super::params::QueryParams;
use super::result::{ExecutionStats, PartialResult};

/// Joins single orders against the rest of the tables
pub struct JoinEngine<'q, L> {
    lookup: &'q L,
    params: &'q QueryParams,
}

impl<'q, 'a, L: JoinLookup<'a>> JoinEngine<'q, L> {
    /// Creates an engine over the given lookup
    pub fn new(lookup: &'q L, params: &'q QueryParams) -> Self {
        Self { lookup, params }
    }

    /// Joins one order and adds its revenue to `partial`.
    pub fn process_order(
        &self,
        order: &Row,
        partial: &mut PartialResult,
        stats: &mut ExecutionStats,
    ) -> ExecutorResult<()> {
        stats.orders_scanned += 1;

        let Some(order_date) = order.get(O_ORDERDATE) else {
            return Ok(());
        };
        if !RowPredicate::date_in_range(order_date, &self.params.start_date, &self.params.end_date)
        {
            return Ok(());
        }

        if !self.customer_in_region(order) {
            return Ok(());
        }

        let Some(order_key) = order.get(O_ORDERKEY) else {
            return Ok(());
        };
        stats.orders_qualified += 1;

        for line in self.lookup.lines(order_key) {
            let Some(nation_name) = self.supplier_nation(line) else {
                continue;
            };
            let Some(revenue) = line_revenue(line, order_key)? else {
                continue;
            };

            partial.add(nation_name, revenue);
            stats.lines_joined += 1;
        }

        Ok(())
    }

    /// Customer → nation → region chain of an order.
    fn customer_in_region(&self, order: &Row) -> bool {
        let Some(customer) = order.get(O_CUSTKEY).and_then(|k| self.lookup.customer(k)) else {
            return false;
        };
        let Some(nation) = customer
            .get(C_NATIONKEY)
            .and_then(|k| self.lookup.nation(k))
        else {
            return false;
        };

        nation
            .get(N_REGIONKEY)
            .is_some_and(|k| self.lookup.region_selected(k))
    }

    /// Supplier → nation name of a line.
    fn supplier_nation(&self, line: &Row) -> Option<&'a str> {
        let supplier = line.get(L_SUPPKEY).and_then(|k| self.lookup.supplier(k))?;
        let nation = supplier
            .get(S_NATIONKEY)
            .and_then(|k| self.lookup.nation(k))?;
        nation.get(N_NAME)
    }
}

/// Revenue of one line, `None` if a monetary column is absent.
fn line_revenue(line: &Row, order_key: &str) -> ExecutorResult<Option<f64>> {
    let (Some(price), Some(discount)) = (line.get(L_EXTENDEDPRICE), line.get(L_DISCOUNT)) else {
        return Ok(None);
    };

    let price = parse_money(L_EXTENDEDPRICE, price, order_key)?;
    let discount = parse_money(L_DISCOUNT, discount, order_key)?;

    Ok(Some(price * (1.0 - discount)))
}

fn parse_money(column: &str, value: &str, order_key: &str) -> ExecutorResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ExecutorError::corrupt_field(column, value, order_key))
}
