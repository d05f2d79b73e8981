//! Shared fixtures for integration tests
//!
//! `tpch_fixture` generates a small, seeded dataset with the shape of the
//! TPC-H tables the query reads, including a few referential gaps (orders by
//! unknown customers, lines from unknown suppliers) so the lenient join
//! paths are exercised.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use tpchq5::executor::NationRevenue;
use tpchq5::storage::{Row, Table, TableStore};

pub const REGIONS: [&str; 5] = ["AFRICA", "AMERICA", "ASIA", "EUROPE", "MIDDLE EAST"];

pub const NATIONS: [(&str, usize); 25] = [
    ("ALGERIA", 0),
    ("ARGENTINA", 1),
    ("BRAZIL", 1),
    ("CANADA", 1),
    ("EGYPT", 4),
    ("ETHIOPIA", 0),
    ("FRANCE", 3),
    ("GERMANY", 3),
    ("INDIA", 2),
    ("INDONESIA", 2),
    ("IRAN", 4),
    ("IRAQ", 4),
    ("JAPAN", 2),
    ("JORDAN", 4),
    ("KENYA", 0),
    ("MOROCCO", 0),
    ("MOZAMBIQUE", 0),
    ("PERU", 1),
    ("CHINA", 2),
    ("ROMANIA", 3),
    ("SAUDI ARABIA", 4),
    ("VIETNAM", 2),
    ("RUSSIA", 3),
    ("UNITED KINGDOM", 3),
    ("UNITED STATES", 1),
];

pub fn row(pairs: &[(&str, &str)]) -> Row {
    Row::from_pairs(pairs.iter().copied())
}

/// Seeded synthetic TPC-H-shaped dataset.
pub fn tpch_fixture(seed: u64, customers: usize, suppliers: usize, orders: usize) -> TableStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = TableStore::empty();

    for (key, name) in REGIONS.iter().enumerate() {
        store.region.push(row(&[
            ("r_regionkey", key.to_string().as_str()),
            ("r_name", *name),
            ("r_comment", "fixture"),
        ]));
    }

    for (key, (name, region)) in NATIONS.iter().enumerate() {
        store.nation.push(row(&[
            ("n_nationkey", key.to_string().as_str()),
            ("n_name", *name),
            ("n_regionkey", region.to_string().as_str()),
        ]));
    }

    for key in 1..=customers {
        let nation = rng.gen_range(0..NATIONS.len()).to_string();
        store.customer.push(row(&[
            ("c_custkey", key.to_string().as_str()),
            ("c_nationkey", nation.as_str()),
        ]));
    }

    for key in 1..=suppliers {
        let nation = rng.gen_range(0..NATIONS.len()).to_string();
        store.supplier.push(row(&[
            ("s_suppkey", key.to_string().as_str()),
            ("s_nationkey", nation.as_str()),
        ]));
    }

    for key in 1..=orders {
        // About one order in twenty references a customer that does not exist.
        let custkey = rng.gen_range(1..=customers + customers / 20 + 1).to_string();
        let date = format!(
            "{}-{:02}-{:02}",
            rng.gen_range(1992..=1998),
            rng.gen_range(1..=12),
            rng.gen_range(1..=28)
        );
        let orderkey = key.to_string();
        store.orders.push(row(&[
            ("o_orderkey", orderkey.as_str()),
            ("o_custkey", custkey.as_str()),
            ("o_orderdate", date.as_str()),
        ]));

        for _ in 0..rng.gen_range(0..=7) {
            let suppkey = rng.gen_range(1..=suppliers + 2).to_string();
            let price = format!("{:.2}", rng.gen_range(900.0..105000.0));
            let discount = format!("{:.2}", rng.gen_range(0..=10) as f64 / 100.0);
            store.lineitem.push(row(&[
                ("l_orderkey", orderkey.as_str()),
                ("l_suppkey", suppkey.as_str()),
                ("l_extendedprice", price.as_str()),
                ("l_discount", discount.as_str()),
            ]));
        }
    }

    // Interleave lines of different orders.
    store.lineitem.rows_mut().shuffle(&mut rng);
    store
}

/// Shuffles one table's rows in place.
pub fn shuffle_table(table: &mut Table, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    table.rows_mut().shuffle(&mut rng);
}

/// Asserts two results have the same nations and totals within `1e-6`.
pub fn assert_revenue_eq(actual: &NationRevenue, expected: &NationRevenue) {
    let actual_names: Vec<&str> = actual.iter().map(|(n, _)| n).collect();
    let expected_names: Vec<&str> = expected.iter().map(|(n, _)| n).collect();
    assert_eq!(actual_names, expected_names);

    for (nation, revenue) in expected.iter() {
        let got = actual.get(nation).unwrap_or(f64::NAN);
        let tolerance = 1e-6 * revenue.abs().max(1.0);
        assert!(
            (got - revenue).abs() <= tolerance,
            "{}: got {}, expected {}",
            nation,
            got,
            revenue
        );
    }
}
