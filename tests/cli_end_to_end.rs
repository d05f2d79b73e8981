//! End-to-end runs through the CLI layer
//!
//! Tables are written to a temporary directory as pipe-delimited files,
//! read back, queried, and the result file is checked.

mod common;

use std::fs;
use std::path::Path;

use common::{assert_revenue_eq, tpch_fixture};
use tpchq5::cli::{run_with, Cli, CliErrorCode};
use tpchq5::executor::{execute_query5, LookupStrategy, QueryParams};
use tpchq5::storage::{Table, TableReader, TableStore, RESULT_HEADER};

const COLUMNS: [(&str, &[&str]); 6] = [
    ("customer.tbl", &["c_custkey", "c_nationkey"]),
    ("orders.tbl", &["o_orderkey", "o_custkey", "o_orderdate"]),
    (
        "lineitem.tbl",
        &["l_orderkey", "l_suppkey", "l_extendedprice", "l_discount"],
    ),
    ("supplier.tbl", &["s_suppkey", "s_nationkey"]),
    ("nation.tbl", &["n_nationkey", "n_name", "n_regionkey"]),
    ("region.tbl", &["r_regionkey", "r_name"]),
];

fn dump_table(path: &Path, table: &Table, columns: &[&str]) {
    let mut out = format!("{}|\n", columns.join("|"));
    for row in table.rows() {
        let cells: Vec<&str> = columns.iter().map(|c| row.get(c).unwrap_or("")).collect();
        out.push_str(&cells.join("|"));
        out.push_str("|\n");
    }
    fs::write(path, out).unwrap();
}

fn dump_store(dir: &Path, store: &TableStore) {
    let tables = store.tables();
    for (table, (file, columns)) in tables.iter().zip(COLUMNS.iter()) {
        dump_table(&dir.join(file), table, columns);
    }
}

fn cli(dir: &Path, threads: usize) -> Cli {
    Cli {
        r_name: Some("EUROPE".into()),
        start_date: Some("1995-01-01".into()),
        end_date: Some("1996-06-30".into()),
        threads: Some(threads),
        table_path: Some(dir.to_path_buf()),
        result_path: Some(dir.join("result.tbl")),
        ..Cli::default()
    }
}

#[test]
fn test_files_round_trip_to_same_result() {
    let dir = tempfile::tempdir().unwrap();
    let store = tpch_fixture(21, 40, 12, 250);
    dump_store(dir.path(), &store);

    let loaded = TableReader::read_store(dir.path()).unwrap();
    assert_eq!(loaded.total_rows(), store.total_rows());

    let params = QueryParams::new("EUROPE", "1995-01-01", "1996-06-30", 3);
    let expected = execute_query5(&store, &params, LookupStrategy::LinearScan).unwrap();
    let actual = execute_query5(&loaded, &params, LookupStrategy::LinearScan).unwrap();
    assert_revenue_eq(&actual.revenue, &expected.revenue);
}

#[test]
fn test_result_file_format() {
    let dir = tempfile::tempdir().unwrap();
    dump_store(dir.path(), &tpch_fixture(8, 40, 12, 250));

    let result = run_with(&cli(dir.path(), 4)).unwrap();
    let out = fs::read_to_string(dir.path().join("result.tbl")).unwrap();
    let mut lines = out.lines();

    assert_eq!(lines.next(), Some(RESULT_HEADER));
    let body: Vec<&str> = lines.collect();
    assert_eq!(body.len(), result.revenue.len());

    let names: Vec<&str> = body.iter().map(|l| l.split('|').next().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    for line in body {
        let (nation, revenue) = line.split_once('|').unwrap();
        let decimals = revenue.split_once('.').unwrap().1;
        assert_eq!(decimals.len(), 2, "{}", line);

        let written: f64 = revenue.parse().unwrap();
        assert!((written - result.revenue.get(nation).unwrap()).abs() <= 0.005);
    }
}

fn read_result_file(path: &Path) -> Vec<(String, f64)> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(|line| {
            let (nation, revenue) = line.split_once('|').unwrap();
            (nation.to_string(), revenue.parse().unwrap())
        })
        .collect()
}

#[test]
fn test_thread_count_does_not_change_output_file() {
    let dir = tempfile::tempdir().unwrap();
    dump_store(dir.path(), &tpch_fixture(13, 60, 20, 300));
    let result_path = dir.path().join("result.tbl");

    run_with(&cli(dir.path(), 1)).unwrap();
    let single = read_result_file(&result_path);
    assert!(!single.is_empty());

    for threads in [2, 5, 32] {
        run_with(&cli(dir.path(), threads)).unwrap();
        let many = read_result_file(&result_path);

        assert_eq!(many.len(), single.len(), "threads = {}", threads);
        for ((name, revenue), (expected_name, expected)) in many.iter().zip(single.iter()) {
            assert_eq!(name, expected_name);
            // Two-decimal rounding may differ by one cent across summation orders.
            assert!((revenue - expected).abs() <= 0.01 + 1e-9, "threads = {}", threads);
        }
    }
}

#[test]
fn test_short_line_with_trailing_delimiter_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let tables = [
        ("region.tbl", "r_regionkey|r_name|\n2|ASIA|\n"),
        ("nation.tbl", "n_nationkey|n_name|n_regionkey|\n1|N1|2|\n2|N2|3|\n"),
        ("customer.tbl", "c_custkey|c_nationkey|\nC1|1|\n"),
        ("supplier.tbl", "s_suppkey|s_nationkey|\nS1|2|\n"),
        ("orders.tbl", "o_orderkey|o_custkey|o_orderdate|\nO1|C1|1994-03-15|\n"),
        (
            "lineitem.tbl",
            "l_orderkey|l_suppkey|l_extendedprice|l_discount|\nO1|S1|2000.00|\nO1|S1|100.00|0.00|\n",
        ),
    ];
    for (file, content) in tables {
        fs::write(dir.path().join(file), content).unwrap();
    }

    let loaded = TableReader::read_store(dir.path()).unwrap();
    assert_eq!(loaded.lineitem.rows()[0].get("l_discount"), None);

    let cli = Cli {
        r_name: Some("ASIA".into()),
        start_date: Some("1994-01-01".into()),
        end_date: Some("1994-12-31".into()),
        ..cli(dir.path(), 2)
    };
    let result = run_with(&cli).unwrap();

    assert_eq!(result.revenue.len(), 1);
    assert!((result.revenue.get("N2").unwrap() - 100.0).abs() < 1e-9);
}

#[test]
fn test_config_file_supplies_values() {
    let dir = tempfile::tempdir().unwrap();
    dump_store(dir.path(), &tpch_fixture(2, 30, 10, 150));

    let config_path = dir.path().join("q5.json");
    let config = serde_json::json!({
        "r_name": "EUROPE",
        "start_date": "1995-01-01",
        "end_date": "1996-06-30",
        "threads": 2,
        "table_path": dir.path(),
        "result_path": dir.path().join("from_config.tbl"),
        "strategy": "hash",
        "log_level": "error",
    });
    fs::write(&config_path, config.to_string()).unwrap();

    let from_file = run_with(&Cli {
        config: Some(config_path),
        ..Cli::default()
    })
    .unwrap();
    let from_flags = run_with(&cli(dir.path(), 2)).unwrap();

    assert_revenue_eq(&from_file.revenue, &from_flags.revenue);
    assert!(dir.path().join("from_config.tbl").exists());
}

#[test]
fn test_malformed_date_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let cli = Cli {
        start_date: Some("1995/01/01".into()),
        ..cli(dir.path(), 2)
    };

    let err = run_with(&cli).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::ConfigError);
    assert!(!dir.path().join("result.tbl").exists());
}

#[test]
fn test_empty_result_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    dump_store(dir.path(), &tpch_fixture(4, 20, 5, 50));

    let cli = Cli {
        r_name: Some("ATLANTIS".into()),
        ..cli(dir.path(), 3)
    };
    let result = run_with(&cli).unwrap();

    assert!(result.revenue.is_empty());
    let out = fs::read_to_string(dir.path().join("result.tbl")).unwrap();
    assert_eq!(out, format!("{}\n", RESULT_HEADER));
}
