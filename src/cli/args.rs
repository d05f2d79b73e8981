//! CLI argument definitions using clap
//!
//! tpchq5 --r_name ASIA --start_date 1994-01-01 --end_date 1994-12-31 \
//!        --threads 4 --table_path ./tables --result_path ./result.tbl
//!
//! Every value may instead come from `--config <file.json>`; flags win.

use std::path::PathBuf;

use clap::Parser;

use crate::executor::LookupStrategy;
use crate::observability::Severity;

/// tpchq5 - revenue per supplier nation for one region and date range
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tpchq5")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target region name, matched exactly
    #[arg(long = "r_name")]
    pub r_name: Option<String>,

    /// First order date included (YYYY-MM-DD)
    #[arg(long = "start_date")]
    pub start_date: Option<String>,

    /// Last order date included (YYYY-MM-DD)
    #[arg(long = "end_date")]
    pub end_date: Option<String>,

    /// Number of worker threads
    #[arg(long)]
    pub threads: Option<usize>,

    /// Directory holding the six .tbl files
    #[arg(long = "table_path")]
    pub table_path: Option<PathBuf>,

    /// File the result is written to
    #[arg(long = "result_path")]
    pub result_path: Option<PathBuf>,

    /// JSON file providing any of the values above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Join lookups: scan (default) or hash
    #[arg(long)]
    pub strategy: Option<LookupStrategy>,

    /// Minimum log severity: trace, info, warn, error, fatal
    #[arg(long = "log-level")]
    pub log_level: Option<Severity>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
