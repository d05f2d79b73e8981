//! CLI module for tpchq5
//!
//! Resolves configuration from flags and an optional JSON file, loads the
//! tables, runs the query, and writes the result file.

mod args;
mod commands;
mod config;
mod errors;

pub use args::Cli;
pub use commands::{execute, load_tables, query, run, run_with, write_result};
pub use config::{FileConfig, RunConfig, DATE_FORMAT};
pub use errors::{CliError, CliErrorCode, CliResult};
