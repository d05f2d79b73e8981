//! Run configuration
//!
//! Values come from an optional JSON file and from flags; a flag overrides
//! the file. The resolved configuration is validated before any table is
//! read.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::executor::{LookupStrategy, QueryParams};
use crate::observability::Severity;

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// ISO date format of the date bounds
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration file structure. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub r_name: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub threads: Option<usize>,

    #[serde(default)]
    pub table_path: Option<PathBuf>,

    #[serde(default)]
    pub result_path: Option<PathBuf>,

    /// "scan" or "hash"
    #[serde(default)]
    pub strategy: Option<String>,

    /// "trace", "info", "warn", "error" or "fatal"
    #[serde(default)]
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Ok(serde_json::from_str(&content)?)
    }
}

/// Fully resolved and validated configuration of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub params: QueryParams,
    pub table_path: PathBuf,
    pub result_path: PathBuf,
    pub strategy: LookupStrategy,
    pub log_level: Severity,
}

impl RunConfig {
    /// Merges flags over the config file (if any) and validates the result.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Self::merge(cli, file)
    }

    /// Merges flags over an already loaded file config.
    pub fn merge(cli: &Cli, file: FileConfig) -> CliResult<Self> {
        let region_name = required("r_name", cli.r_name.clone().or(file.r_name))?;
        let start_date = required("start_date", cli.start_date.clone().or(file.start_date))?;
        let end_date = required("end_date", cli.end_date.clone().or(file.end_date))?;
        let threads = cli
            .threads
            .or(file.threads)
            .ok_or_else(|| CliError::missing("threads"))?;
        let table_path = cli
            .table_path
            .clone()
            .or(file.table_path)
            .ok_or_else(|| CliError::missing("table_path"))?;
        let result_path = cli
            .result_path
            .clone()
            .or(file.result_path)
            .ok_or_else(|| CliError::missing("result_path"))?;

        let strategy = match (cli.strategy, file.strategy) {
            (Some(s), _) => s,
            (None, Some(s)) => s.parse().map_err(CliError::config_error)?,
            (None, None) => LookupStrategy::default(),
        };
        let log_level = match (cli.log_level, file.log_level) {
            (Some(l), _) => l,
            (None, Some(l)) => l.parse().map_err(CliError::config_error)?,
            (None, None) => Severity::Info,
        };

        validate_date("start_date", &start_date)?;
        validate_date("end_date", &end_date)?;

        let params = QueryParams::new(region_name, start_date, end_date, threads);
        params.validate()?;

        Ok(Self {
            params,
            table_path,
            result_path,
            strategy,
            log_level,
        })
    }
}

fn required(name: &str, value: Option<String>) -> CliResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CliError::missing(name)),
    }
}

/// Dates must be zero-padded ISO dates so that string order is date order.
fn validate_date(name: &str, value: &str) -> CliResult<()> {
    let valid = value.len() == 10 && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok();
    if !valid {
        return Err(CliError::config_error(format!(
            "Invalid {}: '{}'. Expected YYYY-MM-DD.",
            name, value
        )));
    }
    Ok(())
}
