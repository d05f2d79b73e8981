//! CLI command implementation
//!
//! One run = resolve config → load tables → execute → write result.
//! Each stage logs its own lifecycle event and stops the run on failure.

use std::path::Path;

use crate::executor::{execute_query5, ExecutionResult, NationRevenue};
use crate::observability::{log_event_with_fields, Event, Logger, ObservationScope};
use crate::storage::{ResultWriter, TableReader, TableStore};

use super::args::Cli;
use super::config::RunConfig;
use super::errors::{CliError, CliResult};

/// Main entry point for the CLI
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_with(&cli).map(|_| ())
}

/// Runs the query described by already parsed arguments.
pub fn run_with(cli: &Cli) -> CliResult<ExecutionResult> {
    let config = RunConfig::resolve(cli).map_err(|e| {
        log_event_with_fields(Event::ConfigRejected, &[("reason", e.message())]);
        e
    })?;
    Logger::set_min_severity(config.log_level);

    let threads = config.params.thread_count.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("end_date", config.params.end_date.as_str()),
            ("region", config.params.region_name.as_str()),
            ("start_date", config.params.start_date.as_str()),
            ("strategy", config.strategy.as_str()),
            ("threads", threads.as_str()),
        ],
    );

    query(&config)
}

/// Loads the tables, executes the query and writes the result file.
pub fn query(config: &RunConfig) -> CliResult<ExecutionResult> {
    let tables = load_tables(&config.table_path)?;
    let result = execute(&tables, config)?;
    write_result(&config.result_path, &result.revenue)?;
    Ok(result)
}

/// Reads all six tables from `dir`.
pub fn load_tables(dir: &Path) -> CliResult<TableStore> {
    let dir_str = dir.display().to_string();
    let scope = ObservationScope::with_fields("LOAD", &[("dir", dir_str.as_str())]);

    match TableReader::read_store(dir) {
        Ok(tables) => {
            let rows: Vec<(String, String)> = tables
                .tables()
                .iter()
                .map(|t| (t.name().to_string(), t.len().to_string()))
                .collect();
            let fields: Vec<(&str, &str)> = rows
                .iter()
                .map(|(name, count)| (name.as_str(), count.as_str()))
                .collect();

            scope.complete();
            log_event_with_fields(Event::TablesLoaded, &fields);
            Ok(tables)
        }
        Err(e) => {
            let reason = e.to_string();
            scope.fail(&reason);
            log_event_with_fields(Event::TablesFailed, &[("reason", reason.as_str())]);
            Err(e.into())
        }
    }
}

/// Executes the query over loaded tables.
pub fn execute(tables: &TableStore, config: &RunConfig) -> CliResult<ExecutionResult> {
    let threads = config.params.thread_count.to_string();
    log_event_with_fields(Event::QueryStart, &[("threads", threads.as_str())]);
    let scope = ObservationScope::new("EXECUTE");

    match execute_query5(tables, &config.params, config.strategy) {
        Ok(result) => {
            let nations = result.revenue.len().to_string();
            let orders_scanned = result.stats.orders_scanned.to_string();
            let orders_qualified = result.stats.orders_qualified.to_string();
            let lines_joined = result.stats.lines_joined.to_string();
            let revenue_total = format!("{:.2}", result.revenue.grand_total());

            scope.complete_with_fields(&[("nations", nations.as_str())]);
            log_event_with_fields(
                Event::QueryComplete,
                &[
                    ("lines_joined", lines_joined.as_str()),
                    ("nations", nations.as_str()),
                    ("orders_qualified", orders_qualified.as_str()),
                    ("orders_scanned", orders_scanned.as_str()),
                    ("revenue_total", revenue_total.as_str()),
                ],
            );
            Ok(result)
        }
        Err(e) => {
            let reason = e.to_string();
            if e.is_fatal() {
                scope.fail_fatal(&reason);
            } else {
                scope.fail(&reason);
            }
            log_event_with_fields(Event::QueryAborted, &[("reason", reason.as_str())]);
            Err(CliError::from(e))
        }
    }
}

/// Writes the result file.
pub fn write_result(path: &Path, revenue: &NationRevenue) -> CliResult<()> {
    let path_str = path.display().to_string();

    ResultWriter::write_file(path, revenue).map_err(|e| {
        let reason = e.to_string();
        log_event_with_fields(
            Event::ResultFailed,
            &[("path", path_str.as_str()), ("reason", reason.as_str())],
        );
        CliError::output_error(reason)
    })?;

    let rows = revenue.len().to_string();
    log_event_with_fields(
        Event::ResultWritten,
        &[("path", path_str.as_str()), ("rows", rows.as_str())],
    );
    Ok(())
}
