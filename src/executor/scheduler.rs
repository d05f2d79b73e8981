//! Partition scheduler
//!
//! Splits the order table across a fixed set of worker threads and merges
//! their partial results.
//!
//! - Worker `t` of `n` takes order indices `t, t+n, t+2n, ...`
//! - Each worker joins into a private `PartialResult`
//! - Each worker then merges everything it accumulated under ONE lock
//!   acquisition
//! - The caller blocks until every worker has joined
//! - Any worker error or panic fails the whole query

use std::thread;

use parking_lot::Mutex;

use crate::index::KeyIndex;
use crate::observability::Logger;
use crate::storage::TableStore;

use super::errors::{ExecutorError, ExecutorResult};
use super::join::JoinEngine;
use super::lookup::{JoinLookup, LookupStrategy, ScanLookup};
use super::params::QueryParams;
use super::result::{ExecutionResult, ExecutionStats, PartialResult};

/// Order indices assigned to `worker` out of `workers` for `len` orders.
///
/// `workers` must be at least 1.
pub fn partition_indices(len: usize, worker: usize, workers: usize) -> impl Iterator<Item = usize> {
    (worker..len).step_by(workers)
}

/// Runs the revenue query across worker threads
pub struct PartitionScheduler<'a> {
    tables: &'a TableStore,
    params: &'a QueryParams,
    strategy: LookupStrategy,
}

impl<'a> PartitionScheduler<'a> {
    /// Creates a scheduler using linear-scan lookups
    pub fn new(tables: &'a TableStore, params: &'a QueryParams) -> Self {
        Self {
            tables,
            params,
            strategy: LookupStrategy::default(),
        }
    }

    /// Selects the lookup strategy
    pub fn with_strategy(mut self, strategy: LookupStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Validates parameters, runs all workers, and returns the merged result.
    pub fn execute(&self) -> ExecutorResult<ExecutionResult> {
        self.params.validate()?;

        match self.strategy {
            LookupStrategy::LinearScan => {
                let lookup = ScanLookup::new(self.tables, &self.params.region_name);
                self.run(&lookup)
            }
            LookupStrategy::HashProbe => {
                let index = KeyIndex::build(self.tables, &self.params.region_name);
                let stats = index.stats();
                let customers = stats.customers.to_string();
                let orders = stats.orders_with_lines.to_string();
                let suppliers = stats.suppliers.to_string();
                Logger::trace(
                    "KEY_INDEX_BUILT",
                    &[
                        ("customers", customers.as_str()),
                        ("orders_with_lines", orders.as_str()),
                        ("suppliers", suppliers.as_str()),
                    ],
                );
                self.run(&index)
            }
        }
    }

    fn run<L>(&self, lookup: &L) -> ExecutorResult<ExecutionResult>
    where
        L: JoinLookup<'a> + Sync,
    {
        let workers = self.params.thread_count;
        let shared = Mutex::new(ExecutionResult::empty());

        let outcomes: Vec<ExecutorResult<()>> = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);
            let mut outcomes = Vec::with_capacity(workers);

            for worker in 0..workers {
                let shared = &shared;
                let spawned = thread::Builder::new()
                    .name(format!("q5-worker-{}", worker))
                    .spawn_scoped(scope, move || self.run_worker(worker, lookup, shared));

                match spawned {
                    Ok(handle) => handles.push((worker, handle)),
                    Err(e) => {
                        outcomes.push(Err(ExecutorError::worker_failed(worker, e.to_string())));
                        break;
                    }
                }
            }

            for (worker, handle) in handles {
                let outcome = handle
                    .join()
                    .unwrap_or_else(|_| Err(ExecutorError::worker_failed(worker, "panicked")));
                outcomes.push(outcome);
            }
            outcomes
        });

        if let Some(err) = outcomes.into_iter().find_map(Result::err) {
            return Err(err);
        }

        Ok(shared.into_inner())
    }

    fn run_worker<L>(
        &self,
        worker: usize,
        lookup: &L,
        shared: &Mutex<ExecutionResult>,
    ) -> ExecutorResult<()>
    where
        L: JoinLookup<'a>,
    {
        let engine = JoinEngine::new(lookup, self.params);
        let orders = self.tables.orders.rows();

        let mut partial = PartialResult::new();
        let mut stats = ExecutionStats {
            workers: 1,
            ..ExecutionStats::default()
        };

        for i in partition_indices(orders.len(), worker, self.params.thread_count) {
            engine
                .process_order(&orders[i], &mut partial, &mut stats)
                .map_err(|e| e.in_worker(worker))?;
        }

        {
            let mut merged = shared.lock();
            merged.revenue.merge(&partial);
            merged.stats.absorb(&stats);
        }

        let lines_joined = stats.lines_joined.to_string();
        let nations = partial.len().to_string();
        let orders_scanned = stats.orders_scanned.to_string();
        let worker_id = worker.to_string();
        Logger::trace(
            "WORKER_COMPLETE",
            &[
                ("lines_joined", lines_joined.as_str()),
                ("nations", nations.as_str()),
                ("orders_scanned", orders_scanned.as_str()),
                ("worker", worker_id.as_str()),
            ],
        );

        Ok(())
    }
}

/// Runs the query with the given strategy.
pub fn execute_query5(
    tables: &TableStore,
    params: &QueryParams,
    strategy: LookupStrategy,
) -> ExecutorResult<ExecutionResult> {
    PartitionScheduler::new(tables, params)
        .with_strategy(strategy)
        .execute()
}
