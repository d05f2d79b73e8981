//! Query executor for the revenue-by-nation query
//!
//! Computes, for one region and one order-date range, the total revenue per
//! supplier nation.
//!
//! # Execution Flow (strict order)
//!
//! 1. Validate parameters (nothing is scanned on failure)
//! 2. Build lookups (linear scans, or the optional key index)
//! 3. Spawn `thread_count` workers over strided order partitions
//! 4. Each worker joins its orders into a private partial result
//! 5. Each worker merges its partial result under the shared lock
//! 6. Join every worker, fail if any failed
//! 7. Return the merged result
//!
//! # Invariants
//!
//! - Tables are only ever borrowed immutably during execution
//! - Partitions are disjoint and cover the order table
//! - The final result is mutated only inside the merge critical section
//! - A corrupt monetary column fails the query; missing data never does

pub(crate) mod columns;
mod errors;
mod filters;
mod join;
mod lookup;
mod params;
mod result;
mod scheduler;

pub use errors::{ExecutorError, ExecutorErrorCode, ExecutorResult, Severity};
pub use filters::RowPredicate;
pub use join::JoinEngine;
pub use lookup::{JoinLookup, LookupStrategy, ScanLookup};
pub use params::QueryParams;
pub use result::{ExecutionResult, ExecutionStats, NationRevenue, PartialResult};
pub use scheduler::{execute_query5, partition_indices, PartitionScheduler};
