//! Query parameters
//!
//! Validation here is structural only: non-empty strings and at least one
//! worker. Date order is deliberately not checked; reversed bounds simply
//! select no orders.

use super::errors::{ExecutorError, ExecutorResult};

/// Immutable parameters of one query run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Target region, matched exactly against `r_name`
    pub region_name: String,
    /// Inclusive lower bound on `o_orderdate`
    pub start_date: String,
    /// Inclusive upper bound on `o_orderdate`
    pub end_date: String,
    /// Number of worker threads
    pub thread_count: usize,
}

impl QueryParams {
    /// Creates parameters without validating them.
    pub fn new(
        region_name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        thread_count: usize,
    ) -> Self {
        Self {
            region_name: region_name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            thread_count,
        }
    }

    /// Rejects parameters that cannot describe a query.
    pub fn validate(&self) -> ExecutorResult<()> {
        if self.thread_count == 0 {
            return Err(ExecutorError::invalid_params("thread_count must be >= 1"));
        }
        if self.region_name.is_empty() {
            return Err(ExecutorError::invalid_params("region_name must not be empty"));
        }
        if self.start_date.is_empty() {
            return Err(ExecutorError::invalid_params("start_date must not be empty"));
        }
        if self.end_date.is_empty() {
            return Err(ExecutorError::invalid_params("end_date must not be empty"));
        }
        Ok(())
    }
}
