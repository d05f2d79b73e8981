//! Executor error types
//!
//! Error codes:
//! - Q5_INVALID_PARAMS (ERROR)
//! - Q5_CORRUPT_FIELD (FATAL)
//! - Q5_WORKER_FAILED (FATAL)

use std::fmt;

/// Severity levels for executor errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Query was rejected, nothing ran
    Error,
    /// Query aborted mid-execution, no result produced
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Executor-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorErrorCode {
    /// Query parameters rejected before any scan
    InvalidParams,
    /// Monetary column present but not a number
    CorruptField,
    /// A worker thread could not be spawned or panicked
    WorkerFailed,
}

impl ExecutorErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorErrorCode::InvalidParams => "Q5_INVALID_PARAMS",
            ExecutorErrorCode::CorruptField => "Q5_CORRUPT_FIELD",
            ExecutorErrorCode::WorkerFailed => "Q5_WORKER_FAILED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            ExecutorErrorCode::InvalidParams => Severity::Error,
            _ => Severity::Fatal,
        }
    }
}

impl fmt::Display for ExecutorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Executor error type with full context
#[derive(Debug)]
pub struct ExecutorError {
    /// Error code
    code: ExecutorErrorCode,
    /// Human-readable message
    message: String,
    /// Worker index if the error was raised inside a worker
    worker: Option<usize>,
}

impl ExecutorError {
    /// Create an invalid parameters error
    pub fn invalid_params(reason: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::InvalidParams,
            message: reason.into(),
            worker: None,
        }
    }

    /// Create a corrupt field error (FATAL)
    pub fn corrupt_field(column: &str, value: &str, order_key: &str) -> Self {
        Self {
            code: ExecutorErrorCode::CorruptField,
            message: format!(
                "Column {} has non-numeric value '{}' (order {})",
                column, value, order_key
            ),
            worker: None,
        }
    }

    /// Create a worker failure error (FATAL)
    pub fn worker_failed(worker: usize, reason: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::WorkerFailed,
            message: format!("Worker {} failed: {}", worker, reason.into()),
            worker: Some(worker),
        }
    }

    /// Attaches the worker index, keeping an existing one.
    pub fn in_worker(mut self, worker: usize) -> Self {
        self.worker.get_or_insert(worker);
        self
    }

    /// Returns the error code
    pub fn code(&self) -> ExecutorErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the worker index if applicable
    pub fn worker(&self) -> Option<usize> {
        self.worker
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for ExecutorError {}

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutorError>;
