//! Observability events
//!
//! Every lifecycle step of a query run has a typed event.

use std::fmt;

/// Observable events of a query run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration resolved and validated
    ConfigLoaded,
    /// Configuration rejected
    ConfigRejected,

    /// All tables read into memory
    TablesLoaded,
    /// A table file could not be read
    TablesFailed,

    /// Query execution begins
    QueryStart,
    /// Query finished, result merged
    QueryComplete,
    /// Query aborted (FATAL)
    QueryAborted,

    /// Result file written
    ResultWritten,
    /// Result file could not be written
    ResultFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ConfigRejected => "CONFIG_REJECTED",

            Event::TablesLoaded => "TABLES_LOADED",
            Event::TablesFailed => "TABLES_FAILED",

            Event::QueryStart => "QUERY_BEGIN",
            Event::QueryComplete => "QUERY_COMPLETE",
            Event::QueryAborted => "QUERY_ABORTED",

            Event::ResultWritten => "RESULT_WRITTEN",
            Event::ResultFailed => "RESULT_FAILED",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::QueryAborted)
    }

    /// Returns true if this event reports a failure of any severity
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::ConfigRejected | Event::TablesFailed | Event::QueryAborted | Event::ResultFailed
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
