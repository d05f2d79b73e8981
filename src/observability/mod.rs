//! Observability for query runs
//!
//! - Structured logging (JSON lines)
//! - Typed lifecycle events
//! - Scopes that log begin/complete pairs with durations
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No background threads
//! 4. Deterministic field order
//!
//! # Usage
//!
//! ```ignore
//! use tpchq5::observability::{Logger, Event, ObservationScope};
//!
//! Logger::info("QUERY_COMPLETE", &[("nations", "5")]);
//!
//! let scope = ObservationScope::new("LOAD");
//! // ... do work ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::{ObservationScope, Timer};

/// Log a lifecycle event with fields
///
/// Failures go to stderr, everything else to stdout.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    if event.is_fatal() {
        Logger::fatal(event.as_str(), fields);
    } else if event.is_failure() {
        Logger::error(event.as_str(), fields);
    } else {
        Logger::info(event.as_str(), fields);
    }
}
