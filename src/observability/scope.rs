//! Begin/complete logging around one unit of work
//!
//! - `{name}_BEGIN` on creation
//! - `{name}_COMPLETE` with `elapsed_ms` on `complete`
//! - `{name}_FAILED` on `fail` / `fail_fatal`
//! - `{name}_INCOMPLETE` if dropped without either

use std::time::Instant;

use super::logger::{Logger, Severity};

/// A scope that logs its own start, end and duration
pub struct ObservationScope {
    name: String,
    timer: Timer,
    fields: Vec<(String, String)>,
    finished: bool,
}

impl ObservationScope {
    /// Opens a scope and logs `{name}_BEGIN`
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_fields(name, &[])
    }

    /// Opens a scope whose fields are repeated on every line it logs
    pub fn with_fields(name: impl Into<String>, fields: &[(&str, &str)]) -> Self {
        let name = name.into();
        Logger::info(&format!("{}_BEGIN", name), fields);

        Self {
            name,
            timer: Timer::new(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            finished: false,
        }
    }

    /// Logs `{name}_COMPLETE`
    pub fn complete(self) {
        self.complete_with_fields(&[]);
    }

    /// Logs `{name}_COMPLETE` with extra fields
    pub fn complete_with_fields(mut self, extra_fields: &[(&str, &str)]) {
        self.finished = true;
        self.emit(Severity::Info, "COMPLETE", extra_fields);
    }

    /// Logs `{name}_FAILED` at ERROR level
    pub fn fail(mut self, reason: &str) {
        self.finished = true;
        self.emit(Severity::Error, "FAILED", &[("reason", reason)]);
    }

    /// Logs `{name}_FAILED` at FATAL level
    pub fn fail_fatal(mut self, reason: &str) {
        self.finished = true;
        self.emit(Severity::Fatal, "FAILED", &[("reason", reason)]);
    }

    fn emit(&self, severity: Severity, suffix: &str, extra_fields: &[(&str, &str)]) {
        let event = format!("{}_{}", self.name, suffix);
        let elapsed = self.timer.elapsed_ms();

        let mut all_fields: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        all_fields.extend(extra_fields.iter().copied());
        all_fields.push(("elapsed_ms", elapsed.as_str()));

        if severity >= Severity::Error {
            Logger::log_stderr(severity, &event, &all_fields);
        } else {
            Logger::log(severity, &event, &all_fields);
        }
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.finished {
            self.emit(
                Severity::Warn,
                "INCOMPLETE",
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}

/// A simple duration timer for logging elapsed time
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed milliseconds as a string
    pub fn elapsed_ms(&self) -> String {
        self.start.elapsed().as_millis().to_string()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
