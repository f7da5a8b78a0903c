//! Logging capability passed explicitly into the version calculation
//!
//! The calculation never reaches for a global logger. Callers hand it a
//! [`Logger`], so independent calculations (one per sub-project) can run
//! side by side with their own sinks.
//!
//! - [`TracingLogger`] forwards to the `tracing` macros (used by the binary)
//! - [`NullLogger`] discards everything
//! - [`MemoryLogger`] records entries for inspection

use crate::error::{MinVerError, Result};
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

/// Tracing target used for every message emitted by [`TracingLogger`]
pub const LOG_TARGET: &str = "minver";

/// Leveled sink for calculation diagnostics
///
/// `is_trace_enabled` and `is_debug_enabled` let the caller skip building
/// expensive messages that would be discarded anyway.
pub trait Logger: Send + Sync {
    fn is_trace_enabled(&self) -> bool;

    fn is_debug_enabled(&self) -> bool;

    fn trace(&self, message: &str);

    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    /// Warning with a stable numeric code
    fn warn(&self, code: u32, message: &str);
}

/// How much the calculation reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// `tracing-subscriber` filter directive for the `minver` target
    pub fn filter_directive(&self) -> String {
        format!("{}={}", LOG_TARGET, self)
    }
}

impl FromStr for Verbosity {
    type Err = MinVerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "e" | "error" => Ok(Verbosity::Error),
            "w" | "warn" | "warning" => Ok(Verbosity::Warn),
            "i" | "info" => Ok(Verbosity::Info),
            "d" | "debug" => Ok(Verbosity::Debug),
            "t" | "trace" => Ok(Verbosity::Trace),
            _ => Err(MinVerError::config(format!(
                "Invalid verbosity '{}' - expected error, warn, info, debug or trace",
                s
            ))),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            Verbosity::Error => "error",
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        };
        f.write_str(level)
    }
}

/// Forwards to `tracing` under the `minver` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn is_trace_enabled(&self) -> bool {
        tracing::enabled!(target: LOG_TARGET, tracing::Level::TRACE)
    }

    fn is_debug_enabled(&self) -> bool {
        tracing::enabled!(target: LOG_TARGET, tracing::Level::DEBUG)
    }

    fn trace(&self, message: &str) {
        tracing::trace!(target: LOG_TARGET, "{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: LOG_TARGET, "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: LOG_TARGET, "{}", message);
    }

    fn warn(&self, code: u32, message: &str) {
        tracing::warn!(target: LOG_TARGET, code, "MINVER{}: {}", code, message);
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn is_trace_enabled(&self) -> bool {
        false
    }

    fn is_debug_enabled(&self) -> bool {
        false
    }

    fn trace(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn warn(&self, _code: u32, _message: &str) {}
}

/// Severity of a recorded entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
}

/// A message captured by [`MemoryLogger`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub code: Option<u32>,
    pub message: String,
}

/// Records entries at or above a minimum level
#[derive(Debug)]
pub struct MemoryLogger {
    level: LogLevel,
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new(level: LogLevel) -> Self {
        MemoryLogger {
            level,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything recorded so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Messages recorded at exactly `level`
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message)
            .collect()
    }

    fn record(&self, level: LogLevel, code: Option<u32>, message: &str) {
        if level < self.level {
            return;
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(LogEntry {
                level,
                code,
                message: message.to_string(),
            });
        }
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        MemoryLogger::new(LogLevel::Trace)
    }
}

impl Logger for MemoryLogger {
    fn is_trace_enabled(&self) -> bool {
        self.level <= LogLevel::Trace
    }

    fn is_debug_enabled(&self) -> bool {
        self.level <= LogLevel::Debug
    }

    fn trace(&self, message: &str) {
        self.record(LogLevel::Trace, None, message);
    }

    fn debug(&self, message: &str) {
        self.record(LogLevel::Debug, None, message);
    }

    fn info(&self, message: &str) {
        self.record(LogLevel::Info, None, message);
    }

    fn warn(&self, code: u32, message: &str) {
        self.record(LogLevel::Warn, Some(code), message);
    }
}
