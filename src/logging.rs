//! Logging backend
//!
//! Routes `log` records either into the dashboard's activity panel or to
//! stderr, with the threshold taken from `RUST_LOG`.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::env;
use std::fmt::Display;
use std::sync::{Arc, Mutex};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

pub fn get_rust_log_level() -> LogLevel {
    let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    parse_rust_log_level(&rust_log)
}

pub fn parse_rust_log_level(rust_log: &str) -> LogLevel {
    // Handle common RUST_LOG formats
    let level_str = rust_log
        .split(',')
        .next()
        .unwrap_or(rust_log)
        .split('=')
        .next_back()
        .unwrap_or(rust_log)
        .to_lowercase();

    match level_str.as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info, // Default to info if parsing fails
    }
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

/// A single line of the activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// "YYYY-MM-DD HH:MM:SS", local time
    pub timestamp: String,
    pub level: LogLevel,
    pub msg: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, msg: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            level,
            msg: msg.into(),
        }
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.timestamp, self.level, self.msg)
    }
}

/// Bounded buffer shared between the logger and the dashboard renderer.
pub type ActivityLog = Arc<Mutex<VecDeque<LogEntry>>>;

/// Append to the activity log, dropping the oldest entry once full.
pub fn push_activity(log: &ActivityLog, entry: LogEntry) {
    if let Ok(mut entries) = log.lock() {
        if entries.len() >= MAX_ACTIVITY_LOGS {
            entries.pop_front();
        }
        entries.push_back(entry);
    }
}

/// Where log records end up.
#[derive(Debug, Clone)]
pub enum LogSink {
    /// The TUI owns the terminal, so records are kept for the activity panel.
    Activity(ActivityLog),
    /// Headless output; stdout stays reserved for the report.
    Stderr,
}

#[derive(Debug)]
struct DashboardLogger {
    threshold: LogLevel,
    sink: LogSink,
}

impl log::Log for DashboardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
            && should_log(metadata.level().into(), self.threshold)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry::new(record.level().into(), record.args().to_string());
        match &self.sink {
            LogSink::Activity(log) => push_activity(log, entry),
            LogSink::Stderr => eprintln!("{}", entry),
        }
    }

    fn flush(&self) {}
}

/// Installs the global logger. Can only succeed once per process.
pub fn init_logging(sink: LogSink) -> Result<(), SetLoggerError> {
    let threshold = get_rust_log_level();
    log::set_boxed_logger(Box::new(DashboardLogger { threshold, sink }))?;
    log::set_max_level(threshold.into());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_parse_rust_log_level() {
        assert_eq!(parse_rust_log_level("debug"), LogLevel::Debug);
        assert_eq!(parse_rust_log_level("info"), LogLevel::Info);
        assert_eq!(parse_rust_log_level("warn"), LogLevel::Warn);
        assert_eq!(parse_rust_log_level("error"), LogLevel::Error);
        assert_eq!(parse_rust_log_level("trace"), LogLevel::Trace);

        // Test with module-specific formats
        assert_eq!(
            parse_rust_log_level("bike_sharing_dashboard=debug"),
            LogLevel::Debug
        );
        assert_eq!(
            parse_rust_log_level("bike_sharing_dashboard=debug,polars=info"),
            LogLevel::Debug
        );

        // Test default
        assert_eq!(parse_rust_log_level("invalid"), LogLevel::Info);
    }

    #[test]
    fn test_should_log() {
        assert!(should_log(LogLevel::Error, LogLevel::Debug));
        assert!(should_log(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_log(LogLevel::Debug, LogLevel::Error));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let log: ActivityLog = Arc::new(Mutex::new(VecDeque::new()));
        for i in 0..MAX_ACTIVITY_LOGS + 5 {
            push_activity(&log, LogEntry::new(LogLevel::Info, format!("entry {}", i)));
        }

        let entries = log.lock().unwrap();
        assert_eq!(entries.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(entries.front().unwrap().msg, "entry 5");
    }

    #[test]
    // The logger writes into the activity buffer without being installed globally.
    fn test_logger_routes_records_to_activity_sink() {
        let log: ActivityLog = Arc::new(Mutex::new(VecDeque::new()));
        let logger = DashboardLogger {
            threshold: LogLevel::Info,
            sink: LogSink::Activity(log.clone()),
        };

        logger.log(
            &Record::builder()
                .args(format_args!("range changed"))
                .level(log::Level::Info)
                .target(env!("CARGO_CRATE_NAME"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("too chatty"))
                .level(log::Level::Debug)
                .target(env!("CARGO_CRATE_NAME"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("someone else"))
                .level(log::Level::Error)
                .target("other_crate")
                .build(),
        );

        let entries = log.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].msg, "range changed");
        assert_eq!(entries[0].level, LogLevel::Info);
    }
}
