//! Timestamped console logging.
//!
//! Every line has the shape `[<RFC 3339 UTC timestamp>] [<TAG>] <message>`,
//! with any supplementary values appended space-separated. `info` and `warn`
//! go to the standard output sink, `error` to the error sink. The configured
//! level gates `debug` output only: the other three operations always emit.

mod level;

pub use level::{LogLevel, ParseLevelError};

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};

type Sink = Mutex<Box<dyn Write + Send>>;

/// Console logger with a fixed severity level.
///
/// Constructed once at startup from the configuration snapshot and passed by
/// reference to whoever needs it. The level cannot be changed afterwards.
pub struct Logger {
    level: LogLevel,
    out: Sink,
    err: Sink,
}

impl Logger {
    /// Logger writing to the process's stdout and stderr.
    pub fn new(level: LogLevel) -> Self {
        Self::with_sinks(level, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Logger writing to arbitrary sinks. Tests use this to capture output.
    pub fn with_sinks(
        level: LogLevel,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            level,
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// The level this logger was constructed with.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Emit an info line. Always written.
    pub fn info(&self, message: &str, extra: &[&dyn fmt::Display]) {
        self.write(LogLevel::Info, &self.out, message, extra);
    }

    /// Emit a warn line. Always written.
    pub fn warn(&self, message: &str, extra: &[&dyn fmt::Display]) {
        self.write(LogLevel::Warn, &self.out, message, extra);
    }

    /// Emit an error line on the error sink. Always written.
    pub fn error(&self, message: &str, extra: &[&dyn fmt::Display]) {
        self.write(LogLevel::Error, &self.err, message, extra);
    }

    /// Emit a debug line, or do nothing unless the configured level is
    /// exactly `Debug`. This is an equality gate, not an ordered filter:
    /// the level has no effect on the other three operations.
    pub fn debug(&self, message: &str, extra: &[&dyn fmt::Display]) {
        if self.level != LogLevel::Debug {
            return;
        }
        self.write(LogLevel::Debug, &self.out, message, extra);
    }

    fn write(&self, level: LogLevel, sink: &Sink, message: &str, extra: &[&dyn fmt::Display]) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut line = format!("[{}] [{}] {}", timestamp, level.tag(), message);
        for value in extra {
            line.push(' ');
            line.push_str(&value.to_string());
        }

        // Stream errors have nowhere to be reported; the line is dropped.
        if let Ok(mut sink) = sink.lock() {
            let _ = writeln!(sink, "{}", line);
        }
    }
}
