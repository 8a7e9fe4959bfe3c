//! Main logger implementation

use super::{caller, error::Result, log_level::LogLevel, timestamp};
use parking_lot::Mutex;
use std::fmt;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::panic::Location;
use std::time::{Duration, Instant};

/// A leveled console logger writing one line per call to standard error.
///
/// Each emitted line carries a local timestamp, an optional elapsed-time
/// marker while the timer runs, an optional bracketed tag, the severity
/// label (colorized when enabled), and optionally the originating call
/// site, followed by the caller's message.
///
/// Configuration fields are expected to be set once at startup; the final
/// write is serialized through a mutex so concurrent emission calls never
/// interleave bytes within a line.
pub struct Logger {
    min_level: LogLevel,
    tag: Option<String>,
    colored: bool,
    caller_info: bool,
    started: Option<Instant>,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// Create a logger with defaults: color on, minimum level `Info`,
    /// no tag, caller info off, timer stopped, writing to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a logger with the same defaults but a custom sink.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            min_level: LogLevel::Info,
            tag: None,
            colored: true,
            caller_info: false,
            started: None,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use console_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .tag("worker")
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    #[must_use]
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Set the bracketed tag included in every line. An empty tag clears it.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        self.tag = if tag.is_empty() { None } else { Some(tag) };
    }

    pub fn clear_tag(&mut self) {
        self.tag = None;
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn set_colored(&mut self, colored: bool) {
        self.colored = colored;
    }

    #[must_use]
    pub fn colored(&self) -> bool {
        self.colored
    }

    pub fn set_caller_info(&mut self, caller_info: bool) {
        self.caller_info = caller_info;
    }

    #[must_use]
    pub fn caller_info(&self) -> bool {
        self.caller_info
    }

    /// Start the timer; every line emitted while it runs carries an
    /// elapsed-seconds field. Restarting resets the origin.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stop the timer, removing the elapsed-seconds field from subsequent
    /// lines. Safe to call in any order with [`start`](Self::start).
    pub fn stop(&mut self) {
        self.started = None;
    }

    /// Time since [`start`](Self::start), while the timer runs.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.started.map(|started| started.elapsed())
    }

    /// Emit space-joined values at the given level.
    ///
    /// The prefix counts as the first join element, matching the
    /// unformatted variadic call shape.
    #[track_caller]
    pub fn log(&self, level: LogLevel, parts: &[&dyn fmt::Display]) {
        let location = Location::caller();
        if level < self.min_level {
            return;
        }
        let mut line = self.log_prefix(level, location);
        for part in parts {
            let _ = write!(line, " {}", part);
        }
        self.write_line(&line);
    }

    /// Emit a preformatted message at the given level.
    #[track_caller]
    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        let location = Location::caller();
        if level < self.min_level {
            return;
        }
        let mut line = self.log_prefix(level, location);
        line.push(' ');
        let _ = write!(line, "{}", args);
        self.write_line(&line);
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, &[&message]);
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, &[&message]);
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, &[&message]);
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, &[&message]);
    }

    /// Log the structured (`{:?}`) representation of a value at `Debug`
    /// severity, for ad hoc introspection.
    #[track_caller]
    pub fn inspect<T: fmt::Debug>(&self, value: &T) {
        self.logf(LogLevel::Debug, format_args!("{:?}", value));
    }

    /// Flush the underlying sink.
    ///
    /// The emission path flushes per line and swallows IO errors; this is
    /// the one operation that surfaces them.
    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    /// Build the line prefix: timestamp, elapsed marker, tag, level label,
    /// call site. Segments are space-joined and optional ones are omitted
    /// entirely rather than rendered empty.
    fn log_prefix(&self, level: LogLevel, location: &Location<'_>) -> String {
        let mut prefix = timestamp::local_timestamp();
        if let Some(started) = self.started {
            let _ = write!(prefix, " {}", timestamp::format_elapsed(started.elapsed()));
        }
        if let Some(tag) = &self.tag {
            let _ = write!(prefix, " [{}]", tag);
        }
        prefix.push(' ');
        prefix.push_str(&level.render_label(self.colored));
        if self.caller_info {
            if let Some(site) = caller::format_call_site(location) {
                let _ = write!(prefix, " {}", site);
            }
        }
        prefix
    }

    /// One line per call. Write failures on stderr are not surfaced.
    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("tag", &self.tag)
            .field("colored", &self.colored)
            .field("caller_info", &self.caller_info)
            .field("timer_running", &self.started.is_some())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use console_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .tag("ingest")
///     .colored(false)
///     .caller_info(true)
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    tag: Option<String>,
    colored: bool,
    caller_info: bool,
    writer: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            tag: None,
            colored: true,
            caller_info: false,
            writer: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the tag included in every line
    #[must_use = "builder methods return a new value"]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.tag = if tag.is_empty() { None } else { Some(tag) };
        self
    }

    /// Enable or disable colorized level labels
    #[must_use = "builder methods return a new value"]
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Enable or disable call-site reporting
    #[must_use = "builder methods return a new value"]
    pub fn caller_info(mut self, caller_info: bool) -> Self {
        self.caller_info = caller_info;
        self
    }

    /// Replace the stderr sink with a custom writer
    #[must_use = "builder methods return a new value"]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = match self.writer {
            Some(writer) => Logger::with_writer(writer),
            None => Logger::new(),
        };
        logger.min_level = self.min_level;
        logger.tag = self.tag;
        logger.colored = self.colored;
        logger.caller_info = self.caller_info;
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
