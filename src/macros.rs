//! Logging macros for ergonomic message formatting.
//!
//! Two call shapes per level, mirroring the [`Logger`](crate::Logger)
//! emission methods:
//!
//! - `debug!`/`info!`/`warn!`/`error!` take any number of displayable
//!   values and space-join them.
//! - `debugf!`/`infof!`/`warnf!`/`errorf!` take a format template and
//!   arguments, like `println!`.
//!
//! Macros expand at the call site, so call-site reporting (when enabled)
//! names the user's file and line.
//!
//! # Examples
//!
//! ```
//! use console_logger::prelude::*;
//! use console_logger::{info, infof};
//!
//! let logger = Logger::new();
//!
//! // Space-joined values
//! info!(logger, "listening on port", 8080);
//!
//! // println!-style formatting
//! infof!(logger, "listening on port {}", 8080);
//! ```

/// Log a format template at an explicit level.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::logf;
/// logf!(logger, LogLevel::Info, "simple message");
/// logf!(logger, LogLevel::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

/// Log space-joined values at an explicit level.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::log;
/// log!(logger, LogLevel::Info, "queued", 3, "jobs");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($value:expr),+ $(,)?) => {
        $logger.log($level, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Log space-joined values at debug level.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($value),+)
    };
}

/// Log space-joined values at info level.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::info;
/// info!(logger, "application started");
/// info!(logger, "processing", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($value),+)
    };
}

/// Log space-joined values at warn level.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($value),+)
    };
}

/// Log space-joined values at error level.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($value:expr),+ $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($value),+)
    };
}

/// Log a format template at debug level.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let mut logger = Logger::new();
/// # logger.set_min_level(LogLevel::Debug);
/// use console_logger::debugf;
/// debugf!(logger, "counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a format template at info level.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a format template at warn level.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::warnf;
/// warnf!(logger, "retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log a format template at error level.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
