//! # Console Logger
//!
//! A minimal leveled console logger writing one line per call to standard
//! error.
//!
//! ## Features
//!
//! - **Four ordered severities**: `Debug < Info < Warn < Error`, with a
//!   configurable minimum below which calls are suppressed
//! - **Elapsed-time markers**: `start()`/`stop()` a timer to annotate every
//!   line with seconds elapsed, for ad hoc timing of a code region
//! - **Tags**: a bracketed label distinguishing logger instances
//! - **Colors**: per-level ANSI 256-color labels, toggleable
//! - **Call sites**: optional `[file:line]` of the originating call
//!
//! ## Example
//!
//! ```
//! use console_logger::prelude::*;
//! use console_logger::{infof, warnf};
//!
//! let mut logger = Logger::new();
//! logger.set_tag("fetcher");
//!
//! logger.start();
//! infof!(logger, "fetching {} urls", 3);
//! logger.stop();
//!
//! warnf!(logger, "slow response from {}", "example.com");
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{LogLevel, Logger, LoggerBuilder, LoggerError, Result};
}

pub use crate::core::{colorize, LogLevel, Logger, LoggerBuilder, LoggerError, Result, TIME_FORMAT};
