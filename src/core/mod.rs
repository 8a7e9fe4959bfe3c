//! Core logger types

pub mod caller;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use log_level::{colorize, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use timestamp::TIME_FORMAT;
