//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LoggerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Fixed-width 5-character mnemonic used in the line prefix.
    ///
    /// Padding is part of the wire format: the message starts at a stable
    /// column for a given prefix shape.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO ",
            LogLevel::Warn => "WARN ",
            LogLevel::Error => "ERROR",
        }
    }

    /// xterm-256 palette index for this level.
    pub fn color_code(&self) -> u8 {
        match self {
            LogLevel::Debug => 102,
            LogLevel::Info => 28,
            LogLevel::Warn => 214,
            LogLevel::Error => 196,
        }
    }

    /// Render the level label, wrapped in its color escape when requested.
    pub fn render_label(&self, colored: bool) -> String {
        if colored {
            colorize(self.color_code(), self.label())
        } else {
            self.label().to_string()
        }
    }
}

/// Wrap `s` in an 8-bit foreground color escape sequence.
pub fn colorize(code: u8, s: &str) -> String {
    format!("\x1b[38;5;{}m{}\x1b[0m", code, s)
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
