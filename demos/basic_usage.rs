//! Basic usage of the console logger.
//!
//! Run with: `cargo run --example basic_usage`

use console_logger::prelude::*;
use console_logger::{debugf, error, info, infof, warnf};
use std::time::Duration;

fn main() {
    let mut logger = Logger::new();

    // Default minimum level is Info, so this is suppressed.
    debugf!(logger, "not shown");

    infof!(logger, "starting with {} workers", 4);
    info!(logger, "queued", 3, "jobs");

    // Tag lines from this subsystem.
    logger.set_tag("fetcher");
    warnf!(logger, "slow response from {}", "example.com");

    // Time a region of work.
    logger.start();
    std::thread::sleep(Duration::from_millis(120));
    infof!(logger, "fetch complete");
    logger.stop();

    // Call-site reporting and structured inspection.
    logger.set_caller_info(true);
    logger.set_min_level(LogLevel::Debug);
    logger.inspect(&("job", 7, true));

    error!(logger, "giving up after", 3, "retries");
}
