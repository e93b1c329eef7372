//! File-based logging using simplelog
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/gh-issue-tui/ on Linux)
//!
//! Logging to a file keeps the terminal free for the TUI.

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "gh-issue-tui.log";

fn log_file_path() -> PathBuf {
    if cfg!(debug_assertions) {
        PathBuf::from(LOG_FILE_NAME)
    } else {
        gh_issue_config::cache_dir()
            .map(|dir| dir.join(LOG_FILE_NAME))
            .unwrap_or_else(|_| PathBuf::from(LOG_FILE_NAME))
    }
}

/// Initialize file-based logging
///
/// Level comes from `RUST_LOG` (default: info).
/// Returns the path to the log file.
pub fn init() -> PathBuf {
    let log_file = log_file_path();

    let level = std::env::var("RUST_LOG")
        .map(|v| match v.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        })
        .unwrap_or(LevelFilter::Info);

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file).expect("Failed to create log file");
    WriteLogger::init(level, config, file).expect("Failed to initialize logger");

    log_file
}
