#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;

use std::fs;
use std::path::Path;

use anyhow::anyhow;
use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;

/// Maps a configured level name to a filter. Unknown names mean info.
pub fn level_filter(level: &str) -> LevelFilter {
    return level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
}

/// Sends JSON log lines to `log_file` through a background writer. The
/// terminal belongs to the clock, so nothing is logged to stdout or stderr.
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init(log_file: &Path, level: &str) -> Result<WorkerGuard> {
    let dir = log_file
        .parent()
        .filter(|e| return !e.as_os_str().is_empty())
        .unwrap_or_else(|| return Path::new("."));
    let file_name = log_file
        .file_name()
        .ok_or_else(|| anyhow!("log file '{}' has no file name", log_file.display()))?;
    fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .json()
        .with_max_level(level_filter(level))
        .with_writer(writer)
        .try_init()
        .map_err(|err| return anyhow!(err))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), log_file = %log_file.display(), "logging started");

    return Ok(guard);
}

/// Like [`init`], but a log file that cannot be opened only costs the logs.
/// The warning goes to stderr before the terminal switches screens.
pub fn init_or_warn(log_file: &Path, level: &str) -> Option<WorkerGuard> {
    match init(log_file, level) {
        Ok(guard) => return Some(guard),
        Err(err) => {
            eprintln!(
                "shellklok: logging disabled, cannot write '{}': {err}",
                log_file.display()
            );
            return None;
        }
    }
}
