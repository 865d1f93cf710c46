use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log file name prefix inside the log directory. Files are rotated daily.
pub const LOG_FILE_PREFIX: &str = "labyrinth.log";

/// Route `tracing` output to a daily rolling file under `log_dir`.
///
/// The terminal is the user interface, so nothing is logged to stdout. The level comes
/// from `RUST_LOG` and defaults to `info`. Keep the returned guard alive until exit,
/// dropping it flushes the pending log lines.
pub fn init_logging(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_thread_ids(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(guard)
}
