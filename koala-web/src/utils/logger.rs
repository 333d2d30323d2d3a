//! Logging Infrastructure
//!
//! Console output by default; a daily rolling file when a log directory is
//! configured. `RUST_LOG` overrides `LOG_LEVEL` when set.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> anyhow::Result<()> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        std::fs::create_dir_all(log_path)?;
        let file_appender = tracing_appender::rolling::daily(log_path, "koala-web");
        subscriber
            .with_ansi(false)
            .with_writer(file_appender)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;
        return Ok(());
    }

    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;
    Ok(())
}
