//! 日志初始化
//!
//! 所有代码通过 `log` 门面记录日志；这里安装 `tracing-subscriber`，
//! 经 `tracing-log` 桥接收 `log` 记录，并由 `tracing-appender` 写入日志文件。
//! 终端被 TUI 占用，因此不输出到 stdout。

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

/// 日志文件名
pub const LOG_FILE_NAME: &str = "ao-admin-tui.log";

/// 未设置 `RUST_LOG` 时的默认过滤器
const DEFAULT_FILTER: &str = "info";

/// 日志目录
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ao-admin-tui")
}

/// 初始化日志
///
/// 返回的 guard 必须一直持有到程序退出，否则缓冲中的日志会丢失。
pub fn init_logging() -> Result<WorkerGuard> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    log::info!("Logging to {}", log_dir.join(LOG_FILE_NAME).display());
    Ok(guard)
}
