//! 日志初始化
//!
//! TUI 占用了 stdout，因此日志写入按天滚动的文件：
//! `<data_local_dir>/student-roster/logs/student-roster.log.YYYY-MM-DD`
//!
//! core 通过 `log` 门面输出，由 tracing-subscriber 的 tracing-log 桥接。

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 覆盖配置中日志级别的环境变量
const LOG_ENV: &str = "STUDENT_ROSTER_LOG";
const LOG_FILE_PREFIX: &str = "student-roster.log";

/// 日志目录
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("student-roster")
        .join("logs")
}

/// 初始化日志，返回的 guard 必须存活到程序退出，否则缓冲的日志会丢失
pub fn init_logging(default_directive: &str) -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("Logging to {}", dir.display());
    Ok(guard)
}
