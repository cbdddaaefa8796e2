use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

use super::filter::DebugOnlyFilter;
#[cfg(feature = "prod")]
use super::filter::ErrorOnlyFilter;
use super::filter::ErrorWarnFilter;
#[cfg(feature = "dev")]
use super::filter::InfoOnlyFilter;
use super::format::MizanFormat;
use crate::config::LoggingConfig;
use crate::err_with_loc;

/// Keeps the non-blocking log writers alive. Drop it only at process exit.
pub struct TracingGuard {
    _guards: Vec<WorkerGuard>,
}

pub fn setup_tracing(
    engine_name: &str,
    logging_config: &LoggingConfig,
) -> crate::Result<TracingGuard> {
    let base_logs_dir = Path::new(logging_config.directory.as_deref().unwrap_or(".logs"));

    let logs_dirs = [base_logs_dir.to_path_buf(), base_logs_dir.join("debug"), base_logs_dir.join("error")];
    for dir in &logs_dirs {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| err_with_loc!(format!("failed to create logs directory {}: {}", dir.display(), e)))?;
        }
    }

    let mut guards = Vec::new();

    #[cfg(feature = "dev")]
    let info_appender = RollingFileAppender::new(Rotation::DAILY, base_logs_dir, format!("{}.log", engine_name));
    let debug_appender =
        RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("debug"), format!("{}.log", engine_name));
    let error_appender =
        RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("error"), format!("{}.log", engine_name));

    #[cfg(feature = "dev")]
    let (non_blocking_info, info_guard) = tracing_appender::non_blocking(info_appender);
    let (non_blocking_debug, debug_guard) = tracing_appender::non_blocking(debug_appender);
    let (non_blocking_error, error_guard) = tracing_appender::non_blocking(error_appender);

    #[cfg(feature = "dev")]
    guards.push(info_guard);
    guards.push(debug_guard);
    guards.push(error_guard);

    let format = MizanFormat {
        engine_name: engine_name.to_string(),
    };

    let subscriber = tracing_subscriber::registry()
        // DEBUG log file - debug only
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_debug)
                .with_filter(DebugOnlyFilter),
        )
        // ERROR log file - warn and error
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_error)
                .with_filter(ErrorWarnFilter),
        );

    #[cfg(feature = "prod")]
    let subscriber = subscriber
        // Terminal - errors only, stderr keeps stdout clean for the report
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(true)
                .event_format(format.clone())
                .with_writer(std::io::stderr)
                .with_filter(ErrorOnlyFilter),
        );

    #[cfg(feature = "dev")]
    let subscriber = subscriber
        // Terminal - INFO
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(true)
                .event_format(format.clone())
                .with_writer(std::io::stderr)
                .with_filter(InfoOnlyFilter),
        )
        // INFO log file
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_info)
                .with_filter(InfoOnlyFilter),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| err_with_loc!(format!("failed to install tracing subscriber: {}", e)))?;

    tracing::info!("{}_logging_started::debug_logs::{}", engine_name, base_logs_dir.join("debug").display());
    tracing::info!("{}_logging_started::error_logs::{}", engine_name, base_logs_dir.join("error").display());

    Ok(TracingGuard { _guards: guards })
}
