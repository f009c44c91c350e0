//! Process-wide logging setup.
//!
//! Three sinks share one line format:
//!
//! - stdout, level controlled by `RUST_LOG` (default `info`, `debug` with
//!   `--verbose`)
//! - `event.log`, the informational/debug event stream
//! - `error.log`, errors only
//!
//! File sinks are non-blocking; the returned [`LogGuards`] keeps their
//! writer threads flushing and must be held for the process lifetime.
//! There is no teardown since the process only exits via halt.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

const EVENT_LOG_FILE: &str = "event.log";
const ERROR_LOG_FILE: &str = "error.log";

/// Keeps the non-blocking log writers alive.
pub struct LogGuards {
    _guards: Vec<WorkerGuard>,
}

/// Install the global subscriber. Call once, before any logging occurs.
///
/// If the log directory cannot be created the process continues with
/// console-only logging rather than failing startup.
pub fn init(log_dir: &Path, verbose: bool) -> LogGuards {
    let default_directive = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let stdout_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_writer(io::stdout)
        .with_filter(env_filter);

    let mut guards = Vec::new();

    let (event_layer, error_layer) = match fs::create_dir_all(log_dir) {
        Ok(()) => {
            let event_appender = tracing_appender::rolling::never(log_dir, EVENT_LOG_FILE);
            let (event_writer, event_guard) = tracing_appender::non_blocking(event_appender);
            guards.push(event_guard);

            let error_appender = tracing_appender::rolling::never(log_dir, ERROR_LOG_FILE);
            let (error_writer, error_guard) = tracing_appender::non_blocking(error_appender);
            guards.push(error_guard);

            let event_layer = fmt::layer()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_writer(event_writer)
                .with_filter(LevelFilter::DEBUG);

            let error_layer = fmt::layer()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_writer(error_writer)
                .with_filter(LevelFilter::ERROR);

            (Some(event_layer), Some(error_layer))
        }
        Err(err) => {
            eprintln!(
                "failed to create log directory '{}', continuing with console logging only: {err}",
                log_dir.display()
            );
            (None, None)
        }
    };

    registry()
        .with(stdout_layer)
        .with(event_layer)
        .with(error_layer)
        .init();

    LogGuards { _guards: guards }
}
