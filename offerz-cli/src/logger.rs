//! Logging setup
//!
//! Diagnostics go to stderr so page output on stdout stays clean. With a log
//! directory, a daily rolling file gets a copy.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

const DEFAULT_FILTER: &str = "warn,offerz=info,offerz_client=info";

/// Install the global subscriber. Keep the returned guard alive until exit
/// or buffered file output is lost.
pub fn init_logger(log_dir: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let Some(dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer())
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(dir)?;
    let file_appender = rolling::daily(dir, "offerz.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(non_blocking_file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer())
        .init();

    tracing::debug!(path = %dir.display(), "File logging enabled");
    Ok(Some(guard))
}

fn stderr_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(true)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
}
