//! Tracing subscriber setup for the command line binary

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LOG_ENV;

/// Initialize tracing with the `RESONITE_DOWNLOADER_LOG` environment variable.
///
/// Defaults to `info` (or `debug` when `verbose` is set). Output goes to stderr
/// through a non-blocking writer; keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init(verbose: bool, json: bool) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_target(false)
                    .with_writer(writer),
            )
            .init();
    }

    guard
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}
