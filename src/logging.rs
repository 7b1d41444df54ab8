use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::get_log_file_path;

/// Selection changes and settings saves log at debug, so they are on by default.
const DEFAULT_FILTER: &str = "info,gameselect=debug";

/// Logs go to `gameselect.log` next to the config file and to stderr.
/// stdout is left alone, the launcher prints the chosen game id there.
/// Keep the returned guard until exit or the tail of the file is lost.
pub fn init_logging() -> WorkerGuard {
    let log_path = get_log_file_path();
    let log_folder = log_path.parent().map(|p| p.to_path_buf()).unwrap_or_default();
    let log_name = log_path.file_name().unwrap_or_default();
    let _ = std::fs::create_dir_all(&log_folder);

    let file_appender = tracing_appender::rolling::never(&log_folder, log_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        log_path = %log_path.display(),
        "Logging to file"
    );

    guard
}
