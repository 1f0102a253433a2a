use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default file name when `--log-file` points at a directory-like path.
const DEFAULT_LOG_FILE: &str = "graphql-basics.log";

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging for resolvers and the store
/// * `log_file` - Optional path to log file. If None, logs only to stderr
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // stdout is reserved for query output
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module path
        .compact(); // Use compact format

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    match log_file.map(|path| split_log_path(&path)) {
        Some((dir, file_name)) => {
            let _ = std::fs::create_dir_all(&dir);
            let file_appender = tracing_appender::rolling::daily(dir, file_name);

            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // No colors in file
                .json(); // One JSON object per event

            subscriber.with(file_layer).init();
        }
        None => subscriber.init(),
    }
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("graphql_basics={}", level)
}

/// Splits a log path into the rotation directory and the file name prefix.
fn split_log_path(path: &Path) -> (PathBuf, OsString) {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| OsString::from(DEFAULT_LOG_FILE));
    (dir, file_name)
}
