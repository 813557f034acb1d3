use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to a JSON log file (rotated daily)
/// * `stderr` - Also log to stderr; off while the TUI owns the terminal
pub fn init(verbose: bool, log_file: Option<PathBuf>, stderr: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("placebook={}", default_level)));

    let stderr_layer = stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let file_layer = log_file.map(|log_path| {
        let dir = log_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        let _ = std::fs::create_dir_all(&dir);

        let file_name = log_path
            .file_name()
            .map(|f| f.to_os_string())
            .unwrap_or_else(|| "placebook.log".into());
        let file_appender = tracing_appender::rolling::daily(dir, file_name);

        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json()
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}
