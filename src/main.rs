use tracing_subscriber::EnvFilter;

/// Diagnostics stay silent unless this filter is set, since the host may surface stderr.
const LOG_FILTER_ENV: &str = "GEMINI_ACTIVITY_LOG";

fn main() {
    init_logging();
    gemini_activity_log::cli::run();
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
