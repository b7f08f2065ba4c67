// qtremux-cli/src/logging.rs
//
// Logging initialization for the CLI. The application uses env_logger with
// the RUST_LOG environment variable:
// - RUST_LOG=info (default): normal operation logs
// - RUST_LOG=debug: detailed debugging, including raw engine output
//
// The --verbose flag raises the default filter to debug without requiring
// RUST_LOG to be set.

/// Initializes the global logger.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .format_timestamp_secs()
    .init();
}
