//! Logging setup for the CLI binary.

/// Initialize the logger with default settings for terminal use.
/// Uses INFO level by default; the RUST_LOG environment variable can
/// override it.
pub fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
