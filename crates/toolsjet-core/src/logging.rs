//! Tracing setup shared by the ToolsJet binaries

use tracing_subscriber::EnvFilter;

use crate::Config;

/// Initialize logging to stderr.
///
/// RUST_LOG wins when set; otherwise the config's `log_filter` is used.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
