//! Logging setup.
//!
//! Log lines go to stderr so they never mix with listings a caller prints on
//! stdout.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `config.log_level` is used. Returns
/// `false` if a subscriber was already installed, in which case nothing changes.
pub fn init_tracing(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
