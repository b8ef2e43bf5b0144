//! Telemetry logic.
//! Logging only: the library itself emits `tracing` events, the binary
//! installs the subscriber.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::config::Log;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` overrides `config.level` when set. An invalid filter falls back
/// to `info`.
pub fn setup_logging(config: &Log) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()
}
