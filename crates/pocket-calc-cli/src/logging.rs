//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Builds the log filter
///
/// `RUST_LOG` wins when set; otherwise the level follows verbosity.
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Initialise the tracing subscriber on stderr
///
/// Strips timestamps and target names to keep CLI output clean. A second
/// call keeps the first subscriber.
pub fn init_tracing(verbosity: Verbosity) {
    let ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .without_time()
        .with_target(false)
        .try_init();
    if let Err(err) = installed {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}
