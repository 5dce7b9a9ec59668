//! Logging init: plain stderr, filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Default directives when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn,dygang_links=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Stdout stays reserved for links.
///
/// Calling it twice is harmless; the second install is ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
