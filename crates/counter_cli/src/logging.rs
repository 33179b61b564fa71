//! Tracing subscriber setup.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Resolve the log filter.
///
/// Precedence: `RUST_LOG`, then the `-v` count, then the config file.
#[must_use]
pub fn resolve_filter(env: Option<&str>, verbosity: Option<&str>, configured: &str) -> String {
    env.filter(|value| !value.trim().is_empty())
        .or(verbosity)
        .unwrap_or(configured)
        .to_string()
}

/// Install a stderr `fmt` subscriber with the given filter directive.
///
/// An invalid directive falls back to `warn`. ANSI colours are only used when
/// stderr is a terminal. Installing twice is harmless; the second call is
/// ignored.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
