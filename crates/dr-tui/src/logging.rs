//! Log subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DICEROLL_LOG";

/// The filter directive to install, if any.
///
/// An explicit `DICEROLL_LOG` always wins. Otherwise line-oriented commands
/// log warnings, and the interactive screen logs nothing, because stderr
/// shares the terminal with the alternate screen.
pub fn directive(env: Option<String>, interactive: bool) -> Option<String> {
    match env {
        Some(filter) => Some(filter),
        None if interactive => None,
        None => Some("warn".to_string()),
    }
}

/// Install a stderr `fmt` subscriber according to [`directive`].
pub fn init(interactive: bool) {
    if let Some(filter) = directive(std::env::var(LOG_ENV).ok(), interactive) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .init();
    }
}
