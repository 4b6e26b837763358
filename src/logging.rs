//! Diagnostic logging to stderr.
//!
//! Formatted records go to stdout; everything `glug` has to say about its
//! own operation goes through [`tracing`] to stderr so the two never mix.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Install the global stderr subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise only warnings are shown, or
/// everything down to `debug` when `verbose` is set.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
