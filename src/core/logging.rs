//! Logging setup
//!
//! Installs a `tracing` subscriber that writes to stderr so stdout stays
//! machine-readable. `ADFMARK_LOG` takes an `EnvFilter` directive and
//! overrides the level picked from the CLI flags.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "ADFMARK_LOG";

/// Default level for the given verbosity flags
pub fn default_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize the global subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    // Err only when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
