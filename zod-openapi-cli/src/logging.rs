//! Diagnostic logging setup.
//!
//! Logs go to stderr so converted documents on stdout stay clean.
//! `RUST_LOG` is honoured unless `--verbose` or `--quiet` is given.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither flags nor `RUST_LOG` say otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter directive forced by the command-line flags, if any.
pub fn flag_directive(verbose: u8, quiet: bool) -> Option<&'static str> {
    match (quiet, verbose) {
        (true, _) => Some("error"),
        (false, 0) => None,
        (false, 1) => Some("zod_openapi=debug,zod_openapi_cli=debug"),
        (false, _) => Some("zod_openapi=trace,zod_openapi_cli=trace"),
    }
}

/// Build the effective filter.
pub fn build_filter(verbose: u8, quiet: bool) -> EnvFilter {
    match flag_directive(verbose, quiet) {
        Some(directive) => EnvFilter::new(directive),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: u8, quiet: bool) {
    let _ = fmt()
        .with_env_filter(build_filter(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
