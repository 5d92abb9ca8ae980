//! Tracing subscriber setup.
//!
//! Verbosity is driven by `-v` flags; `RUST_LOG` overrides the derived
//! filter when set.

use crate::cli::GlobalArgs;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global tracing subscriber.
///
/// Called once in `main` before any command runs.  Logs go to stderr so
/// they never interleave with user-facing output on stdout.
pub fn init_logging(args: &GlobalArgs) {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "nodeforge={level},nodeforge_core={level},nodeforge_adapters={level}"
        ))
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(args.verbose >= 2)
        .with_ansi(!args.no_color)
        .init();
}

/// Map verbosity flags to a tracing level name.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
