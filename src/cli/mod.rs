//! CLI interface for dfa-reach
//!
//! Provides argument definitions, config handling, command implementations
//! and the process-level plumbing (logging, exit codes) shared by the
//! `dfa-reach` and `dfa-tool` binaries.

pub mod args;
pub mod commands;
pub mod detect;
pub mod paths;

pub use args::{Cli, Commands, ReachCli};
pub use detect::{detect_format, FormatDetection};
pub use paths::{config_dir, PersistentConfig};

use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Exit code for failures without a more specific classification
pub const EXIT_FAILURE: i32 = 1;

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `warn`, `debug`
/// or `trace`.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed (e.g. in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Exit code for a failed run.
///
/// The first [`crate::Error`] in the cause chain decides; anything else is
/// [`EXIT_FAILURE`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<crate::Error>())
        .map(crate::Error::exit_code)
        .unwrap_or(EXIT_FAILURE)
}

/// Print an error and its causes to stderr and return its exit code.
pub fn report(err: &anyhow::Error) -> i32 {
    eprintln!("{}: {:#}", "Error".red().bold(), err);
    exit_code(err)
}
