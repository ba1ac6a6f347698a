//! dfa-reach - decide whether two words are acceptable for a DFA
//!
//! Prints `Words are acceptable` or `Words are not acceptable`. Failures print
//! their cause to stderr and exit with a code identifying the error kind.

use clap::Parser;
use std::process;

use dfa_reach::cli::commands::cmd_check;
use dfa_reach::cli::{init_tracing, report, ReachCli};

fn main() {
    let cli = ReachCli::parse();
    init_tracing(cli.global.verbose);

    if let Err(e) = cmd_check(&cli.check, cli.global.config.as_deref()) {
        process::exit(report(&e));
    }
}
