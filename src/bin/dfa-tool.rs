//! dfa-tool - inspect, query and convert deterministic finite automata

use clap::Parser;
use std::process;

use dfa_reach::cli::commands;
use dfa_reach::cli::{init_tracing, report, Cli};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    if let Err(e) = commands::execute(cli.command, cli.global.config.as_deref()) {
        process::exit(report(&e));
    }
}
