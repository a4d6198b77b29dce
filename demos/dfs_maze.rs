//! Terminal DFS maze solver.
//!
//! Run: cargo run --bin dfs-maze -- --help

use std::io;

use clap::Parser;
use crossterm::tty::IsTty;
use dfsmaze_demos::{Cli, run};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut cli = Cli::parse();
    let stdout = io::stdout();
    if !stdout.is_tty() {
        cli.plain = true;
    }

    if let Err(e) = run(&cli, &mut stdout.lock()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
