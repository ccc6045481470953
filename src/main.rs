//! CLI entry point for the state formula generator.

use anyhow::Result;
use clap::Parser;

use saltern::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new(args.verbose);

    match args.command {
        cli::Command::Generate(opts) => commands::generate::run(&args.global, &opts, &log),
        cli::Command::Check => commands::check::run(&args.global, &log),
        cli::Command::Completions(opts) => commands::completions::run(&opts),
    }
}
