//! The `completions` subcommand: emit shell completion scripts.

use anyhow::Result;
use clap::CommandFactory as _;

use crate::cli::{Cli, CompletionsOpts};

/// Run the completions command: emit a completion script to stdout.
///
/// # Errors
///
/// Infallible in practice; the `Result` keeps the handler signature uniform
/// with the other subcommands.
pub fn run(opts: &CompletionsOpts) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(opts.shell, &mut cmd, "saltern", &mut std::io::stdout());
    Ok(())
}
