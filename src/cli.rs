//! Command-line interface definition and argument parsing.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Top-level CLI entry point for the state formula generator.
#[derive(Parser, Debug)]
#[command(
    name = "saltern",
    about = "Generate SaltStack state formulas from declarative manifests",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Path to the manifest file
    #[arg(short, long, global = true, default_value = "Saltfile")]
    pub manifest: std::path::PathBuf,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate state artifacts from the manifest
    Generate(GenerateOpts),
    /// Parse and render the manifest without writing anything
    Check,
    /// Generate shell completions
    Completions(CompletionsOpts),
}

/// Options for the `generate` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct GenerateOpts {
    /// Directory to write generated artifacts into
    #[arg(short, long, default_value = ".")]
    pub output: std::path::PathBuf,

    /// Preview writes without applying
    #[arg(short = 'd', long)]
    pub dry_run: bool,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
