mod generate;

use crate::generator::{DEFAULT_EDITS, DEFAULT_ITEMS};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prez-names")]
#[command(version)]
#[command(
    about = "Generate an INSERT OR REPLACE workload of recombined presidential names",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Options for the default action: writing the SQL script
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of distinct row ids (0-indexed)
    #[arg(long, default_value_t = DEFAULT_ITEMS)]
    pub items: usize,

    /// Number of passes over all row ids
    #[arg(long, default_value_t = DEFAULT_EDITS)]
    pub edits: usize,

    /// Random seed for reproducibility (random if not specified)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output SQL file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show progress on stderr
    #[arg(short, long)]
    pub progress: bool,

    /// Print seed and statistics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output a JSON summary (stdout with --output, stderr otherwise)
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None => generate::run(cli.generate),
        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "prez-names", &mut io::stdout());
            Ok(())
        }
    }
}
