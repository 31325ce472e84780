use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable summary
    Terminal,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "typequiz")]
#[command(about = "Sixteen-type cognitive function quiz and scoring engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the nearest .typequiz.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take the quiz interactively on the terminal
    Take {
        /// Seed for a reproducible question order
        #[arg(long)]
        seed: Option<u64>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Score a file of answers and print the resulting type
    Score {
        /// TOML or JSON file with `answers = [{ id, value }]`
        #[arg(short, long)]
        answers: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Print a randomized question order
    Sequence {
        /// Seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,

        /// Question bank file (overrides config)
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Create a default .typequiz.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
