use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::output::OutputMode;

/// Compiler for the larry entity DSL.
///
/// Larry reads a compact, indentation-based description of database
/// entities, their fields and relations, and resolves it into a complete
/// entity graph: foreign keys inferred, many-to-many link tables created.
#[derive(Parser)]
#[command(
    name = "larry",
    version,
    about = "Compiler for the larry entity DSL",
    after_help = "Use 'larry <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: LARRY_CONFIG]
    #[arg(short = 'c', long = "config", global = true, env = "LARRY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Human)]
    pub format: OutputMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse a DSL file and print the resolved entity graph
    Parse(ParseArgs),

    /// Show the version and release notes
    Version,

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for `larry parse`.
#[derive(Args)]
pub struct ParseArgs {
    /// DSL file to compile
    pub file: PathBuf,

    /// Print the parsed graph back as canonical DSL
    #[arg(long = "print")]
    pub print: bool,
}

/// Arguments for `larry completions`.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
