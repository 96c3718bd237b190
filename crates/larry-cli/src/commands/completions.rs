use std::io::Write;

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::CliError;

/// Write the completion script for `args.shell` to stdout.
pub fn run(args: CompletionsArgs) -> Result<(), CliError> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    let mut stdout = std::io::stdout().lock();

    clap_complete::generate(args.shell, &mut command, name, &mut stdout);
    stdout.flush().map_err(|e| CliError::Other(format!("failed to write completions: {e}")))
}
