mod cli;
mod commands;
mod config;
#[allow(unused_assignments)]
mod diagnostic;
mod error;
mod logging;
mod output;

use clap::Parser;

use crate::error::{CliError, ExitCode};

fn main() {
    let cli = cli::Cli::parse();
    let output = output::OutputContext::from_global(&cli.global);

    let result = run(cli, &output);

    match result {
        Ok(()) => std::process::exit(ExitCode::Success as i32),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}

fn run(cli: cli::Cli, output: &output::OutputContext) -> Result<(), CliError> {
    let config = config::load_config(cli.global.config.as_deref())?;

    let level = logging::log_level(
        cli.global.verbose,
        cli.global.quiet,
        config.log.level.as_deref(),
    );
    logging::init_tracing(&level);

    match cli.command {
        cli::Commands::Parse(args) => commands::parse::run(args, &config, output),
        cli::Commands::Version => commands::version::run(output),
        cli::Commands::Completions(args) => commands::completions::run(args),
    }
}
