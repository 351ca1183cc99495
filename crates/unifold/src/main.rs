mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, ConfigArgs, ConfigCommand};
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Reported without parsing the file, so a broken config can still be located.
    if let Command::Config(ConfigArgs {
        command: ConfigCommand::Path,
    }) = cli.command
    {
        commands::config_cmd::print_path();
        return Ok(());
    }

    let cfg = unifold_config::load_config()?;

    match cli.command {
        Command::Config(ref args) => commands::config_cmd::handle(args, &cli.global, cfg),
        cmd => {
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(&cmd, &cli.global, &cfg)
        }
    }
}
