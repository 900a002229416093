//! `stackcraft`: bootstrap a Bun backend from a base template plus the
//! integrations you pick.
//!
//! `main` parses flags, installs the tracing subscriber, loads
//! [`AppConfig`], then hands off to one handler in [`commands`].  Every
//! failure comes back as a [`CliError`], which decides the message on stderr
//! and the process exit status:
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! |  0   | Success                                        |
//! |  1   | Filesystem, package manager or other failure   |
//! |  2   | Bad arguments, unknown feature, conflicts      |
//! |  3   | No template directory found                    |
//! |  4   | Unreadable or invalid configuration            |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Values from a local .env become ordinary environment variables, so
    // STACKCRAFT__* overrides can live there too.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Also reached for --help and --version, which exit 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("stackcraft: {e}");
        return ExitCode::FAILURE;
    }

    let verbose = cli.global.verbose > 0;
    match AppConfig::load(cli.global.config.as_ref())
        .map_err(|e| CliError::ConfigError {
            message: format!("{e:#}"),
            source: None,
        })
        .and_then(|config| dispatch(cli, config))
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, verbose),
    }
}

#[instrument(skip_all)]
fn dispatch(cli: Cli, config: AppConfig) -> CliResult<()> {
    let output = OutputManager::new(&cli.global, &config);
    debug!(format = ?output.format(), quiet = output.is_quiet(), "Output configured");

    match cli.command {
        Commands::New(args) => commands::new::execute(args, config, output),
        Commands::List(args) => commands::list::execute(args, output),
        Commands::Init(args) => commands::init::execute(args, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(sub) => commands::config::execute(sub, config, cli.global.config, output),
    }
}

/// Log `err`, describe it on stderr, and pick the exit status.
fn report(err: &CliError, verbose: bool) -> ExitCode {
    err.log();
    let text = if std::io::stderr().is_terminal() {
        err.render(verbose, true)
    } else {
        err.render(verbose, false)
    };
    eprint!("{text}");
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_comes_from_the_package() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn every_subcommand_is_registered() {
        let cmd = Cli::command();
        let names: Vec<&str> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(names, ["new", "list", "init", "completions", "config"]);
    }
}
