//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

const BIN_NAME: &str = "stackcraft";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut stdout = std::io::stdout();
    match args.shell {
        Shell::Bash => emit(shells::Bash, &mut stdout),
        Shell::Zsh => emit(shells::Zsh, &mut stdout),
        Shell::Fish => emit(shells::Fish, &mut stdout),
        Shell::PowerShell => emit(shells::PowerShell, &mut stdout),
        Shell::Elvish => emit(shells::Elvish, &mut stdout),
    }
    Ok(())
}

fn emit(shell: impl Generator, buf: &mut dyn std::io::Write) {
    generate(shell, &mut Cli::command(), BIN_NAME, buf);
}
