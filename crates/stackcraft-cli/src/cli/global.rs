//! Flags shared by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Show installer progress (-v), file-level detail (-vv) or everything (-vvv).
    #[arg(
        short = 'v',
        long,
        action = ArgAction::Count,
        global = true,
        long_help = "Raise the diagnostic level printed to stderr:
    -v      one line per installer
    -vv     copied and skipped files, manifest merges
    -vvv    trace"
    )]
    pub verbose: u8,

    /// Print errors only.
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes (also set by NO_COLOR).
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from this file instead of .stackcraft.toml or the
    /// per-user config.
    #[arg(
        short = 'c',
        long,
        global = true,
        value_name = "FILE",
        env = "STACKCRAFT_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Render results for a terminal, a pipe, or a program.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colours and symbols.
    Human,
    /// Uncoloured text.
    Plain,
    /// Machine-readable reports on stdout.
    Json,
}
