//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stackcraft",
    bin_name = "stackcraft",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Bootstrap a production-ready Bun backend",
    long_about = "Stackcraft generates a Bun backend project: a framework base \
                  template plus the database, auth, AI, email and other \
                  integrations you pick, with package.json, .env.example and \
                  docker-compose.yml merged for you.",
    after_help = "EXAMPLES:\n\
        \x20 stackcraft new my-api -F postgres -F jwt -F zod\n\
        \x20 stackcraft new my-api --framework express -F mongodb,redis --no-install\n\
        \x20 stackcraft new . -F sqlite --yes\n\
        \x20 stackcraft list --category database\n\
        \x20 stackcraft completions bash > /usr/share/bash-completion/completions/stackcraft",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new backend project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 stackcraft new my-api -F postgres -F vitest\n\
            \x20 stackcraft new ../services/billing --framework bun-native -F bullmq\n\
            \x20 stackcraft new my-api -i"
    )]
    New(NewArgs),

    /// List frameworks and features.
    #[command(
        visible_alias = "ls",
        about = "List frameworks and features",
        after_help = "EXAMPLES:\n\
            \x20 stackcraft list\n\
            \x20 stackcraft list --category auth\n\
            \x20 stackcraft list --format json"
    )]
    List(ListArgs),

    /// Initialise a Stackcraft configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stackcraft init           # default location\n\
            \x20 stackcraft init --local   # .stackcraft.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackcraft completions bash > ~/.local/share/bash-completion/completions/stackcraft\n\
            \x20 stackcraft completions zsh  > ~/.zfunc/_stackcraft\n\
            \x20 stackcraft completions fish > ~/.config/fish/completions/stackcraft.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Stackcraft configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stackcraft config get defaults.framework\n\
            \x20 stackcraft config set defaults.install false\n\
            \x20 stackcraft config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stackcraft new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name or path.  A plain name creates `./name`, `.` scaffolds
    /// into the current directory, and a path like `../foo` places the
    /// project one level up.
    #[arg(value_name = "NAME", help = "Project name, path, or '.'")]
    pub name: String,

    /// Base framework.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        value_enum,
        help = "Base framework [default: from config, else hono]"
    )]
    pub framework: Option<FrameworkArg>,

    /// Features to include.
    #[arg(
        short = 'F',
        long = "feature",
        value_name = "FEATURE",
        value_delimiter = ',',
        help = "Feature to include (repeatable, or comma-separated)"
    )]
    pub features: Vec<String>,

    /// Do not run `bun install`.
    #[arg(long = "no-install", help = "Skip dependency installation")]
    pub no_install: bool,

    /// Do not initialise a git repository.
    #[arg(long = "no-git", help = "Skip git initialisation")]
    pub no_git: bool,

    /// Leave database engines out of docker-compose.yml.
    #[arg(long = "no-docker-db", help = "Do not containerise databases")]
    pub no_docker_db: bool,

    /// Skip the app service and Dockerfile.
    #[arg(long = "no-docker-app", help = "Do not containerise the app")]
    pub no_docker_app: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview the installer plan without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Pick framework and features from prompts.
    #[arg(
        short = 'i',
        long = "interactive",
        help = "Choose framework and features interactively"
    )]
    pub interactive: bool,
}

/// Base frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrameworkArg {
    Hono,
    Express,
    #[value(name = "bun-native", alias = "bun")]
    BunNative,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackcraft list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show one category.
    #[arg(
        short = 'C',
        long = "category",
        value_name = "CATEGORY",
        help = "Only show features of this category"
    )]
    pub category: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One identifier per line.
    List,
    /// JSON object.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackcraft init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.stackcraft.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackcraft completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stackcraft config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.framework`.
        key: String,
    },
    /// Set a configuration key in the config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["stackcraft", "new", "my-api", "-F", "postgres"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name, "my-api");
        assert_eq!(args.features, ["postgres"]);
        assert!(args.framework.is_none());
    }

    #[test]
    fn features_accept_commas_and_repeats() {
        let cli = Cli::parse_from([
            "stackcraft", "new", "api", "-F", "postgres,redis", "--feature", "jwt",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.features, ["postgres", "redis", "jwt"]);
    }

    #[test]
    fn bun_alias_selects_bun_native() {
        let cli = Cli::parse_from(["stackcraft", "new", "api", "-f", "bun"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.framework, Some(FrameworkArg::BunNative));
    }

    #[test]
    fn opt_out_flags_parse() {
        let cli = Cli::parse_from([
            "stackcraft",
            "new",
            "api",
            "--no-install",
            "--no-git",
            "--no-docker-db",
            "--no-docker-app",
            "--dry-run",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert!(args.no_install && args.no_git && args.no_docker_db && args.no_docker_app);
        assert!(args.dry_run);
    }

    #[test]
    fn unknown_framework_is_rejected_by_clap() {
        assert!(Cli::try_parse_from(["stackcraft", "new", "api", "-f", "fastify"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["stackcraft", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
