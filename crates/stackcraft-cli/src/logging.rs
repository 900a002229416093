//! Diagnostics for the `stackcraft` binary.
//!
//! The library crates emit `tracing` events (one per installer at INFO,
//! copied/skipped files and merges at DEBUG); this module decides which of
//! them reach stderr.  `-v` raises the threshold one step per flag, `--quiet`
//! pins it at ERROR, and a `RUST_LOG` directive replaces the whole filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the derived level.
const CRATES: &[&str] = &["stackcraft", "stackcraft_core", "stackcraft_adapters"];

/// Install the stderr subscriber.  Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(directives(level))?,
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(level >= LevelFilter::DEBUG)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    [LevelFilter::WARN, LevelFilter::INFO, LevelFilter::DEBUG]
        .get(usize::from(args.verbose))
        .copied()
        .unwrap_or(LevelFilter::TRACE)
}

fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
