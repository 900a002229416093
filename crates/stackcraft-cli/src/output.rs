//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            // JSON output owns stdout; chatter would corrupt it.
            quiet: args.quiet || resolved_format == OutputFormat::Json,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.symbol_line("\u{2713}", msg, |s| s.green().bold().to_string(), |m| {
            m.green().to_string()
        })
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.symbol_line("\u{26a0}", msg, |s| s.yellow().bold().to_string(), |m| {
            m.yellow().to_string()
        })
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.symbol_line("\u{2139}", msg, |s| s.blue().bold().to_string(), |m| {
            m.blue().to_string()
        })
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Dimmed `label: value` row, used for configuration summaries.
    pub fn field(&self, label: &str, value: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("  {label:<12} {value}")
        } else {
            format!("  {:<12} {}", label.dimmed(), value.bold())
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON on stdout.  Printed even in quiet mode since it is the
    /// command's result, not commentary.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// A spinner on stderr for long-running steps, or `None` when output is
    /// not going to an interactive terminal.
    pub fn spinner(&self, msg: &str) -> Option<ProgressBar> {
        if self.quiet || self.resolved_format != OutputFormat::Human || !io::stderr().is_terminal()
        {
            return None;
        }
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}").ok()?;
        let bar = ProgressBar::new_spinner()
            .with_style(style)
            .with_message(msg.to_owned());
        bar.enable_steady_tick(Duration::from_millis(80));
        Some(bar)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn symbol_line(
        &self,
        symbol: &str,
        msg: &str,
        paint_symbol: impl Fn(&str) -> String,
        paint_msg: impl Fn(&str) -> String,
    ) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            format!("{} {}", paint_symbol(symbol), paint_msg(msg))
        };
        self.term.write_line(&line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
