//! Error handling for the Stackcraft CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use stackcraft_core::error::StackcraftError;

pub use stackcraft_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input caught before the core is reached.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `stackcraft-core`.
    #[error("Scaffolding failed: {0}")]
    Core(#[from] StackcraftError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,

    /// No directory with a `base/` template could be found.
    #[error("Template directory not found")]
    TemplatesNotFound { searched: Option<PathBuf> },

    /// Feature not compiled into this build.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<stackcraft_core::domain::DomainError> for CliError {
    fn from(err: stackcraft_core::domain::DomainError) -> Self {
        CliError::Core(err.into())
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Use 'stackcraft init --force' to write a fresh config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::Cancelled => vec!["No changes were made".into()],

            Self::TemplatesNotFound { searched } => {
                let mut suggestions = Vec::new();
                if let Some(path) = searched {
                    suggestions.push(format!("'{}' has no base/ directory", path.display()));
                }
                suggestions.push(format!(
                    "Point {} at a directory containing base/ and extras/",
                    stackcraft_adapters::TEMPLATES_DIR_ENV
                ));
                suggestions.push("Or set it once: stackcraft config set templates.local_path <DIR>".into());
                suggestions
            }

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{feature}' feature is not available in this build"),
                format!("Reinstall with it enabled: cargo install stackcraft-cli --features {feature}"),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::External | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
            Self::TemplatesNotFound { .. } => ErrorCategory::NotFound,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Error text for stderr: the message, its causes when `verbose`, then
    /// suggestions.  `color` switches ANSI styling on.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        );

        if verbose {
            for cause in self.causes() {
                out.push_str(&paint(&format!("  caused by: {cause}"), |t| {
                    t.dimmed().to_string()
                }));
                out.push('\n');
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push('\n');
            out.push_str(&paint("Suggestions:", |t| t.yellow().bold().to_string()));
            out.push('\n');
            for line in suggestions {
                out.push_str(&format!("  {line}\n"));
            }
        }

        if !verbose && self.source().is_some() {
            out.push('\n');
            out.push_str(&paint("Re-run with -v to see the underlying cause.", |t| {
                t.dimmed().to_string()
            }));
            out.push('\n');
        }

        out
    }

    fn causes(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(self.source(), |&err| err.source())
    }

    /// Record the failure in the diagnostic log; user errors are warnings.
    pub fn log(&self) {
        let category = self.category();
        let causes: Vec<String> = self.causes().map(ToString::to_string).collect();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, ?causes, "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, ?causes, "{self}");
            }
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, conflicts, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, StackcraftError> {
    /// Core errors already carry their own context.
    fn with_cli_context<F, S>(self, _f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(CliError::Core)
    }
}
