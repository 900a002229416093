//! Unified error handling for Stackcraft Core.
//!
//! Wraps domain and application errors behind one type so ports and
//! services can share a single `Result` alias.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stackcraft Core operations.
#[derive(Debug, Error, Clone)]
pub enum StackcraftError {
    /// Errors from the domain layer (invalid input, malformed documents).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, pre-flight, external commands).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StackcraftError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Stackcraft".into(),
                "Please report this issue at: https://github.com/stackcraft/stackcraft/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// True for failures raised before anything was written to disk.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::Domain(
                DomainError::EmptyProjectName
                    | DomainError::InvalidCharacters { .. }
                    | DomainError::InvalidProjectName { .. }
            ) | Self::Application(
                ApplicationError::DestinationNotEmpty { .. }
                    | ApplicationError::ConflictingFiles { .. }
            )
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    External,
    Internal,
}

/// Convenient result type alias.
pub type StackResult<T> = Result<T, StackcraftError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> StackResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> StackResult<T> {
        self.map_err(|e| StackcraftError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
