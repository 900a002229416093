//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A fresh destination directory already has content.
    #[error("Cannot create project: directory \"{}\" is not empty", path.display())]
    DestinationNotEmpty { path: PathBuf },

    /// Scaffolding in place would overwrite files that already exist.
    #[error(
        "Cannot scaffold into {}: conflicting files already exist: {}",
        root.display(),
        display_paths(paths)
    )]
    ConflictingFiles { root: PathBuf, paths: Vec<PathBuf> },

    /// The base template for the chosen framework is missing.
    #[error("Base template not found at {}", path.display())]
    BaseTemplateMissing { path: PathBuf },

    /// An external program could not be started.
    #[error("Failed to run '{command}': {reason}")]
    CommandFailed { command: String, reason: String },

    /// The package manager install step failed.
    #[error("Dependency installation failed: {reason}")]
    DependencyInstallFailed { reason: String },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::DestinationNotEmpty { .. } => vec![
                "Choose a different project name".into(),
                "Or empty the directory first".into(),
            ],
            Self::ConflictingFiles { .. } => vec![
                "Move or remove the listed files and run again".into(),
                "Or scaffold into a new directory instead of '.'".into(),
            ],
            Self::BaseTemplateMissing { .. } => vec![
                "Set STACKCRAFT_TEMPLATES_DIR to your templates directory".into(),
                "Or set templates.local_path in the config file".into(),
            ],
            Self::CommandFailed { command, .. } => vec![format!(
                "Check that '{}' is installed and on your PATH",
                command.split_whitespace().next().unwrap_or(command)
            )],
            Self::DependencyInstallFailed { .. } => vec![
                "Run 'bun install' manually inside the project".into(),
                "Or pass --no-install to skip this step".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::DestinationNotEmpty { .. } | Self::ConflictingFiles { .. } => {
                ErrorCategory::Conflict
            }
            Self::BaseTemplateMissing { .. } => ErrorCategory::NotFound,
            Self::CommandFailed { .. } | Self::DependencyInstallFailed { .. } => {
                ErrorCategory::External
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_message_names_the_directory() {
        let err = ApplicationError::DestinationNotEmpty {
            path: PathBuf::from("my-api"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot create project: directory \"my-api\" is not empty"
        );
    }

    #[test]
    fn conflict_message_lists_every_path() {
        let err = ApplicationError::ConflictingFiles {
            root: PathBuf::from("/work"),
            paths: vec![PathBuf::from("package.json"), PathBuf::from(".env")],
        };
        let msg = err.to_string();
        assert!(msg.contains("package.json"));
        assert!(msg.contains(".env"));
    }

    #[test]
    fn install_failure_points_to_manual_install() {
        let err = ApplicationError::DependencyInstallFailed {
            reason: "exit status 1".into(),
        };
        assert_eq!(err.category(), ErrorCategory::External);
        assert!(err.suggestions().iter().any(|s| s.contains("bun install")));
    }
}
