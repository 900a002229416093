// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the CLI re-renders them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Catalog Errors
    // ========================================================================
    #[error("Unknown feature '{value}'")]
    UnknownFeature { value: String },

    #[error("Unknown framework '{value}'")]
    UnknownFramework { value: String },

    #[error("No pinned version for package '{name}'")]
    UnknownPackage { name: String },

    // ========================================================================
    // Project Name / Path Errors
    // ========================================================================
    #[error("Project name must not be empty")]
    EmptyProjectName,

    #[error("Invalid project input '{input}': only letters, digits, '-', '_', '/' and '.' are allowed")]
    InvalidCharacters { input: String },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    // ========================================================================
    // Document Errors
    // ========================================================================
    #[error("Malformed manifest: {reason}")]
    MalformedManifest { reason: String },

    #[error("Could not serialize {document}: {reason}")]
    Serialization { document: &'static str, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownFeature { value } => vec![
                format!("'{value}' is not in the feature catalog"),
                "Try: stackcraft list".into(),
            ],
            Self::UnknownFramework { .. } => {
                vec!["Supported frameworks: hono, express, bun-native".into()]
            }
            Self::EmptyProjectName => vec![
                "Pass a project name, e.g. stackcraft new my-api".into(),
                "Use '.' to scaffold into the current directory".into(),
            ],
            Self::InvalidCharacters { .. } => vec![
                "Use a simple name like 'my-api' or a relative path like 'apps/my-api'".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Names are kebab-cased: lowercase letters, digits and single hyphens".into(),
                "A name may not start or end with '-'".into(),
            ],
            Self::MalformedManifest { .. } => vec![
                "package.json must be a JSON object".into(),
                "Fix or remove the file and run again".into(),
            ],
            Self::UnknownPackage { .. } | Self::Serialization { .. } => {
                vec!["This is a bug; please report it".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName
            | Self::InvalidCharacters { .. }
            | Self::InvalidProjectName { .. }
            | Self::UnknownFramework { .. }
            | Self::UnknownFeature { .. } => ErrorCategory::Validation,
            Self::MalformedManifest { .. } => ErrorCategory::Conflict,
            Self::UnknownPackage { .. } | Self::Serialization { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_errors_are_validation() {
        let err = DomainError::InvalidProjectName {
            name: "-api".into(),
            reason: "must not start with '-'".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("-api"));
    }

    #[test]
    fn every_error_has_a_suggestion() {
        let errors = [
            DomainError::UnknownFeature { value: "x".into() },
            DomainError::EmptyProjectName,
            DomainError::MalformedManifest { reason: "x".into() },
            DomainError::UnknownPackage { name: "x".into() },
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty(), "{err:?}");
        }
    }
}
