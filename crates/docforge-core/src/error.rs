//! Unified error handling for Docforge Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Docforge Core operations.
#[derive(Debug, Error, Clone)]
pub enum DocforgeError {
    /// Errors from the domain layer (rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl DocforgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in docforge".into(),
                "Please report this issue at: https://github.com/cosecruz/docforge/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::UserInput,
                crate::domain::ErrorCategory::Template => ErrorCategory::Materialization,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// `true` for a user-cancelled prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Cancelled))
    }
}

/// Error categories, mirroring how each failure affects the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid name or cancelled prompt; nothing was written.
    UserInput,
    /// Unusable destination or unknown template; nothing was written.
    Environment,
    /// Copy failed part-way; the destination may be partially populated.
    Materialization,
    /// Install command failed; the destination is fully materialized.
    Execution,
    Internal,
}

/// Convenient result type alias.
pub type DocforgeResult<T> = Result<T, DocforgeError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> DocforgeResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> DocforgeResult<T> {
        self.map_err(|e| DocforgeError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cancelled_is_user_input() {
        let err: DocforgeError = ApplicationError::Cancelled.into();
        assert!(err.is_cancelled());
        assert_eq!(err.category(), ErrorCategory::UserInput);
    }

    #[test]
    fn invalid_name_is_user_input() {
        let err: DocforgeError = DomainError::InvalidProjectName {
            name: "My Docs".into(),
            errors: vec!["name cannot contain capital letters".into()],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::UserInput);
        assert!(!err.is_cancelled());
    }

    #[test]
    fn not_empty_is_environment() {
        let err: DocforgeError = ApplicationError::NotEmpty {
            path: PathBuf::from("/tmp/x"),
            conflicts: vec!["notes.txt".into()],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Environment);
    }

    #[test]
    fn context_wraps_as_internal() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = result.context("reading cwd").unwrap_err();
        assert!(err.to_string().contains("reading cwd: boom"));
    }
}
