// ============================================================================
// domain/error.rs - DOMAIN RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {}", errors.join("; "))]
    InvalidProjectName { name: String, errors: Vec<String> },

    #[error("Could not determine a project name from '{path}'")]
    UnnamedPath { path: String },

    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Template Content Errors
    // ========================================================================
    #[error("Invalid package.json: {reason}")]
    InvalidManifest { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, errors } => {
                let mut out = vec![format!("Could not create a project called '{name}':")];
                out.extend(errors.iter().map(|e| format!("  • {e}")));
                out.push("Use lowercase letters, digits, '-', '_' and '.'".into());
                out.push("Examples: my-docs, api-reference, handbook".into());
                out
            }
            Self::UnnamedPath { path } => vec![
                format!("'{path}' does not end in a directory name"),
                "Pass a directory such as ./my-docs".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("A value for '{field}' is required"),
                "Example: create-docforge my-docs".into(),
            ],
            Self::InvalidManifest { .. } => vec![
                "The template's package.json could not be read".into(),
                "Please report this issue or use a different template".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::UnnamedPath { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::InvalidManifest { .. } => ErrorCategory::Template,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
}
