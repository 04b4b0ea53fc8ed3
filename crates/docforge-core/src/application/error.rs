//! Application layer errors.
//!
//! These errors represent failures in orchestration, not rule violations.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the scaffolding pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The user dismissed a prompt.
    #[error("Operation cancelled")]
    Cancelled,

    /// A prompt could not be shown (e.g. no terminal attached).
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The destination exists but cannot be written to.
    #[error("The directory {path} is not writable")]
    Unwritable { path: PathBuf },

    /// The missing destination could not be created.
    #[error("Could not create {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// The destination exists but is a file.
    #[error("{path} already exists and is not a directory")]
    NotADirectory { path: PathBuf },

    /// The destination contains entries that could be overwritten.
    #[error("The directory {path} contains files that could conflict: {}", conflicts.join(", "))]
    NotEmpty {
        path: PathBuf,
        conflicts: Vec<String>,
    },

    /// No template with this id is known.
    #[error("Unknown template '{id}'")]
    UnknownTemplate { id: String, available: Vec<String> },

    /// Copying the template tree failed part-way.
    #[error("Could not copy template file {path}: {reason}")]
    MaterializationFailed {
        path: PathBuf,
        reason: String,
        files_written: usize,
    },

    /// The materialized tree has no manifest to patch.
    #[error("Template is missing {path}")]
    ManifestMissing { path: PathBuf },

    /// The install command did not succeed.
    #[error("Installing dependencies failed: `{command}` {reason}")]
    InstallFailed {
        command: String,
        directory: PathBuf,
        reason: String,
    },

    /// A subprocess could not be started at all.
    #[error("Could not run `{command}`: {reason}")]
    CommandSpawn { command: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Template store access failed (lock poisoned, unreadable directory).
    #[error("Template store error: {reason}")]
    StoreError { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Interactive prompts need a terminal".into(),
                "Pass the project directory and --template explicitly".into(),
            ],
            Self::Unwritable { path } => vec![
                format!("Check the permissions of {}", path.display()),
                "Or choose a different directory".into(),
            ],
            Self::CreateFailed { path, .. } => vec![
                format!("Check that the parent of {} is writable", path.display()),
                "Or choose a different directory".into(),
            ],
            Self::NotADirectory { path } => vec![
                format!("{} is a file", path.display()),
                "Choose a different project directory".into(),
            ],
            Self::NotEmpty { path, conflicts } => {
                let mut out = vec![format!("{} is not empty:", path.display())];
                out.extend(conflicts.iter().map(|c| format!("  • {c}")));
                out.push("Use a new directory name, or remove the files listed above".into());
                out
            }
            Self::UnknownTemplate { available, .. } => vec![
                format!("Available templates: {}", available.join(", ")),
                "Example: create-docforge my-docs --template minimal".into(),
            ],
            Self::MaterializationFailed {
                path,
                files_written,
                ..
            } => vec![
                format!("{files_written} file(s) were written before the failure"),
                format!("Remove {} and try again", path.display()),
                "Check available disk space and permissions".into(),
            ],
            Self::ManifestMissing { .. } => vec![
                "The selected template is incomplete".into(),
                "Please report this issue or use a different template".into(),
            ],
            Self::InstallFailed {
                command, directory, ..
            } => vec![
                "The project was created; only the install step failed".into(),
                "Install dependencies manually:".into(),
                format!("  cd {}", directory.display()),
                format!("  {command}"),
            ],
            Self::CommandSpawn { command, .. } => vec![
                format!("Ensure `{command}` is installed and in your PATH"),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreError { .. } => vec![
                "The template source could not be read".into(),
                "Check the templates.dir setting in your configuration".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Cancelled => ErrorCategory::UserInput,
            Self::Unwritable { .. }
            | Self::CreateFailed { .. }
            | Self::NotADirectory { .. }
            | Self::NotEmpty { .. }
            | Self::UnknownTemplate { .. } => ErrorCategory::Environment,
            Self::MaterializationFailed { .. } | Self::ManifestMissing { .. } => {
                ErrorCategory::Materialization
            }
            Self::InstallFailed { .. } => ErrorCategory::Execution,
            Self::PromptFailed { .. }
            | Self::CommandSpawn { .. }
            | Self::FilesystemError { .. }
            | Self::StoreError { .. } => ErrorCategory::Internal,
        }
    }
}
