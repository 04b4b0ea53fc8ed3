//! Error handling for the `create-docforge` binary.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Error chaining in verbose mode
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use docforge_core::error::{DocforgeError, ErrorCategory as CoreCategory};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file or `DOCFORGE_*` variable could not be read.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `docforge-core`.
    #[error(transparent)]
    Core(#[from] DocforgeError),

    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config { message, .. } => vec![
                format!("Configuration issue: {message}"),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Check DOCFORGE_* environment variables".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::Io { .. } => vec!["Check that the terminal is still attached".into()],
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::UserInput => ErrorCategory::UserError,
                CoreCategory::Environment => ErrorCategory::Environment,
                CoreCategory::Materialization | CoreCategory::Execution => ErrorCategory::Failed,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS. Every failure exits with `1`.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// `true` when the user dismissed a prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Core(core) if core.is_cancelled())
    }

    /// Error, causes (verbose only) and suggestions, styled for a terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, &Styles {
            heading: |s| s.red().bold().to_string(),
            message: |s| s.red().to_string(),
            cause: |s| s.dimmed().to_string(),
            section: |s| s.yellow().bold().to_string(),
            hint: |s| s.dimmed().to_string(),
        })
    }

    /// Same layout as [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, &Styles {
            heading: str::to_owned,
            message: str::to_owned,
            cause: str::to_owned,
            section: str::to_owned,
            hint: str::to_owned,
        })
    }

    fn render(&self, verbose: bool, styles: &Styles) -> String {
        let mut out = format!(
            "\n{} {}\n",
            (styles.heading)("Error:"),
            (styles.message)(&self.to_string())
        );

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let line = format!("caused by: {err}");
                out.push_str(&format!("  {}\n", (styles.cause)(&line)));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", (styles.section)("Suggestions:")));
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                (styles.hint)("Run again with -v for the underlying cause.")
            ));
        }
        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Environment => tracing::warn!("Destination error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Failed => tracing::error!("Scaffolding failed: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Per-part styling used by [`CliError::render`].
struct Styles {
    heading: fn(&str) -> String,
    message: fn(&str) -> String,
    cause: fn(&str) -> String,
    section: fn(&str) -> String,
    hint: fn(&str) -> String,
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid name or cancelled prompt.
    UserError,
    /// The destination or template cannot be used.
    Environment,
    /// Configuration error.
    Configuration,
    /// A stage failed after files were written.
    Failed,
    Internal,
}
