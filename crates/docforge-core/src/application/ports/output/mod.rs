//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the pipeline needs from the outside world.
//! The `docforge-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{CommandLine, PromptOutcome, TemplateDescriptor, TemplateEntry};
use crate::error::DocforgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `docforge_adapters::filesystem::LocalFilesystem` (production)
/// - `docforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether the process may create entries inside an existing directory.
    fn is_writable(&self, path: &Path) -> bool;

    /// Names of the direct children of a directory.
    fn list_dir(&self, path: &Path) -> DocforgeResult<Vec<String>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DocforgeResult<()>;

    /// Write bytes to a file, replacing it if present.
    fn write_file(&self, path: &Path, contents: &[u8]) -> DocforgeResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> DocforgeResult<String>;

    /// Rename a file or directory.
    fn rename(&self, from: &Path, to: &Path) -> DocforgeResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> DocforgeResult<()>;
}

/// Port for template lookup and traversal. Templates are read-only.
///
/// Implemented by:
/// - `docforge_adapters::template_store::BundledTemplates` (embedded in the binary)
/// - `docforge_adapters::template_store::DirectoryTemplateStore` (a directory on disk)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// All templates, sorted by id.
    fn list(&self) -> DocforgeResult<Vec<TemplateDescriptor>>;

    /// Look up a template by id.
    fn get(&self, id: &str) -> DocforgeResult<Option<TemplateDescriptor>>;

    /// Every directory below the template root, then every file, each group
    /// in path order.
    fn entries(&self, template: &TemplateDescriptor) -> DocforgeResult<Vec<TemplateEntry>>;

    /// Contents of one file, by path relative to the template root.
    fn read_file(&self, template: &TemplateDescriptor, relative: &Path) -> DocforgeResult<Vec<u8>>;
}

/// Exit status of a finished command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Port for running external programs to completion.
///
/// Implemented by:
/// - `docforge_adapters::executor::SystemExecutor` (spawns real processes)
/// - `docforge_adapters::executor::RecordingExecutor` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandExecutor: Send + Sync {
    /// Run `command` in `cwd` and block until it exits.
    ///
    /// Returns an error only if the process could not be started.
    fn execute(&self, command: &CommandLine, cwd: &Path) -> DocforgeResult<CommandStatus>;
}

/// Free-text question.
#[derive(Debug, Clone)]
pub struct TextPrompt {
    pub message: String,
    pub initial: Option<String>,
    /// Re-ask while this returns `Err(reason)`.
    pub validate: Option<fn(&str) -> Result<(), String>>,
}

/// One option of a single-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    pub value: String,
    pub label: String,
    pub hint: String,
}

/// Single-choice question.
#[derive(Debug, Clone)]
pub struct SelectPrompt {
    pub message: String,
    pub items: Vec<SelectItem>,
    /// Index highlighted initially.
    pub initial: usize,
}

/// Port for interactive questions.
///
/// Implemented by:
/// - `docforge-cli`'s `DialoguerPrompter` (terminal)
/// - `docforge_adapters::prompt::ScriptedPrompter` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn text(&self, prompt: &TextPrompt) -> DocforgeResult<PromptOutcome<String>>;

    /// Returns the chosen item's `value`.
    fn select(&self, prompt: &SelectPrompt) -> DocforgeResult<PromptOutcome<String>>;
}
