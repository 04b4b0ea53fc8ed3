//! Infrastructure adapters for docforge.
//!
//! This crate implements the ports defined in `docforge_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod executor;
pub mod filesystem;
pub mod prompt;
pub mod template_store;

// Re-export commonly used adapters
pub use executor::{RecordingExecutor, SystemExecutor};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::{ScriptedAnswer, ScriptedPrompter};
pub use template_store::{BundledTemplates, DEFAULT_TEMPLATE, DirectoryTemplateStore};
