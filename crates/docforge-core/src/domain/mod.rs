//! Core domain layer for docforge.
//!
//! This module contains pure rules with no I/O. Filesystem access, prompts
//! and subprocesses are reached only through the ports defined in the
//! application layer.
//!
//! - **No I/O**: no filesystem, network, or process calls
//! - **Immutable values**: requests and resolutions are built once
//! - **Deterministic**: every function here is a pure function of its input

pub mod entities;
pub mod error;
pub mod manifest;
pub mod name;
pub mod package_manager;
pub mod value_objects;

pub use entities::{
    BENIGN_ENTRIES, EntryKind, ProjectPath, ProjectRequest, RawInput, ResolvedDestination,
    TemplateDescriptor, TemplateEntry, is_benign_entry, resolve_project_path,
};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{MANIFEST_FILE, Manifest};
pub use name::{MAX_NAME_LENGTH, NameValidation, validate_package_name};
pub use package_manager::{PackageManagerCommand, detect_from_user_agent, resolve_package_manager};
pub use value_objects::{CommandLine, OutputMode, PackageManager, PromptOutcome};
