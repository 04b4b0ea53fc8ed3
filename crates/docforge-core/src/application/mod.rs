//! Application layer for docforge.
//!
//! This layer contains:
//! - **Services**: one per pipeline stage, plus `ScaffoldService` which runs them in order
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Context**: the invocation's working directory and environment signals
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All rules live in `crate::domain`.

pub mod context;
pub mod error;
pub mod ports;
pub mod services;

pub use context::InvocationContext;
pub use error::ApplicationError;

pub use services::{
    DependencyInstaller, DestinationChecker, InputResolver, InstallOutcome, ManifestPatcher,
    MaterializeReport, NextSteps, NoopObserver, ScaffoldObserver, ScaffoldOutcome,
    ScaffoldService, TemplateMaterializer, VcsInitializer,
};

pub use ports::{CommandExecutor, Filesystem, Prompter, TemplateStore};
