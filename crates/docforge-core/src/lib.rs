//! Docforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the docforge
//! documentation-site scaffolding tool, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         docforge-cli (binary)           │
//! │   (argument parsing, prompts, output)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (InputResolver, ScaffoldService, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Prompter,   │
//! │  CommandExecutor)                       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    docforge-adapters (Infrastructure)   │
//! │ (LocalFilesystem, BundledTemplates, ...)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Pipeline
//!
//! 1. Input resolution (prompts for whatever is missing)
//! 2. Name validation
//! 3. Destination safety check, the single gate before any write
//! 4. Template resolution and materialization
//! 5. Manifest patching
//! 6. Package manager resolution and dependency install
//! 7. Best-effort git initialization
//! 8. Next-step reporting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docforge_core::prelude::*;
//! # fn run(store: Box<dyn TemplateStore>, fs: Box<dyn Filesystem>,
//! #        executor: Box<dyn CommandExecutor>, request: ProjectRequest) -> DocforgeResult<()> {
//! let service = ScaffoldService::new(store, fs, executor);
//! let context = InvocationContext::from_env()?;
//! let outcome = service.create(&request, &context, &mut NoopObserver)?;
//! for step in outcome.next_steps.commands() {
//!     println!("{step}");
//! }
//! # Ok(()) }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InputResolver, InvocationContext, NoopObserver, ScaffoldObserver, ScaffoldOutcome,
        ScaffoldService,
        ports::{CommandExecutor, Filesystem, Prompter, TemplateStore},
    };
    pub use crate::domain::{
        CommandLine, Manifest, NameValidation, PackageManager, PackageManagerCommand,
        ProjectRequest, PromptOutcome, RawInput, ResolvedDestination, TemplateDescriptor,
        validate_package_name,
    };
    pub use crate::error::{DocforgeError, DocforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
