//! Application services - one per pipeline stage.
//!
//! `ScaffoldService` runs the stages after input resolution in order and
//! threads the request, context and resolved values between them.

pub mod destination;
pub mod input_resolver;
pub mod installer;
pub mod manifest_patcher;
pub mod materializer;
pub mod observer;
pub mod reporter;
pub mod scaffold_service;
pub mod vcs;

pub use destination::DestinationChecker;
pub use input_resolver::{InputResolver, validate_name_input};
pub use installer::{DependencyInstaller, InstallOutcome};
pub use manifest_patcher::{GITIGNORE_SOURCE, ManifestPatcher};
pub use materializer::{MaterializeReport, TemplateMaterializer};
pub use observer::{NoopObserver, ScaffoldObserver};
pub use reporter::NextSteps;
pub use scaffold_service::{ScaffoldOutcome, ScaffoldService};
pub use vcs::{DEFAULT_COMMIT_MESSAGE, VcsInitializer};
