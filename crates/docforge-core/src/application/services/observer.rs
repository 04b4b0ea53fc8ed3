//! Progress hooks for a running pipeline.

use std::path::Path;

use crate::application::services::{InstallOutcome, MaterializeReport};
use crate::domain::{CommandLine, ResolvedDestination, TemplateDescriptor};

/// Receives progress events while `ScaffoldService::create` runs.
///
/// Every method has an empty default, so implementors override only what
/// they display.
pub trait ScaffoldObserver {
    /// A non-fatal problem, e.g. a name warning.
    fn warning(&mut self, _message: &str) {}

    fn destination_ready(&mut self, _destination: &ResolvedDestination) {}

    fn copy_started(&mut self, _template: &TemplateDescriptor, _total_files: usize) {}

    /// One template file was written, by path relative to the destination.
    fn file_copied(&mut self, _relative: &Path) {}

    fn copy_finished(&mut self, _report: &MaterializeReport) {}

    /// Called before the install command is spawned.
    fn install_started(&mut self, _command: &CommandLine) {}

    fn install_finished(&mut self, _outcome: &InstallOutcome) {}

    fn git_finished(&mut self, _initialized: bool) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScaffoldObserver for NoopObserver {}
