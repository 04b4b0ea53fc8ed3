//! Template Materializer - copies a template tree into the destination.
//!
//! The copy is an explicit walk over `TemplateStore::entries` so each file
//! can be reported as it lands, and a failure names the file it stopped at.

use std::path::Path;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError, ScaffoldObserver,
        ports::{Filesystem, TemplateStore},
    },
    domain::{EntryKind, ResolvedDestination, TemplateDescriptor},
    error::{DocforgeError, DocforgeResult},
};

/// What a completed copy produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub directories_created: usize,
    pub files_written: usize,
}

/// Copies template contents verbatim; file bodies are never interpreted.
pub struct TemplateMaterializer<'a> {
    store: &'a dyn TemplateStore,
    filesystem: &'a dyn Filesystem,
}

impl<'a> TemplateMaterializer<'a> {
    pub fn new(store: &'a dyn TemplateStore, filesystem: &'a dyn Filesystem) -> Self {
        Self { store, filesystem }
    }

    /// Copy every entry of `template` below `destination`.
    ///
    /// On failure the destination keeps whatever was already written.
    #[instrument(skip_all, fields(template = %template.id, destination = %destination.absolute_path.display()))]
    pub fn materialize(
        &self,
        template: &TemplateDescriptor,
        destination: &ResolvedDestination,
        observer: &mut dyn ScaffoldObserver,
    ) -> DocforgeResult<MaterializeReport> {
        let entries = self.store.entries(template)?;
        let total_files = entries.iter().filter(|e| e.is_file()).count();
        observer.copy_started(template, total_files);

        let mut report = MaterializeReport::default();
        for entry in &entries {
            let target = destination.absolute_path.join(entry.path());
            match entry.kind {
                EntryKind::Directory => {
                    self.filesystem
                        .create_dir_all(&target)
                        .map_err(|e| failure(&target, e, report.files_written))?;
                    report.directories_created += 1;
                }
                EntryKind::File => {
                    let contents = self
                        .store
                        .read_file(template, entry.path())
                        .map_err(|e| failure(&target, e, report.files_written))?;
                    if let Some(parent) = target.parent() {
                        self.filesystem
                            .create_dir_all(parent)
                            .map_err(|e| failure(&target, e, report.files_written))?;
                    }
                    self.filesystem
                        .write_file(&target, &contents)
                        .map_err(|e| failure(&target, e, report.files_written))?;
                    report.files_written += 1;
                    debug!(file = %entry.path().display(), "Copied");
                    observer.file_copied(entry.path());
                }
            }
        }

        info!(
            files = report.files_written,
            directories = report.directories_created,
            "Template materialized"
        );
        observer.copy_finished(&report);
        Ok(report)
    }
}

fn failure(path: &Path, error: DocforgeError, files_written: usize) -> DocforgeError {
    ApplicationError::MaterializationFailed {
        path: path.to_path_buf(),
        reason: error.to_string(),
        files_written,
    }
    .into()
}
