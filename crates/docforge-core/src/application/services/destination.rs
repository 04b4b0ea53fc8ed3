//! Destination Safety Checker - the single gate before any write.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ProjectPath, ResolvedDestination, is_benign_entry},
    error::{DocforgeError, DocforgeResult},
};

/// Inspects (and, if missing, creates) the destination directory.
pub struct DestinationChecker<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> DestinationChecker<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Check the destination, short-circuiting on the first failure.
    ///
    /// An existing path must be a writable directory holding only
    /// allow-listed entries. A missing path is created recursively; if that
    /// fails part-way, the directories it made are removed again. Nothing is
    /// left behind when any check fails.
    #[instrument(skip_all, fields(path = %project.absolute.display()))]
    pub fn check(&self, project: &ProjectPath) -> DocforgeResult<ResolvedDestination> {
        let path = &project.absolute;

        if !self.filesystem.exists(path) {
            self.create(path)?;
            info!("Created destination directory");
            return Ok(ResolvedDestination {
                absolute_path: path.clone(),
                base_name: project.base_name.clone(),
                existed_before: false,
                writable: true,
                empty_enough: true,
            });
        }

        if !self.filesystem.is_dir(path) {
            return Err(ApplicationError::NotADirectory { path: path.clone() }.into());
        }

        if !self.filesystem.is_writable(path) {
            return Err(ApplicationError::Unwritable { path: path.clone() }.into());
        }

        let mut conflicts: Vec<String> = self
            .filesystem
            .list_dir(path)?
            .into_iter()
            .filter(|name| !is_benign_entry(name))
            .collect();
        if !conflicts.is_empty() {
            conflicts.sort();
            return Err(ApplicationError::NotEmpty {
                path: path.clone(),
                conflicts,
            }
            .into());
        }

        debug!("Existing destination is empty enough");
        Ok(ResolvedDestination {
            absolute_path: path.clone(),
            base_name: project.base_name.clone(),
            existed_before: true,
            writable: true,
            empty_enough: true,
        })
    }

    fn create(&self, path: &Path) -> DocforgeResult<()> {
        // outermost directory this call will create
        let first_missing = path
            .ancestors()
            .take_while(|p| !p.as_os_str().is_empty() && !self.filesystem.exists(p))
            .last()
            .unwrap_or(path);

        self.filesystem.create_dir_all(path).map_err(|e| {
            warn!(error = %e, "Could not create destination");
            if let Err(cleanup) = self.filesystem.remove_dir_all(first_missing) {
                debug!(path = %first_missing.display(), error = %cleanup, "Nothing to clean up");
            }
            let reason = match e {
                DocforgeError::Application(ApplicationError::FilesystemError { reason, .. }) => {
                    reason
                }
                other => other.to_string(),
            };
            DocforgeError::from(ApplicationError::CreateFailed {
                path: path.to_path_buf(),
                reason,
            })
        })
    }
}
