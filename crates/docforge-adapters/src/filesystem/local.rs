//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use docforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{DocforgeError, DocforgeResult},
};

/// Prefix of the throwaway file used to probe writability.
const PROBE_PREFIX: &str = ".docforge-probe";

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Creates and drops a temporary file inside `path`.
    fn is_writable(&self, path: &Path) -> bool {
        tempfile::Builder::new()
            .prefix(PROBE_PREFIX)
            .tempfile_in(path)
            .is_ok()
    }

    fn list_dir(&self, path: &Path) -> DocforgeResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))? {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn create_dir_all(&self, path: &Path) -> DocforgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> DocforgeResult<()> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> DocforgeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn rename(&self, from: &Path, to: &Path) -> DocforgeResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename"))
    }

    fn remove_dir_all(&self, path: &Path) -> DocforgeResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> DocforgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
