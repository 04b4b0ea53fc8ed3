//! Templates read from a directory on disk.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── handbook/              ← template id "handbook"
//! │   ├── package.json
//! │   ├── gitignore
//! │   └── pages/
//! │       └── index.mdx
//! └── api-reference/
//!     └── ...
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use docforge_core::{
    application::ports::TemplateStore,
    domain::{TemplateDescriptor, TemplateEntry},
    error::DocforgeResult,
};

use super::store_error;

/// Store over the subdirectories of `root`.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    root: PathBuf,
}

impl DirectoryTemplateStore {
    /// The directory does not need to exist yet; lookups fail if it is
    /// missing when called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateStore for DirectoryTemplateStore {
    #[instrument(skip(self), fields(dir = %self.root.display()))]
    fn list(&self) -> DocforgeResult<Vec<TemplateDescriptor>> {
        let read_dir = fs::read_dir(&self.root).map_err(|e| {
            store_error(format!(
                "failed to read templates directory '{}': {e}",
                self.root.display()
            ))
        })?;

        let mut templates = Vec::new();
        for entry in read_dir {
            let entry =
                entry.map_err(|e| store_error(format!("failed to read directory entry: {e}")))?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(id) = path.file_name().and_then(|n| n.to_str()) else {
                warn!(dir = %path.display(), "Skipping template with a non UTF-8 name");
                continue;
            };
            templates.push(
                TemplateDescriptor::new(id, &path)
                    .with_description(format!("from {}", self.root.display())),
            );
        }

        templates.sort_by(|a, b| a.id.cmp(&b.id));
        debug!(count = templates.len(), "Listed templates");
        Ok(templates)
    }

    fn get(&self, id: &str) -> DocforgeResult<Option<TemplateDescriptor>> {
        Ok(self.list()?.into_iter().find(|t| t.id == id))
    }

    fn entries(&self, template: &TemplateDescriptor) -> DocforgeResult<Vec<TemplateEntry>> {
        let root = &template.root_path;
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for walk_entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let walk_entry =
                walk_entry.map_err(|e| store_error(format!("directory walk error: {e}")))?;
            let relative = walk_entry
                .path()
                .strip_prefix(root)
                .map_err(|_| {
                    store_error(format!(
                        "failed to relativise '{}' against '{}'",
                        walk_entry.path().display(),
                        root.display()
                    ))
                })?
                .to_path_buf();

            let file_type = walk_entry.file_type();
            if file_type.is_dir() {
                dirs.push(TemplateEntry::directory(relative));
            } else if file_type.is_file() {
                files.push(TemplateEntry::file(relative));
            } else {
                debug!(path = %relative.display(), "Skipping special file");
            }
        }

        dirs.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        dirs.extend(files);
        Ok(dirs)
    }

    fn read_file(&self, template: &TemplateDescriptor, relative: &Path) -> DocforgeResult<Vec<u8>> {
        let path = template.root_path.join(relative);
        fs::read(&path).map_err(|e| store_error(format!("failed to read '{}': {e}", path.display())))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
