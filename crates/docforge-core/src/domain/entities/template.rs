//! Template identity and tree entries.

use std::fmt;
use std::path::{Path, PathBuf};

/// A template that a store can materialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub id: String,
    /// Root of the template tree, in the store's own namespace.
    pub root_path: PathBuf,
    pub description: String,
}

impl TemplateDescriptor {
    pub fn new(id: impl Into<String>, root_path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            root_path: root_path.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Display for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Kind of node in a template tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One node of a template tree, relative to the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub relative_path: PathBuf,
    pub kind: EntryKind,
}

impl TemplateEntry {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn path(&self) -> &Path {
        &self.relative_path
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}
