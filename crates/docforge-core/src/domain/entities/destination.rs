//! Destination path resolution and the emptiness allow-list.

use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// Entries that may already exist in a destination without blocking a run:
/// VCS metadata, OS metadata, IDE project files, licenses and editor config.
pub const BENIGN_ENTRIES: &[&str] = &[
    ".git",
    ".gitattributes",
    ".hg",
    ".hgcheck",
    ".hgignore",
    ".svn",
    ".DS_Store",
    "Thumbs.db",
    "desktop.ini",
    ".idea",
    ".vscode",
    ".editorconfig",
    "LICENSE",
    "LICENSE.md",
    "LICENSE.txt",
    "LICENCE",
];

/// `true` if `name` may be present in a destination that counts as empty.
pub fn is_benign_entry(name: &str) -> bool {
    BENIGN_ENTRIES.contains(&name) || name.ends_with(".iml")
}

/// A raw path made absolute, with the name the project will carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPath {
    pub absolute: PathBuf,
    pub base_name: String,
}

/// Resolve `raw` against `cwd` and take its final segment as the project name.
///
/// `.` and `..` are folded lexically, so `docs/../site` names `site` and `.`
/// names the current directory.
pub fn resolve_project_path(raw: &str, cwd: &Path) -> Result<ProjectPath, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingRequiredField { field: "path" });
    }

    let joined = cwd.join(trimmed);
    let absolute = normalize(&joined);

    let base_name = absolute
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DomainError::UnnamedPath {
            path: raw.to_string(),
        })?
        .to_string();

    Ok(ProjectPath {
        absolute,
        base_name,
    })
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// The destination after the safety check ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDestination {
    pub absolute_path: PathBuf,
    pub base_name: String,
    pub existed_before: bool,
    pub writable: bool,
    pub empty_enough: bool,
}

impl ResolvedDestination {
    /// Whether template files may be written here.
    pub fn may_materialize(&self) -> bool {
        self.writable && (!self.existed_before || self.empty_enough)
    }
}
