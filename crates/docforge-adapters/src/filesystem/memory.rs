//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use docforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{DocforgeError, DocforgeResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service. Failures can be injected with [`set_readonly`](Self::set_readonly)
/// and [`fail_writes_after`](Self::fail_writes_after).
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    readonly: HashSet<PathBuf>,
    write_budget: Option<usize>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a directory and its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert_dirs(path.as_ref());
        }
        self
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) -> Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                inner.insert_dirs(parent);
            }
            inner.files.insert(path.to_path_buf(), contents.into());
        }
        self
    }

    /// Refuse creating entries inside `path` from now on.
    pub fn set_readonly(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.readonly.insert(path.as_ref().to_path_buf());
        }
    }

    /// Let `count` more file writes succeed, then fail every write with a
    /// disk-full error.
    pub fn fail_writes_after(&self, count: usize) {
        if let Ok(mut inner) = self.inner.write() {
            inner.write_budget = Some(count);
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Read a file as UTF-8 (testing helper).
    pub fn read_text(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read_file(path)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// Every file and directory at or below `root`, sorted.
    pub fn tree(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut out: Vec<PathBuf> = inner
            .directories
            .iter()
            .chain(inner.files.keys())
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect();
        out.sort();
        out
    }

    fn read(&self) -> DocforgeResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| lock_error())
    }

    fn write(&self) -> DocforgeResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_error())
    }
}

impl MemoryFilesystemInner {
    fn insert_dirs(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn is_readonly(&self, path: &Path) -> bool {
        self.readonly.contains(path)
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_writable(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path) && !inner.is_readonly(path))
            .unwrap_or(false)
    }

    fn list_dir(&self, path: &Path) -> DocforgeResult<Vec<String>> {
        let inner = self.read()?;
        if !inner.directories.contains(path) {
            return Err(fs_error(path, "not a directory"));
        }
        let mut names: Vec<String> = inner
            .directories
            .iter()
            .chain(inner.files.keys())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }

    fn create_dir_all(&self, path: &Path) -> DocforgeResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(fs_error(&current, "a file is in the way"));
            }
            if inner.directories.contains(&current) {
                continue;
            }
            if current.parent().is_some_and(|p| inner.is_readonly(p)) {
                return Err(fs_error(&current, "permission denied"));
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> DocforgeResult<()> {
        let mut inner = self.write()?;

        // Ensure parent exists
        let parent = path.parent().unwrap_or(Path::new(""));
        if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
            return Err(fs_error(path, "parent directory does not exist"));
        }
        if inner.is_readonly(parent) {
            return Err(fs_error(path, "permission denied"));
        }

        if let Some(budget) = inner.write_budget.as_mut() {
            if *budget == 0 {
                return Err(fs_error(path, "no space left on device"));
            }
            *budget -= 1;
        }

        inner.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> DocforgeResult<String> {
        let inner = self.read()?;
        let bytes = inner
            .files
            .get(path)
            .ok_or_else(|| fs_error(path, "file not found"))?;
        String::from_utf8(bytes.clone()).map_err(|_| fs_error(path, "file is not valid UTF-8"))
    }

    fn rename(&self, from: &Path, to: &Path) -> DocforgeResult<()> {
        let mut inner = self.write()?;

        if let Some(contents) = inner.files.remove(from) {
            inner.files.insert(to.to_path_buf(), contents);
            return Ok(());
        }
        if !inner.directories.contains(from) {
            return Err(fs_error(from, "no such file or directory"));
        }

        let moved_dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for dir in moved_dirs {
            inner.directories.remove(&dir);
            inner.directories.insert(rebase(&dir, from, to));
        }
        let moved_files: Vec<PathBuf> = inner
            .files
            .keys()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for file in moved_files {
            if let Some(contents) = inner.files.remove(&file) {
                inner.files.insert(rebase(&file, from, to), contents);
            }
        }
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> DocforgeResult<()> {
        let mut inner = self.write()?;

        if !inner.directories.contains(path) {
            return Err(fs_error(path, "no such directory"));
        }
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

fn rebase(path: &Path, from: &Path, to: &Path) -> PathBuf {
    match path.strip_prefix(from) {
        Ok(rest) if rest.as_os_str().is_empty() => to.to_path_buf(),
        Ok(rest) => to.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

fn fs_error(path: &Path, reason: &str) -> DocforgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

fn lock_error() -> DocforgeError {
    ApplicationError::FilesystemError {
        path: PathBuf::new(),
        reason: "in-memory filesystem lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_entries_are_listed() {
        let fs = MemoryFilesystem::new()
            .with_file("/work/site/notes.txt", "hi")
            .with_dir("/work/site/.git");

        assert!(fs.is_dir(Path::new("/work/site")));
        assert_eq!(
            fs.list_dir(Path::new("/work/site")).unwrap(),
            vec![".git", "notes.txt"]
        );
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), b"x").is_err());
        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/b.txt"), b"x").unwrap();
        assert_eq!(fs.read_text("/a/b.txt").as_deref(), Some("x"));
    }

    #[test]
    fn readonly_blocks_children() {
        let fs = MemoryFilesystem::new().with_dir("/locked");
        fs.set_readonly("/locked");

        assert!(!fs.is_writable(Path::new("/locked")));
        assert!(fs.create_dir_all(Path::new("/locked/new")).is_err());
        assert!(fs.write_file(Path::new("/locked/f"), b"").is_err());
    }

    #[test]
    fn write_budget_runs_out() {
        let fs = MemoryFilesystem::new().with_dir("/d");
        fs.fail_writes_after(1);

        fs.write_file(Path::new("/d/one"), b"1").unwrap();
        let err = fs.write_file(Path::new("/d/two"), b"2").unwrap_err();
        assert!(err.to_string().contains("no space left"));
    }

    #[test]
    fn rename_file_and_directory() {
        let fs = MemoryFilesystem::new()
            .with_file("/p/gitignore", "node_modules\n")
            .with_file("/p/old/inner.md", "# x");

        fs.rename(Path::new("/p/gitignore"), Path::new("/p/.gitignore"))
            .unwrap();
        fs.rename(Path::new("/p/old"), Path::new("/p/new")).unwrap();

        assert!(fs.read_file("/p/.gitignore").is_some());
        assert!(fs.read_file("/p/gitignore").is_none());
        assert_eq!(fs.read_text("/p/new/inner.md").as_deref(), Some("# x"));
        assert!(!fs.exists(Path::new("/p/old")));
    }

    #[test]
    fn remove_dir_all_removes_subtree() {
        let fs = MemoryFilesystem::new()
            .with_file("/p/.git/HEAD", "ref")
            .with_file("/p/keep.md", "");

        fs.remove_dir_all(Path::new("/p/.git")).unwrap();
        assert_eq!(
            fs.tree("/p"),
            vec![PathBuf::from("/p"), PathBuf::from("/p/keep.md")]
        );
    }
}
