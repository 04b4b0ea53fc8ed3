//! Templates compiled into the binary.
//!
//! Every top-level directory under `templates/` in this crate is one
//! template, its name is the template id.

use std::path::Path;

use include_dir::{Dir, include_dir};
use tracing::debug;

use docforge_core::{
    application::ports::TemplateStore,
    domain::{TemplateDescriptor, TemplateEntry},
    error::DocforgeResult,
};

use super::store_error;

static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Descriptions shown in the template prompt.
const DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "default",
        "Documentation site with navigation, a getting-started guide and theme config",
    ),
    ("minimal", "A single page and the smallest working config"),
];

/// Id of the template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "default";

/// Read-only store over the embedded template trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledTemplates;

impl BundledTemplates {
    pub fn new() -> Self {
        Self
    }

    fn root(&self, template: &TemplateDescriptor) -> DocforgeResult<&'static Dir<'static>> {
        TEMPLATES
            .get_dir(&template.root_path)
            .ok_or_else(|| store_error(format!("bundled template '{}' is missing", template.id)))
    }
}

fn describe(dir: &Dir<'_>) -> Option<TemplateDescriptor> {
    let id = dir.path().file_name()?.to_str()?;
    let description = DESCRIPTIONS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, d)| *d)
        .unwrap_or_default();
    Some(TemplateDescriptor::new(id, dir.path()).with_description(description))
}

fn collect(dir: &Dir<'_>, root: &Path, dirs: &mut Vec<TemplateEntry>, files: &mut Vec<TemplateEntry>) {
    for sub in dir.dirs() {
        if let Ok(relative) = sub.path().strip_prefix(root) {
            dirs.push(TemplateEntry::directory(relative));
        }
        collect(sub, root, dirs, files);
    }
    for file in dir.files() {
        if let Ok(relative) = file.path().strip_prefix(root) {
            files.push(TemplateEntry::file(relative));
        }
    }
}

impl TemplateStore for BundledTemplates {
    fn list(&self) -> DocforgeResult<Vec<TemplateDescriptor>> {
        let mut templates: Vec<TemplateDescriptor> = TEMPLATES.dirs().filter_map(describe).collect();
        templates.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(templates)
    }

    fn get(&self, id: &str) -> DocforgeResult<Option<TemplateDescriptor>> {
        Ok(TEMPLATES
            .dirs()
            .filter_map(describe)
            .find(|t| t.id == id))
    }

    fn entries(&self, template: &TemplateDescriptor) -> DocforgeResult<Vec<TemplateEntry>> {
        let root = self.root(template)?;
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        collect(root, root.path(), &mut dirs, &mut files);
        dirs.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        debug!(template = %template.id, dirs = dirs.len(), files = files.len(), "Listed bundled template");
        dirs.extend(files);
        Ok(dirs)
    }

    fn read_file(&self, template: &TemplateDescriptor, relative: &Path) -> DocforgeResult<Vec<u8>> {
        TEMPLATES
            .get_file(template.root_path.join(relative))
            .map(|file| file.contents().to_vec())
            .ok_or_else(|| {
                store_error(format!(
                    "'{}' is not part of template '{}'",
                    relative.display(),
                    template.id
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn lists_bundled_templates_with_descriptions() {
        let templates = BundledTemplates::new().list().unwrap();
        let ids: Vec<_> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["default", "minimal"]);
        assert!(templates.iter().all(|t| !t.description.is_empty()));
    }

    #[test]
    fn default_template_exists() {
        assert!(BundledTemplates::new().get(DEFAULT_TEMPLATE).unwrap().is_some());
        assert!(BundledTemplates::new().get("blog").unwrap().is_none());
    }

    #[test]
    fn entries_list_directories_before_files() {
        let store = BundledTemplates::new();
        let minimal = store.get("minimal").unwrap().unwrap();
        let entries = store.entries(&minimal).unwrap();

        let first_file = entries.iter().position(|e| e.is_file()).unwrap();
        assert!(entries[first_file..].iter().all(|e| e.is_file()));
        assert!(entries.contains(&TemplateEntry::directory("pages")));
        assert!(entries.contains(&TemplateEntry::file("package.json")));
        assert!(entries.contains(&TemplateEntry::file("gitignore")));
        assert!(entries.contains(&TemplateEntry::file(PathBuf::from("pages").join("index.mdx"))));
    }

    #[test]
    fn every_template_ships_a_manifest_and_ignore_file() {
        let store = BundledTemplates::new();
        for template in store.list().unwrap() {
            let manifest = store.read_file(&template, Path::new("package.json")).unwrap();
            let text = String::from_utf8(manifest).unwrap();
            assert!(text.contains("\"name\""), "{}", template.id);
            assert!(store.read_file(&template, Path::new("gitignore")).is_ok());
        }
    }

    #[test]
    fn reading_unknown_file_fails() {
        let store = BundledTemplates::new();
        let minimal = store.get("minimal").unwrap().unwrap();
        assert!(store.read_file(&minimal, Path::new("nope.txt")).is_err());
    }
}
