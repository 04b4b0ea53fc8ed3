//! The user's request, before and after prompting.

use crate::domain::value_objects::PackageManager;

/// Whatever the invocation supplied; any field may still be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub path: Option<String>,
    pub template: Option<String>,
    pub package_manager: Option<PackageManager>,
    pub skip_install: bool,
    pub init_git: bool,
}

/// A fully resolved request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    raw_path: String,
    template_id: String,
    package_manager: Option<PackageManager>,
    skip_install: bool,
    init_git: bool,
}

impl ProjectRequest {
    pub fn new(raw_path: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            raw_path: raw_path.into(),
            template_id: template_id.into(),
            package_manager: None,
            skip_install: false,
            init_git: true,
        }
    }

    pub fn with_package_manager(mut self, package_manager: Option<PackageManager>) -> Self {
        self.package_manager = package_manager;
        self
    }

    pub fn with_skip_install(mut self, skip_install: bool) -> Self {
        self.skip_install = skip_install;
        self
    }

    pub fn with_git(mut self, init_git: bool) -> Self {
        self.init_git = init_git;
        self
    }

    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    /// Explicit package manager choice, if the user made one.
    pub fn package_manager_override(&self) -> Option<PackageManager> {
        self.package_manager
    }

    pub fn skip_install(&self) -> bool {
        self.skip_install
    }

    pub fn init_git(&self) -> bool {
        self.init_git
    }
}
