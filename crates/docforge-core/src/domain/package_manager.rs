//! Package manager resolution and its command set.

use crate::domain::value_objects::{CommandLine, PackageManager};

/// The commands one package manager uses for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManagerCommand {
    kind: PackageManager,
    install: CommandLine,
}

impl PackageManagerCommand {
    pub fn new(kind: PackageManager) -> Self {
        Self {
            kind,
            install: CommandLine::new(kind.as_str()).arg("install"),
        }
    }

    pub fn kind(&self) -> PackageManager {
        self.kind
    }

    /// Command that installs the project's dependencies.
    pub fn install(&self) -> &CommandLine {
        &self.install
    }

    /// Command that runs a `package.json` script.
    pub fn run(&self, script: &str) -> CommandLine {
        CommandLine::new(self.kind.as_str()).args(["run", script])
    }
}

/// Identify the package manager driving this process from its user agent
/// (`npm_config_user_agent`, e.g. `pnpm/9.1.0 npm/? node/v20.11.0 linux x64`).
pub fn detect_from_user_agent(user_agent: &str) -> Option<PackageManager> {
    let agent = user_agent.trim_start();
    if agent.starts_with("yarn") {
        Some(PackageManager::Yarn)
    } else if agent.starts_with("pnpm") {
        Some(PackageManager::Pnpm)
    } else if agent.starts_with("npm") {
        Some(PackageManager::Npm)
    } else {
        None
    }
}

/// Resolve the package manager: explicit override, then the user agent
/// signal, then the default.
pub fn resolve_package_manager(
    explicit: Option<PackageManager>,
    user_agent: Option<&str>,
) -> PackageManagerCommand {
    let kind = explicit
        .or_else(|| user_agent.and_then(detect_from_user_agent))
        .unwrap_or_default();
    PackageManagerCommand::new(kind)
}
