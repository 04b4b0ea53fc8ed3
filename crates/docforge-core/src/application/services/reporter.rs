//! Reporter - the commands a user runs next.

use std::fmt;
use std::path::Path;

use crate::{
    application::InstallOutcome,
    domain::{CommandLine, PackageManagerCommand, ResolvedDestination},
};

/// Script started by the last next-step command.
pub const DEV_SCRIPT: &str = "dev";

/// Ordered next-step commands, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSteps {
    cd: Option<CommandLine>,
    install: Option<CommandLine>,
    dev: CommandLine,
}

impl NextSteps {
    /// `cd` into the project (relative to `cwd` when the project is below it,
    /// omitted when it *is* `cwd`), install if that was skipped, then start
    /// the dev server.
    pub fn build(
        destination: &ResolvedDestination,
        cwd: &Path,
        package_manager: &PackageManagerCommand,
        install: InstallOutcome,
    ) -> Self {
        let path = destination.absolute_path.as_path();
        let cd = if path == cwd {
            None
        } else {
            let shown = path.strip_prefix(cwd).unwrap_or(path);
            Some(CommandLine::new("cd").arg(shown.display().to_string()))
        };

        let install = match install {
            InstallOutcome::Skipped => Some(package_manager.install().clone()),
            InstallOutcome::Installed => None,
        };

        Self {
            cd,
            install,
            dev: package_manager.run(DEV_SCRIPT),
        }
    }

    /// The commands, one shell line each.
    pub fn commands(&self) -> Vec<String> {
        self.cd
            .iter()
            .chain(self.install.iter())
            .chain(std::iter::once(&self.dev))
            .map(ToString::to_string)
            .collect()
    }
}

impl fmt::Display for NextSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.commands() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
