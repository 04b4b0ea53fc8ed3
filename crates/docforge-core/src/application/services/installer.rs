//! Dependency Installer - runs `<pm> install` in the new project.

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::CommandExecutor},
    domain::{PackageManagerCommand, ResolvedDestination},
    error::DocforgeResult,
};

/// Result of the install stage when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    /// `--skip-install` was given; no process was spawned.
    Skipped,
}

pub struct DependencyInstaller<'a> {
    executor: &'a dyn CommandExecutor,
}

impl<'a> DependencyInstaller<'a> {
    pub fn new(executor: &'a dyn CommandExecutor) -> Self {
        Self { executor }
    }

    /// Spawn the install command with inherited stdio and wait for it.
    ///
    /// A failed install leaves the destination as materialized.
    #[instrument(skip_all, fields(command = %package_manager.install(), skip_install = skip_install))]
    pub fn install(
        &self,
        package_manager: &PackageManagerCommand,
        destination: &ResolvedDestination,
        skip_install: bool,
    ) -> DocforgeResult<InstallOutcome> {
        if skip_install {
            info!("Skipping dependency install");
            return Ok(InstallOutcome::Skipped);
        }

        let command = package_manager.install();
        let failed = |reason: String| ApplicationError::InstallFailed {
            command: command.to_string(),
            directory: destination.absolute_path.clone(),
            reason,
        };

        let status = self
            .executor
            .execute(command, &destination.absolute_path)
            .map_err(|e| failed(e.to_string()))?;

        if !status.success() {
            let reason = match status.code {
                Some(code) => format!("exited with status {code}"),
                None => "was terminated by a signal".to_string(),
            };
            warn!(%reason, "Install failed");
            return Err(failed(reason).into());
        }

        info!("Dependencies installed");
        Ok(InstallOutcome::Installed)
    }
}
