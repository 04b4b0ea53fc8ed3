//! Runs commands as real child processes.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use docforge_core::{
    application::{
        ApplicationError,
        ports::{CommandExecutor, CommandStatus},
    },
    domain::{CommandLine, OutputMode},
    error::DocforgeResult,
};

/// Production executor using `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }

    fn build(command: &CommandLine, cwd: &Path) -> Command {
        // npm, yarn and pnpm are batch shims on Windows
        #[cfg(windows)]
        let mut process = {
            let mut process = Command::new("cmd");
            process.arg("/C").arg(command.program());
            process
        };
        #[cfg(not(windows))]
        let mut process = Command::new(command.program());

        process.args(command.arguments()).current_dir(cwd);

        match command.output() {
            OutputMode::Inherit => {
                process
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
            }
            OutputMode::Silent => {
                process
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null());
            }
        }
        process
    }
}

impl CommandExecutor for SystemExecutor {
    #[instrument(skip_all, fields(command = %command, cwd = %cwd.display()))]
    fn execute(&self, command: &CommandLine, cwd: &Path) -> DocforgeResult<CommandStatus> {
        let status = Self::build(command, cwd).status().map_err(|e| {
            ApplicationError::CommandSpawn {
                command: command.to_string(),
                reason: e.to_string(),
            }
        })?;
        debug!(code = ?status.code(), "Command finished");
        Ok(CommandStatus { code: status.code() })
    }
}
