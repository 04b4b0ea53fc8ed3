//! VCS Initializer - best-effort git repository with an initial commit.
//!
//! Nothing here is ever surfaced as an error. Every step's failure is
//! logged and turns the whole stage into a no-op.

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{CommandExecutor, Filesystem},
    domain::CommandLine,
};

pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit from create-docforge";

pub struct VcsInitializer<'a> {
    executor: &'a dyn CommandExecutor,
    filesystem: &'a dyn Filesystem,
    commit_message: String,
}

impl<'a> VcsInitializer<'a> {
    pub fn new(executor: &'a dyn CommandExecutor, filesystem: &'a dyn Filesystem) -> Self {
        Self {
            executor,
            filesystem,
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }

    pub fn with_commit_message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    /// Create a repository in `directory` and commit everything in it.
    ///
    /// Skipped when git is unavailable or `directory` already sits inside a
    /// git or mercurial work tree. If a step after `git init` fails, the new
    /// `.git` directory is removed. Returns whether a commit was made.
    #[instrument(skip_all, fields(directory = %directory.display()))]
    pub fn initialize(&self, directory: &Path) -> bool {
        if !self.run(git(["--version"]), directory) {
            debug!("git is not available");
            return false;
        }

        if self.run(git(["rev-parse", "--is-inside-work-tree"]), directory)
            || self.run(CommandLine::new("hg").args(["--cwd", ".", "root"]), directory)
        {
            debug!("Already inside a repository");
            return false;
        }

        if !self.run(git(["init"]), directory) {
            return false;
        }

        let steps = [
            git(["checkout", "-b", "main"]),
            git(["add", "-A"]),
            git(["commit", "-m", self.commit_message.as_str()]),
        ];
        for step in steps {
            if !self.run(step, directory) {
                self.remove_repository(directory);
                return false;
            }
        }

        info!("Initialized a git repository");
        true
    }

    fn run(&self, command: CommandLine, directory: &Path) -> bool {
        let command = command.silent();
        match self.executor.execute(&command, directory) {
            Ok(status) if status.success() => true,
            Ok(status) => {
                debug!(%command, code = ?status.code, "Command failed");
                false
            }
            Err(e) => {
                debug!(%command, error = %e, "Command could not start");
                false
            }
        }
    }

    fn remove_repository(&self, directory: &Path) {
        let git_dir = directory.join(".git");
        if let Err(e) = self.filesystem.remove_dir_all(&git_dir) {
            warn!(error = %e, path = %git_dir.display(), "Could not remove .git");
        }
    }
}

fn git<'s>(args: impl IntoIterator<Item = &'s str>) -> CommandLine {
    CommandLine::new("git").args(args)
}
