//! The process state a run depends on, captured once.

use std::path::PathBuf;

use crate::error::{Context, DocforgeResult};

/// Environment variable npm-compatible package managers set for child processes.
pub const USER_AGENT_VAR: &str = "npm_config_user_agent";

/// Immutable snapshot of the invocation environment.
///
/// Stages never read the process environment or working directory
/// themselves; they receive this value instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// Directory relative paths are resolved against.
    pub cwd: PathBuf,
    /// Value of `npm_config_user_agent`, if set.
    pub user_agent: Option<String>,
}

impl InvocationContext {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            user_agent: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Capture the current process's working directory and user agent.
    pub fn from_env() -> DocforgeResult<Self> {
        let cwd = std::env::current_dir().context("reading the current directory")?;
        let user_agent = std::env::var(USER_AGENT_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty());
        Ok(Self { cwd, user_agent })
    }
}
