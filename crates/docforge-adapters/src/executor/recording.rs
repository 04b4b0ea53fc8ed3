//! Fake executor for tests: records every command, spawns nothing.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use docforge_core::{
    application::{
        ApplicationError,
        ports::{CommandExecutor, CommandStatus},
    },
    domain::CommandLine,
    error::DocforgeResult,
};

#[derive(Debug, Clone)]
enum Scripted {
    Exit(i32),
    Unavailable,
}

#[derive(Debug, Default)]
struct Inner {
    calls: Vec<(CommandLine, PathBuf)>,
    rules: Vec<(String, Scripted)>,
}

/// Every command succeeds unless a rule matches its text by prefix.
///
/// Clones share the call log.
#[derive(Debug, Clone, Default)]
pub struct RecordingExecutor {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands starting with `prefix` exit with `code`.
    pub fn exit_with(self, prefix: impl Into<String>, code: i32) -> Self {
        self.rule(prefix.into(), Scripted::Exit(code))
    }

    /// Commands starting with `prefix` cannot be spawned.
    pub fn unavailable(self, prefix: impl Into<String>) -> Self {
        self.rule(prefix.into(), Scripted::Unavailable)
    }

    fn rule(self, prefix: String, outcome: Scripted) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.rules.push((prefix, outcome));
        }
        self
    }

    /// Command lines executed so far, as shell text.
    pub fn calls(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|inner| inner.calls.iter().map(|(c, _)| c.to_string()).collect())
            .unwrap_or_default()
    }

    /// Commands with the directory each ran in.
    pub fn invocations(&self) -> Vec<(CommandLine, PathBuf)> {
        self.inner
            .lock()
            .map(|inner| inner.calls.clone())
            .unwrap_or_default()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, command: &CommandLine, cwd: &Path) -> DocforgeResult<CommandStatus> {
        let mut inner = self.inner.lock().map_err(|_| ApplicationError::CommandSpawn {
            command: command.to_string(),
            reason: "recording executor lock poisoned".into(),
        })?;
        inner.calls.push((command.clone(), cwd.to_path_buf()));

        let text = command.to_string();
        let outcome = inner
            .rules
            .iter()
            .find(|(prefix, _)| text.starts_with(prefix.as_str()))
            .map(|(_, outcome)| outcome.clone());

        match outcome {
            None => Ok(CommandStatus::from_code(0)),
            Some(Scripted::Exit(code)) => Ok(CommandStatus::from_code(code)),
            Some(Scripted::Unavailable) => Err(ApplicationError::CommandSpawn {
                command: text,
                reason: "program not found".into(),
            }
            .into()),
        }
    }
}
