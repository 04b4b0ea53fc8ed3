//! Domain value objects: PackageManager, CommandLine, PromptOutcome.
//!
//! These are pure value types with equality-by-value and no identity.

use std::fmt;

// ── PackageManager ────────────────────────────────────────────────────────────

/// A supported JavaScript package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CommandLine ───────────────────────────────────────────────────────────────

/// What a spawned command does with its standard streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Inherit the parent's stdio so the user sees output live.
    #[default]
    Inherit,
    /// Discard stdout/stderr.
    Silent,
}

/// A program invocation, independent of how it is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
    output: OutputMode,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            output: OutputMode::Inherit,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn silent(mut self) -> Self {
        self.output = OutputMode::Silent;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn output(&self) -> OutputMode {
        self.output
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

// ── PromptOutcome ─────────────────────────────────────────────────────────────

/// Result of an interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    Answered(T),
    Cancelled,
}

impl<T> PromptOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PromptOutcome<U> {
        match self {
            Self::Answered(v) => PromptOutcome::Answered(f(v)),
            Self::Cancelled => PromptOutcome::Cancelled,
        }
    }

    pub fn answered(self) -> Option<T> {
        match self {
            Self::Answered(v) => Some(v),
            Self::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
