//! Prompter adapters. The terminal prompter lives in `docforge-cli`.

mod scripted;

pub use scripted::{ScriptedAnswer, ScriptedPrompter};
