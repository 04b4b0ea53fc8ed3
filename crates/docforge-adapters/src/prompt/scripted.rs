//! Prompter that replays canned answers.

use std::{cell::RefCell, collections::VecDeque};

use docforge_core::{
    application::{
        ApplicationError,
        ports::{Prompter, SelectPrompt, TextPrompt},
    },
    domain::PromptOutcome,
    error::DocforgeResult,
};

/// One canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    /// Typed text, or the `value` of a select item.
    Answer(String),
    /// The user pressed Esc / Ctrl-C.
    Cancel,
}

impl ScriptedAnswer {
    pub fn answer(value: impl Into<String>) -> Self {
        Self::Answer(value.into())
    }
}

/// Answers prompts in order from a queue.
///
/// Text answers go through the prompt's validator; a rejected answer is
/// recorded and the next one is tried, like a terminal re-asking.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<ScriptedAnswer>>,
    asked: RefCell<Vec<String>>,
    rejected: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Messages of the prompts shown so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    /// Validator messages for rejected text answers.
    pub fn rejected(&self) -> Vec<String> {
        self.rejected.borrow().clone()
    }

    fn next(&self) -> DocforgeResult<ScriptedAnswer> {
        self.answers.borrow_mut().pop_front().ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: "no scripted answer left".into(),
            }
            .into()
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&self, prompt: &TextPrompt) -> DocforgeResult<PromptOutcome<String>> {
        self.asked.borrow_mut().push(prompt.message.clone());
        loop {
            match self.next()? {
                ScriptedAnswer::Cancel => return Ok(PromptOutcome::Cancelled),
                ScriptedAnswer::Answer(value) => match prompt.validate.map(|v| v(&value)) {
                    Some(Err(reason)) => self.rejected.borrow_mut().push(reason),
                    _ => return Ok(PromptOutcome::Answered(value)),
                },
            }
        }
    }

    fn select(&self, prompt: &SelectPrompt) -> DocforgeResult<PromptOutcome<String>> {
        self.asked.borrow_mut().push(prompt.message.clone());
        match self.next()? {
            ScriptedAnswer::Cancel => Ok(PromptOutcome::Cancelled),
            ScriptedAnswer::Answer(value) => {
                if prompt.items.iter().any(|item| item.value == value) {
                    Ok(PromptOutcome::Answered(value))
                } else {
                    Err(ApplicationError::PromptFailed {
                        reason: format!("'{value}' is not one of the choices"),
                    }
                    .into())
                }
            }
        }
    }
}
