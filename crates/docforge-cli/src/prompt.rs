//! Terminal prompts backed by `dialoguer`.

use std::io;

use console::Term;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use tracing::debug;

use docforge_core::{
    application::{
        ApplicationError,
        ports::{Prompter, SelectItem, SelectPrompt, TextPrompt},
    },
    domain::PromptOutcome,
    error::DocforgeResult,
};

/// Interactive prompter on stderr. Ctrl-C and Esc cancel.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &TextPrompt) -> DocforgeResult<PromptOutcome<String>> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(&prompt.message);
        if let Some(initial) = &prompt.initial {
            input = input.with_initial_text(initial);
        }
        if let Some(validate) = prompt.validate {
            input = input.validate_with(move |value: &String| validate(value));
        }

        match input.interact_text() {
            Ok(value) => Ok(PromptOutcome::Answered(value)),
            Err(e) => interrupted_or_failed(e),
        }
    }

    fn select(&self, prompt: &SelectPrompt) -> DocforgeResult<PromptOutcome<String>> {
        let labels: Vec<String> = prompt.items.iter().map(item_label).collect();
        let chosen = Select::with_theme(&self.theme)
            .with_prompt(&prompt.message)
            .items(&labels)
            .default(prompt.initial)
            .interact_opt();

        match chosen {
            Ok(Some(index)) => prompt
                .items
                .get(index)
                .map(|item| PromptOutcome::Answered(item.value.clone()))
                .ok_or_else(|| {
                    ApplicationError::PromptFailed {
                        reason: format!("selection {index} is out of range"),
                    }
                    .into()
                }),
            Ok(None) => Ok(cancelled()),
            Err(e) => interrupted_or_failed(e),
        }
    }
}

fn item_label(item: &SelectItem) -> String {
    if item.hint.is_empty() {
        item.label.clone()
    } else {
        format!("{} - {}", item.label, item.hint)
    }
}

fn cancelled() -> PromptOutcome<String> {
    debug!("Prompt dismissed");
    PromptOutcome::Cancelled
}

fn interrupted_or_failed(err: dialoguer::Error) -> DocforgeResult<PromptOutcome<String>> {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            // raw mode leaves the cursor hidden after Ctrl-C
            let _ = Term::stderr().show_cursor();
            Ok(cancelled())
        }
        other => Err(ApplicationError::PromptFailed {
            reason: other.to_string(),
        }
        .into()),
    }
}
