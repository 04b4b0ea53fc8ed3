//! Input Resolver - fills in whatever the invocation left out.
//!
//! Asks at most one question per missing field, name first, then template.
//! The package manager is never asked for.

use std::path::Path;
use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError, InvocationContext,
        ports::{Prompter, SelectItem, SelectPrompt, TextPrompt},
    },
    domain::{ProjectRequest, PromptOutcome, RawInput, TemplateDescriptor, validate_package_name},
    error::DocforgeResult,
};

/// Suggested answer for the project name prompt.
pub const DEFAULT_PROJECT_NAME: &str = "my-docs";

/// Inline check for the name prompt: the final path segment must be a valid
/// package name.
pub fn validate_name_input(input: &str) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Please enter a project name".into());
    }

    let Some(name) = Path::new(trimmed).file_name().and_then(|n| n.to_str()) else {
        return Err(format!("'{trimmed}' does not end in a directory name"));
    };

    let validation = validate_package_name(name);
    match validation.errors.first() {
        Some(first) => Err(format!("Invalid project name: {first}")),
        None => Ok(()),
    }
}

/// Merges explicit invocation parameters with prompt answers.
pub struct InputResolver<'a> {
    prompter: &'a dyn Prompter,
    templates: Vec<TemplateDescriptor>,
    default_template: Option<String>,
}

impl<'a> InputResolver<'a> {
    /// `templates` are the choices offered when no template was given.
    pub fn new(prompter: &'a dyn Prompter, templates: Vec<TemplateDescriptor>) -> Self {
        Self {
            prompter,
            templates,
            default_template: None,
        }
    }

    /// Template highlighted in the template prompt.
    pub fn with_default_template(mut self, id: impl Into<String>) -> Self {
        self.default_template = Some(id.into());
        self
    }

    /// Build a complete request, prompting for the path and template if absent.
    ///
    /// Returns `PromptOutcome::Cancelled` as soon as any prompt is dismissed;
    /// later prompts are not shown.
    #[instrument(skip_all, fields(cwd = %context.cwd.display()))]
    pub fn resolve(
        &self,
        raw: RawInput,
        context: &InvocationContext,
    ) -> DocforgeResult<PromptOutcome<ProjectRequest>> {
        let path = match non_blank(raw.path) {
            Some(path) => path,
            None => match self.ask_path()? {
                PromptOutcome::Answered(path) => path,
                PromptOutcome::Cancelled => return Ok(PromptOutcome::Cancelled),
            },
        };

        let template = match non_blank(raw.template) {
            Some(template) => template,
            None => match self.ask_template()? {
                PromptOutcome::Answered(template) => template,
                PromptOutcome::Cancelled => return Ok(PromptOutcome::Cancelled),
            },
        };

        debug!(path = %path, template = %template, "Input resolved");

        Ok(PromptOutcome::Answered(
            ProjectRequest::new(path, template)
                .with_package_manager(raw.package_manager)
                .with_skip_install(raw.skip_install)
                .with_git(raw.init_git),
        ))
    }

    fn ask_path(&self) -> DocforgeResult<PromptOutcome<String>> {
        let prompt = TextPrompt {
            message: "What is your project named?".into(),
            initial: Some(DEFAULT_PROJECT_NAME.into()),
            validate: Some(validate_name_input),
        };
        Ok(self
            .prompter
            .text(&prompt)?
            .map(|answer| answer.trim().to_string()))
    }

    fn ask_template(&self) -> DocforgeResult<PromptOutcome<String>> {
        if self.templates.is_empty() {
            return Err(ApplicationError::StoreError {
                reason: "no templates are available".into(),
            }
            .into());
        }

        let initial = self
            .default_template
            .as_deref()
            .and_then(|id| self.templates.iter().position(|t| t.id == id))
            .unwrap_or(0);

        let prompt = SelectPrompt {
            message: "Which template would you like to use?".into(),
            items: self
                .templates
                .iter()
                .map(|t| SelectItem {
                    value: t.id.clone(),
                    label: t.id.clone(),
                    hint: t.description.clone(),
                })
                .collect(),
            initial,
        };
        self.prompter.select(&prompt)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockPrompter;
    use crate::domain::PackageManager;

    fn templates() -> Vec<TemplateDescriptor> {
        vec![
            TemplateDescriptor::new("default", "default").with_description("Full site"),
            TemplateDescriptor::new("minimal", "minimal").with_description("One page"),
        ]
    }

    fn ctx() -> InvocationContext {
        InvocationContext::new("/work")
    }

    #[test]
    fn explicit_fields_skip_prompts() {
        let prompter = MockPrompter::new();
        let raw = RawInput {
            path: Some("my-docs".into()),
            template: Some("minimal".into()),
            package_manager: Some(PackageManager::Pnpm),
            skip_install: true,
            init_git: true,
        };

        let outcome = InputResolver::new(&prompter, templates())
            .resolve(raw, &ctx())
            .unwrap();
        let request = outcome.answered().unwrap();
        assert_eq!(request.raw_path(), "my-docs");
        assert_eq!(request.template_id(), "minimal");
        assert_eq!(request.package_manager_override(), Some(PackageManager::Pnpm));
        assert!(request.skip_install());
    }

    #[test]
    fn missing_fields_prompt_name_then_template() {
        let mut seq = mockall::Sequence::new();
        let mut prompter = MockPrompter::new();
        prompter
            .expect_text()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|p| p.validate.is_some())
            .returning(|_| Ok(PromptOutcome::Answered(" handbook ".into())));
        prompter
            .expect_select()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|p| p.items.len() == 2 && p.initial == 1)
            .returning(|_| Ok(PromptOutcome::Answered("minimal".into())));

        let outcome = InputResolver::new(&prompter, templates())
            .with_default_template("minimal")
            .resolve(RawInput::default(), &ctx())
            .unwrap();
        let request = outcome.answered().unwrap();
        assert_eq!(request.raw_path(), "handbook");
        assert_eq!(request.template_id(), "minimal");
    }

    #[test]
    fn cancelling_name_skips_template_prompt() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_text()
            .times(1)
            .returning(|_| Ok(PromptOutcome::Cancelled));
        prompter.expect_select().never();

        let outcome = InputResolver::new(&prompter, templates())
            .resolve(RawInput::default(), &ctx())
            .unwrap();
        assert!(outcome.is_cancelled());
    }

    #[test]
    fn cancelling_template_cancels_request() {
        let mut prompter = MockPrompter::new();
        prompter.expect_text().never();
        prompter
            .expect_select()
            .times(1)
            .returning(|_| Ok(PromptOutcome::Cancelled));

        let raw = RawInput {
            path: Some("my-docs".into()),
            ..RawInput::default()
        };
        let outcome = InputResolver::new(&prompter, templates())
            .resolve(raw, &ctx())
            .unwrap();
        assert!(outcome.is_cancelled());
    }

    #[test]
    fn blank_path_is_treated_as_missing() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_text()
            .times(1)
            .returning(|_| Ok(PromptOutcome::Answered("docs".into())));

        let raw = RawInput {
            path: Some("   ".into()),
            template: Some("default".into()),
            ..RawInput::default()
        };
        let request = InputResolver::new(&prompter, templates())
            .resolve(raw, &ctx())
            .unwrap()
            .answered()
            .unwrap();
        assert_eq!(request.raw_path(), "docs");
    }

    #[test]
    fn inline_validation() {
        assert!(validate_name_input("my-docs").is_ok());
        assert!(validate_name_input("sites/handbook").is_ok());
        assert!(validate_name_input("").is_err());
        assert!(validate_name_input("My Docs").is_err());
        assert!(validate_name_input("sites/Handbook").is_err());
        assert!(validate_name_input("_private").is_err());
    }
}
