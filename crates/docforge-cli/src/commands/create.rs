//! The one command: create a documentation site.
//!
//! Responsibility: turn arguments and configuration into a request, pick
//! the adapters, run the core pipeline and print the next steps. No
//! business logic lives here.

use tracing::{info, instrument};

use docforge_adapters::{BundledTemplates, DirectoryTemplateStore, LocalFilesystem, SystemExecutor};
use docforge_core::{
    application::{
        ApplicationError, InputResolver, InvocationContext, ScaffoldOutcome, ScaffoldService,
        ports::TemplateStore,
    },
    domain::PromptOutcome,
};

use crate::{
    cli::CreateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::DialoguerPrompter,
};

/// Execute `create-docforge`.
///
/// 1. Read the invocation context (cwd, package manager user agent)
/// 2. Prompt for the directory and template if they were not given
/// 3. Run the scaffold pipeline with live progress
/// 4. Print next steps
#[instrument(skip_all, fields(directory = args.directory.as_deref().unwrap_or("<prompt>")))]
pub fn execute(args: CreateArgs, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let context = InvocationContext::from_env()?;
    let service = ScaffoldService::new(
        template_store(&config),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemExecutor::new()),
    )
    .with_commit_message(config.git.commit_message.clone());

    let raw = args.into_raw_input(config.git.enabled);
    // the template list is only needed for the prompt
    let templates = if raw.template.is_none() {
        service.templates()?
    } else {
        Vec::new()
    };

    let prompter = DialoguerPrompter::new();
    let resolver = InputResolver::new(&prompter, templates)
        .with_default_template(config.defaults.template.clone());
    let request = match resolver.resolve(raw, &context)? {
        PromptOutcome::Answered(request) => request,
        PromptOutcome::Cancelled => return Err(CliError::Core(ApplicationError::Cancelled.into())),
    };

    let mut progress = output.progress();
    let outcome = service.create(&request, &context, &mut progress)?;
    info!(
        path = %outcome.path().display(),
        files = outcome.files_written,
        package_manager = %outcome.package_manager,
        git = outcome.git_initialized,
        "Project created"
    );

    report(&outcome, output)
}

fn template_store(config: &AppConfig) -> Box<dyn TemplateStore> {
    match &config.templates.dir {
        Some(dir) => Box::new(DirectoryTemplateStore::new(dir.clone())),
        None => Box::new(BundledTemplates::new()),
    }
}

fn report(outcome: &ScaffoldOutcome, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.success(&format!(
        "Created {} at {}",
        outcome.destination.base_name,
        outcome.path().display()
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    for line in outcome.next_steps.commands() {
        output.command(&line)?;
    }
    output.print("")?;
    Ok(())
}
