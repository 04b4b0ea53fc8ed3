//! Scaffold Service - main application orchestrator.
//!
//! Runs every stage after input resolution, strictly in order:
//! 1. Name validation
//! 2. Template lookup
//! 3. Destination safety check (the only gate before writes)
//! 4. Materialization
//! 5. Manifest patching
//! 6. Package manager resolution and install
//! 7. Best-effort git initialization
//! 8. Next-step reporting

use std::path::Path;
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, InvocationContext, ScaffoldObserver,
        ports::{CommandExecutor, Filesystem, TemplateStore},
        services::{
            DependencyInstaller, DestinationChecker, InstallOutcome, ManifestPatcher, NextSteps,
            TemplateMaterializer, VcsInitializer, vcs::DEFAULT_COMMIT_MESSAGE,
        },
    },
    domain::{
        DomainError, PackageManager, ProjectRequest, ResolvedDestination, TemplateDescriptor,
        resolve_package_manager, resolve_project_path, validate_package_name,
    },
    error::DocforgeResult,
};

/// Everything a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub destination: ResolvedDestination,
    pub template: TemplateDescriptor,
    pub package_manager: PackageManager,
    pub install: InstallOutcome,
    pub git_initialized: bool,
    pub files_written: usize,
    pub next_steps: NextSteps,
}

impl ScaffoldOutcome {
    pub fn path(&self) -> &Path {
        &self.destination.absolute_path
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    executor: Box<dyn CommandExecutor>,
    commit_message: String,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        executor: Box<dyn CommandExecutor>,
    ) -> Self {
        Self {
            store,
            filesystem,
            executor,
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }

    /// Message of the initial git commit.
    pub fn with_commit_message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    /// All available templates, sorted by id.
    pub fn templates(&self) -> DocforgeResult<Vec<TemplateDescriptor>> {
        self.store.list()
    }

    /// Create a project from a fully resolved request.
    ///
    /// Invalid names and unknown templates fail before anything is written.
    /// After the destination check passes, a materialization failure can
    /// leave a partial tree and an install failure leaves the complete tree.
    #[instrument(
        skip_all,
        fields(
            path = %request.raw_path(),
            template = %request.template_id(),
        )
    )]
    pub fn create(
        &self,
        request: &ProjectRequest,
        context: &InvocationContext,
        observer: &mut dyn ScaffoldObserver,
    ) -> DocforgeResult<ScaffoldOutcome> {
        // 1. Name
        let project = resolve_project_path(request.raw_path(), &context.cwd)?;
        let validation = validate_package_name(&project.base_name);
        if !validation.is_valid() {
            return Err(DomainError::InvalidProjectName {
                name: project.base_name,
                errors: validation.errors,
            }
            .into());
        }
        for warning in &validation.warnings {
            observer.warning(warning);
        }

        // 2. Template lookup
        let template = self.resolve_template(request.template_id())?;
        info!(template = %template.id, "Template resolved");

        // 3. Gate
        let destination = DestinationChecker::new(self.filesystem.as_ref()).check(&project)?;
        observer.destination_ready(&destination);

        // 4. Copy
        let report = TemplateMaterializer::new(self.store.as_ref(), self.filesystem.as_ref())
            .materialize(&template, &destination, observer)?;

        // 5. Manifest
        ManifestPatcher::new(self.filesystem.as_ref()).patch(&destination)?;

        // 6. Package manager
        let package_manager = resolve_package_manager(
            request.package_manager_override(),
            context.user_agent.as_deref(),
        );
        if !request.skip_install() {
            observer.install_started(package_manager.install());
        }
        let install = DependencyInstaller::new(self.executor.as_ref()).install(
            &package_manager,
            &destination,
            request.skip_install(),
        )?;
        observer.install_finished(&install);

        // 7. Git
        let git_initialized = request.init_git()
            && VcsInitializer::new(self.executor.as_ref(), self.filesystem.as_ref())
                .with_commit_message(self.commit_message.as_str())
                .initialize(&destination.absolute_path);
        observer.git_finished(git_initialized);

        // 8. Report
        let next_steps = NextSteps::build(&destination, &context.cwd, &package_manager, install);

        info!(path = %destination.absolute_path.display(), "Project created");
        Ok(ScaffoldOutcome {
            destination,
            template,
            package_manager: package_manager.kind(),
            install,
            git_initialized,
            files_written: report.files_written,
            next_steps,
        })
    }

    fn resolve_template(&self, id: &str) -> DocforgeResult<TemplateDescriptor> {
        if let Some(template) = self.store.get(id)? {
            return Ok(template);
        }
        let available = self.store.list()?.into_iter().map(|t| t.id).collect();
        Err(ApplicationError::UnknownTemplate {
            id: id.to_string(),
            available,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::NoopObserver;
    use crate::application::ports::output::{
        MockCommandExecutor, MockFilesystem, MockTemplateStore,
    };
    use crate::error::DocforgeError;

    fn catalog() -> MockTemplateStore {
        let mut store = MockTemplateStore::new();
        store.expect_get().returning(|id| {
            Ok((id == "minimal").then(|| TemplateDescriptor::new("minimal", "minimal")))
        });
        store.expect_list().returning(|| {
            Ok(vec![
                TemplateDescriptor::new("default", "default"),
                TemplateDescriptor::new("minimal", "minimal"),
            ])
        });
        store
    }

    /// Filesystem and executor that fail the test if touched.
    fn untouched() -> (Box<MockFilesystem>, Box<MockCommandExecutor>) {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        let mut executor = MockCommandExecutor::new();
        executor.expect_execute().never();
        (Box::new(fs), Box::new(executor))
    }

    #[test]
    fn invalid_name_touches_nothing() {
        let (fs, executor) = untouched();
        let service = ScaffoldService::new(Box::new(catalog()), fs, executor);
        let request = ProjectRequest::new("My Docs", "minimal");

        let err = service
            .create(&request, &InvocationContext::new("/work"), &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(
            err,
            DocforgeError::Domain(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn unknown_template_touches_nothing() {
        let (fs, executor) = untouched();
        let service = ScaffoldService::new(Box::new(catalog()), fs, executor);
        let request = ProjectRequest::new("my-docs", "blog");

        let err = service
            .create(&request, &InvocationContext::new("/work"), &mut NoopObserver)
            .unwrap_err();
        match err {
            DocforgeError::Application(ApplicationError::UnknownTemplate { id, available }) => {
                assert_eq!(id, "blog");
                assert_eq!(available, vec!["default".to_string(), "minimal".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn not_empty_destination_stops_before_copy() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| true);
        fs.expect_is_writable().returning(|_| true);
        fs.expect_list_dir()
            .returning(|_| Ok(vec!["notes.txt".to_string()]));
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let mut store = catalog();
        store.expect_entries().never();

        let mut executor = MockCommandExecutor::new();
        executor.expect_execute().never();

        let service = ScaffoldService::new(Box::new(store), Box::new(fs), Box::new(executor));
        let request = ProjectRequest::new("existing-dir", "minimal");
        let err = service
            .create(&request, &InvocationContext::new("/work"), &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(
            err,
            DocforgeError::Application(ApplicationError::NotEmpty { .. })
        ));
    }

    #[test]
    fn name_warnings_reach_the_observer() {
        struct Warnings(Vec<String>);
        impl ScaffoldObserver for Warnings {
            fn warning(&mut self, message: &str) {
                self.0.push(message.to_string());
            }
        }

        // The gate rejects the destination; warnings are emitted before it.
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| false);

        let mut executor = MockCommandExecutor::new();
        executor.expect_execute().never();

        let service = ScaffoldService::new(Box::new(catalog()), Box::new(fs), Box::new(executor));
        let mut observer = Warnings(Vec::new());
        let request = ProjectRequest::new("docs!", "minimal");
        let _ = service.create(&request, &InvocationContext::new("/work"), &mut observer);

        assert_eq!(observer.0.len(), 1);
        assert!(observer.0[0].contains("special characters"));
    }
}
