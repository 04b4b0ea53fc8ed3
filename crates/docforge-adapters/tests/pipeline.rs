//! End-to-end runs of the scaffolding pipeline over real adapters.

use std::path::{Path, PathBuf};

use docforge_adapters::{
    BundledTemplates, LocalFilesystem, MemoryFilesystem, RecordingExecutor, ScriptedAnswer,
    ScriptedPrompter,
};
use docforge_core::{
    application::{ApplicationError, InstallOutcome},
    domain::DomainError,
    prelude::*,
};

// ── helpers ───────────────────────────────────────────────────────────────────

fn service(fs: &MemoryFilesystem, executor: &RecordingExecutor) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(BundledTemplates::new()),
        Box::new(fs.clone()),
        Box::new(executor.clone()),
    )
}

fn ctx() -> InvocationContext {
    InvocationContext::new("/work")
}

fn manifest_name(fs: &MemoryFilesystem, dir: &str) -> String {
    let text = fs
        .read_text(Path::new(dir).join("package.json"))
        .expect("package.json written");
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    value["name"].as_str().unwrap().to_string()
}

/// Executor on which git is installed and no repository exists yet.
fn fresh_git() -> RecordingExecutor {
    RecordingExecutor::new()
        .exit_with("git rev-parse", 128)
        .unavailable("hg")
}

// ── scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn scenario_a_minimal_without_install() {
    let fs = MemoryFilesystem::new().with_dir("/work");
    let executor = RecordingExecutor::new();
    let request = ProjectRequest::new("my-docs", "minimal")
        .with_skip_install(true)
        .with_git(false);

    let outcome = service(&fs, &executor)
        .create(&request, &ctx(), &mut NoopObserver)
        .unwrap();

    assert_eq!(manifest_name(&fs, "/work/my-docs"), "my-docs");
    assert!(fs.exists(Path::new("/work/my-docs/.gitignore")));
    assert!(!fs.exists(Path::new("/work/my-docs/gitignore")));
    assert!(!fs.exists(Path::new("/work/my-docs/node_modules")));
    assert!(executor.calls().is_empty());
    assert_eq!(outcome.install, InstallOutcome::Skipped);
    assert_eq!(
        outcome.next_steps.commands(),
        vec!["cd my-docs", "npm install", "npm run dev"]
    );
}

#[test]
fn scenario_b_invalid_name_creates_nothing() {
    let fs = MemoryFilesystem::new().with_dir("/work");
    let executor = RecordingExecutor::new();
    let request = ProjectRequest::new("My Docs", "minimal").with_skip_install(true);

    let err = service(&fs, &executor)
        .create(&request, &ctx(), &mut NoopObserver)
        .unwrap_err();

    assert!(matches!(
        err,
        DocforgeError::Domain(DomainError::InvalidProjectName { .. })
    ));
    assert!(!fs.exists(Path::new("/work/My Docs")));
    assert_eq!(fs.tree("/work"), vec![PathBuf::from("/work")]);
}

#[test]
fn scenario_c_non_empty_destination_is_untouched() {
    let fs = MemoryFilesystem::new().with_file("/work/existing-dir/notes.txt", "keep me");
    let before = fs.tree("/work");
    let executor = RecordingExecutor::new();

    let err = service(&fs, &executor)
        .create(
            &ProjectRequest::new("existing-dir", "minimal"),
            &ctx(),
            &mut NoopObserver,
        )
        .unwrap_err();

    match err {
        DocforgeError::Application(ApplicationError::NotEmpty { conflicts, .. }) => {
            assert_eq!(conflicts, vec!["notes.txt".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fs.tree("/work"), before);
    assert_eq!(
        fs.read_text("/work/existing-dir/notes.txt").as_deref(),
        Some("keep me")
    );
    assert!(executor.calls().is_empty());
}

#[test]
fn scenario_d_user_agent_selects_pnpm() {
    let fs = MemoryFilesystem::new();
    let executor = fresh_git();
    let context = ctx().with_user_agent("pnpm/9.1.0 npm/? node/v20.11.0 linux x64");

    let outcome = service(&fs, &executor)
        .create(&ProjectRequest::new("my-docs", "default"), &context, &mut NoopObserver)
        .unwrap();

    assert_eq!(outcome.package_manager, PackageManager::Pnpm);
    assert_eq!(executor.calls()[0], "pnpm install");
    assert_eq!(
        executor.invocations()[0].1,
        PathBuf::from("/work/my-docs")
    );
    assert_eq!(outcome.next_steps.commands(), vec!["cd my-docs", "pnpm run dev"]);
}

// ── destination ───────────────────────────────────────────────────────────────

#[test]
fn nested_path_takes_final_segment_as_name() {
    let fs = MemoryFilesystem::new();
    let executor = RecordingExecutor::new();
    let request = ProjectRequest::new("a/b/c/handbook", "minimal")
        .with_skip_install(true)
        .with_git(false);

    let outcome = service(&fs, &executor)
        .create(&request, &ctx(), &mut NoopObserver)
        .unwrap();

    assert!(!outcome.destination.existed_before);
    assert_eq!(manifest_name(&fs, "/work/a/b/c/handbook"), "handbook");
    assert_eq!(
        outcome.next_steps.commands()[0],
        format!("cd {}", Path::new("a/b/c/handbook").display())
    );
}

#[test]
fn allow_listed_artifacts_do_not_block() {
    let fs = MemoryFilesystem::new()
        .with_file("/work/site/.git/HEAD", "ref: refs/heads/main\n")
        .with_file("/work/site/LICENSE", "MIT")
        .with_file("/work/site/.DS_Store", "");
    let executor = RecordingExecutor::new();
    let request = ProjectRequest::new("site", "minimal").with_skip_install(true);

    let outcome = service(&fs, &executor)
        .create(&request, &ctx(), &mut NoopObserver)
        .unwrap();

    assert!(outcome.destination.existed_before);
    assert_eq!(manifest_name(&fs, "/work/site"), "site");
    assert_eq!(fs.read_text("/work/site/LICENSE").as_deref(), Some("MIT"));
    // already inside a work tree
    assert!(!outcome.git_initialized);
    assert!(!executor.calls().iter().any(|c| c == "git init"));
}

#[test]
fn unwritable_destination_is_untouched() {
    let fs = MemoryFilesystem::new().with_dir("/work/locked");
    fs.set_readonly("/work/locked");
    let before = fs.tree("/work");
    let executor = RecordingExecutor::new();

    let err = service(&fs, &executor)
        .create(&ProjectRequest::new("locked", "minimal"), &ctx(), &mut NoopObserver)
        .unwrap_err();

    assert!(matches!(
        err,
        DocforgeError::Application(ApplicationError::Unwritable { .. })
    ));
    assert_eq!(fs.tree("/work"), before);
}

#[test]
fn unknown_template_creates_nothing() {
    let fs = MemoryFilesystem::new().with_dir("/work");
    let executor = RecordingExecutor::new();

    let err = service(&fs, &executor)
        .create(&ProjectRequest::new("my-docs", "blog"), &ctx(), &mut NoopObserver)
        .unwrap_err();

    match err {
        DocforgeError::Application(ApplicationError::UnknownTemplate { available, .. }) => {
            assert_eq!(available, vec!["default".to_string(), "minimal".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!fs.exists(Path::new("/work/my-docs")));
}

// ── install ───────────────────────────────────────────────────────────────────

#[test]
fn skip_install_tree_matches_installed_tree() {
    let skipped_fs = MemoryFilesystem::new();
    let skipped_exec = RecordingExecutor::new();
    service(&skipped_fs, &skipped_exec)
        .create(
            &ProjectRequest::new("my-docs", "default")
                .with_skip_install(true)
                .with_git(false),
            &ctx(),
            &mut NoopObserver,
        )
        .unwrap();

    let installed_fs = MemoryFilesystem::new();
    let installed_exec = RecordingExecutor::new();
    service(&installed_fs, &installed_exec)
        .create(
            &ProjectRequest::new("my-docs", "default").with_git(false),
            &ctx(),
            &mut NoopObserver,
        )
        .unwrap();

    assert!(skipped_exec.calls().is_empty());
    assert_eq!(installed_exec.calls(), vec!["npm install"]);
    assert_eq!(skipped_fs.tree("/work"), installed_fs.tree("/work"));
}

#[test]
fn install_failure_keeps_the_materialized_tree() {
    let fs = MemoryFilesystem::new();
    let executor = RecordingExecutor::new().exit_with("yarn install", 1);
    let request = ProjectRequest::new("my-docs", "minimal")
        .with_package_manager(Some(PackageManager::Yarn));

    let err = service(&fs, &executor)
        .create(&request, &ctx(), &mut NoopObserver)
        .unwrap_err();

    match &err {
        DocforgeError::Application(ApplicationError::InstallFailed { command, .. }) => {
            assert_eq!(command, "yarn install");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.suggestions().iter().any(|s| s.contains("yarn install")));
    assert_eq!(manifest_name(&fs, "/work/my-docs"), "my-docs");
    assert!(fs.exists(Path::new("/work/my-docs/.gitignore")));
    // git runs only after a successful install
    assert_eq!(executor.calls(), vec!["yarn install"]);
}

#[test]
fn materialization_failure_reports_progress() {
    let fs = MemoryFilesystem::new();
    fs.fail_writes_after(2);
    let executor = RecordingExecutor::new();

    let err = service(&fs, &executor)
        .create(
            &ProjectRequest::new("my-docs", "minimal").with_skip_install(true),
            &ctx(),
            &mut NoopObserver,
        )
        .unwrap_err();

    match err {
        DocforgeError::Application(ApplicationError::MaterializationFailed {
            files_written, ..
        }) => assert_eq!(files_written, 2),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(fs.exists(Path::new("/work/my-docs")));
    assert!(executor.calls().is_empty());
}

// ── git ───────────────────────────────────────────────────────────────────────

#[test]
fn git_repository_is_initialized_after_install() {
    let fs = MemoryFilesystem::new();
    let executor = fresh_git();

    let outcome = service(&fs, &executor)
        .with_commit_message("docs: initial scaffold")
        .create(&ProjectRequest::new("my-docs", "minimal"), &ctx(), &mut NoopObserver)
        .unwrap();

    assert!(outcome.git_initialized);
    assert_eq!(
        executor.calls(),
        vec![
            "npm install",
            "git --version",
            "git rev-parse --is-inside-work-tree",
            "hg --cwd . root",
            "git init",
            "git checkout -b main",
            "git add -A",
            "git commit -m \"docs: initial scaffold\"",
        ]
    );
}

#[test]
fn git_failure_never_fails_the_run() {
    let fs = MemoryFilesystem::new();
    let executor = fresh_git().exit_with("git commit", 1);

    let outcome = service(&fs, &executor)
        .create(&ProjectRequest::new("my-docs", "minimal"), &ctx(), &mut NoopObserver)
        .unwrap();

    assert!(!outcome.git_initialized);
}

#[test]
fn disabled_git_runs_no_git_commands() {
    let fs = MemoryFilesystem::new();
    let executor = fresh_git();

    service(&fs, &executor)
        .create(
            &ProjectRequest::new("my-docs", "minimal").with_git(false),
            &ctx(),
            &mut NoopObserver,
        )
        .unwrap();

    assert_eq!(executor.calls(), vec!["npm install"]);
}

// ── prompts ───────────────────────────────────────────────────────────────────

#[test]
fn prompted_input_feeds_the_pipeline() {
    let fs = MemoryFilesystem::new();
    let executor = RecordingExecutor::new();
    let service = service(&fs, &executor);
    let prompter = ScriptedPrompter::new([
        ScriptedAnswer::answer("Bad Name"),
        ScriptedAnswer::answer("team-handbook"),
        ScriptedAnswer::answer("default"),
    ]);

    let raw = RawInput {
        skip_install: true,
        ..RawInput::default()
    };
    let request = InputResolver::new(&prompter, service.templates().unwrap())
        .resolve(raw, &ctx())
        .unwrap()
        .answered()
        .unwrap();
    service
        .create(&request, &ctx(), &mut NoopObserver)
        .unwrap();

    assert_eq!(prompter.asked().len(), 2);
    assert_eq!(prompter.rejected().len(), 1);
    assert_eq!(manifest_name(&fs, "/work/team-handbook"), "team-handbook");
}

#[test]
fn cancelled_prompt_touches_nothing() {
    let fs = MemoryFilesystem::new().with_dir("/work");
    let executor = RecordingExecutor::new();
    let service = service(&fs, &executor);
    let prompter = ScriptedPrompter::new([ScriptedAnswer::Cancel]);

    let outcome = InputResolver::new(&prompter, service.templates().unwrap())
        .resolve(RawInput::default(), &ctx())
        .unwrap();

    assert!(outcome.is_cancelled());
    assert_eq!(fs.tree("/work"), vec![PathBuf::from("/work")]);
}

// ── real disk ─────────────────────────────────────────────────────────────────

#[test]
fn local_filesystem_end_to_end() {
    let temp = tempfile::TempDir::new().unwrap();
    let executor = RecordingExecutor::new();
    let service = ScaffoldService::new(
        Box::new(BundledTemplates::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(executor.clone()),
    );
    let context = InvocationContext::new(temp.path());

    let outcome = service
        .create(
            &ProjectRequest::new("docs/site", "default")
                .with_skip_install(true)
                .with_git(false),
            &context,
            &mut NoopObserver,
        )
        .unwrap();

    let root = temp.path().join("docs/site");
    let manifest = std::fs::read_to_string(root.join("package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"site\""));
    assert!(manifest.ends_with("}\n"));
    assert!(root.join(".gitignore").is_file());
    assert!(root.join("pages/guide/getting-started.mdx").is_file());
    assert_eq!(outcome.files_written, 10);
    assert!(executor.calls().is_empty());
}

#[cfg(unix)]
#[test]
fn failed_nested_creation_leaves_the_disk_untouched() {
    let temp = tempfile::TempDir::new().unwrap();
    let service = ScaffoldService::new(
        Box::new(BundledTemplates::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(RecordingExecutor::new()),
    );
    // a path segment longer than any filesystem allows
    let raw = format!("outer/{}/docs", "x".repeat(300));

    let err = service
        .create(
            &ProjectRequest::new(raw, "minimal")
                .with_skip_install(true)
                .with_git(false),
            &InvocationContext::new(temp.path()),
            &mut NoopObserver,
        )
        .unwrap_err();

    match err {
        DocforgeError::Application(ApplicationError::CreateFailed { reason, .. }) => {
            assert!(reason.contains("create directory"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}
