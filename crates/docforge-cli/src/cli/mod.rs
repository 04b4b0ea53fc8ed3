//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text and value enums. No business logic lives here.

use clap::{ArgGroup, Args, Parser};

use docforge_core::domain::{PackageManager, RawInput};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "create-docforge",
    bin_name = "create-docforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a documentation site from a template",
    long_about = "create-docforge copies a documentation site template into a new \
                  directory, names its package.json after the directory, installs \
                  dependencies and makes an initial git commit.",
    after_help = "EXAMPLES:\n\
        \x20 create-docforge\n\
        \x20 create-docforge my-docs\n\
        \x20 create-docforge my-docs --template minimal --use-pnpm\n\
        \x20 create-docforge ./sites/handbook --skip-install --disable-git",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub create: CreateArgs,
}

/// Arguments describing the project to create.
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("package-manager")
        .args(["use_npm", "use_pnpm", "use_yarn"])
        .multiple(false)
))]
pub struct CreateArgs {
    /// Project directory. The last path segment becomes the package name.
    /// Prompted for when omitted.
    #[arg(value_name = "DIRECTORY", help = "Project directory")]
    pub directory: Option<String>,

    /// Template to copy. Prompted for when omitted.
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template to use (e.g. default, minimal)"
    )]
    pub template: Option<String>,

    #[arg(long = "use-npm", help = "Install dependencies with npm")]
    pub use_npm: bool,

    #[arg(long = "use-pnpm", help = "Install dependencies with pnpm")]
    pub use_pnpm: bool,

    #[arg(long = "use-yarn", help = "Install dependencies with yarn")]
    pub use_yarn: bool,

    #[arg(long = "skip-install", help = "Do not install dependencies")]
    pub skip_install: bool,

    #[arg(long = "disable-git", help = "Do not initialize a git repository")]
    pub disable_git: bool,
}

impl CreateArgs {
    /// The package manager named by a `--use-*` flag, if any.
    pub fn package_manager(&self) -> Option<PackageManager> {
        if self.use_npm {
            Some(PackageManager::Npm)
        } else if self.use_pnpm {
            Some(PackageManager::Pnpm)
        } else if self.use_yarn {
            Some(PackageManager::Yarn)
        } else {
            None
        }
    }

    /// Convert into the core's raw input. `git_enabled` is the configured
    /// default that `--disable-git` turns off.
    pub fn into_raw_input(self, git_enabled: bool) -> RawInput {
        let package_manager = self.package_manager();
        RawInput {
            path: self.directory,
            template: self.template,
            package_manager,
            skip_install: self.skip_install,
            init_git: git_enabled && !self.disable_git,
        }
    }
}
