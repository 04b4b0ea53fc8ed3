//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::debug;

use docforge_core::{
    application::{InstallOutcome, MaterializeReport, ScaffoldObserver},
    domain::{CommandLine, ResolvedDestination, TemplateDescriptor},
};

use crate::cli::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

const PROGRESS_TEMPLATE: &str = "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}";

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.symbol_line("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.symbol_line("\u{26a0}", msg, |s| s.yellow().bold().to_string())
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.symbol_line("\u{2139}", msg, |s| s.blue().bold().to_string())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// A shell command the user should run, highlighted.
    pub fn command(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("  {line}")
        } else {
            format!("  {}", line.cyan())
        };
        self.term.write_line(&line)
    }

    fn symbol_line(
        &self,
        symbol: &str,
        msg: &str,
        paint: impl Fn(&str) -> String,
    ) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            format!("{} {msg}", paint(symbol))
        };
        self.term.write_line(&line)
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    /// An observer that reports pipeline progress through this manager.
    pub fn progress(&self) -> ProgressReporter<'_> {
        ProgressReporter {
            output: self,
            bar: None,
        }
    }
}

/// Shows pipeline stages as they happen; a progress bar for the copy in
/// human mode, one line per stage otherwise.
pub struct ProgressReporter<'a> {
    output: &'a OutputManager,
    bar: Option<ProgressBar>,
}

impl ProgressReporter<'_> {
    fn emit(&self, result: io::Result<()>) {
        if let Err(e) = result {
            debug!(error = %e, "Could not write progress output");
        }
    }

    fn copy_bar(total: usize) -> ProgressBar {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        bar
    }
}

impl ScaffoldObserver for ProgressReporter<'_> {
    fn warning(&mut self, message: &str) {
        self.emit(self.output.warning(message));
    }

    fn destination_ready(&mut self, destination: &ResolvedDestination) {
        self.emit(self.output.header(&format!(
            "Creating a new documentation site in {}",
            destination.absolute_path.display()
        )));
    }

    fn copy_started(&mut self, template: &TemplateDescriptor, total_files: usize) {
        if self.output.is_quiet() {
            return;
        }
        if self.output.format() == OutputFormat::Human {
            self.bar = Some(Self::copy_bar(total_files));
        } else {
            self.emit(self.output.info(&format!(
                "Copying template '{}' ({total_files} files)",
                template.id
            )));
        }
    }

    fn file_copied(&mut self, relative: &Path) {
        debug!(file = %relative.display(), "Copied");
        if let Some(bar) = &self.bar {
            bar.set_message(relative.display().to_string());
            bar.inc(1);
        }
    }

    fn copy_finished(&mut self, report: &MaterializeReport) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        self.emit(
            self.output
                .success(&format!("Copied {} files", report.files_written)),
        );
    }

    fn install_started(&mut self, command: &CommandLine) {
        self.emit(
            self.output
                .info(&format!("Installing dependencies with `{command}`")),
        );
    }

    fn install_finished(&mut self, outcome: &InstallOutcome) {
        if *outcome == InstallOutcome::Installed {
            self.emit(self.output.success("Dependencies installed"));
        }
    }

    fn git_finished(&mut self, initialized: bool) {
        if initialized {
            self.emit(self.output.success("Initialized a git repository"));
        }
    }
}
