//! Presentation flags: how much to say, in what style, and where the
//! configuration file lives. None of them change what gets created.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// More diagnostics on stderr; repeat for more (`-vv` shows every file
    /// and command).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Plain text only. Set automatically by `NO_COLOR`.
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from this TOML file instead of the default location.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Progress style.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// How progress and results are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Colours, symbols and a copy progress bar.
    Human,
    /// One uncoloured line per stage.
    Plain,
}
