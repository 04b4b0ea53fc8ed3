//! Diagnostic logging for the binary.
//!
//! The library crates only emit `tracing` events; this module installs the
//! one subscriber, writing to stderr so stdout stays clean for the next-step
//! commands.
//!
//! | Flags      | Level | Targets shown |
//! |------------|-------|---------------|
//! | `-q`       | ERROR | no            |
//! | (none)     | WARN  | no            |
//! | `-v`       | INFO  | no            |
//! | `-vv`      | DEBUG | yes           |
//! | `-vvv`     | TRACE | yes           |
//!
//! A set `RUST_LOG` replaces the level filter entirely.

use std::io::{self, IsTerminal as _};

use anyhow::Context as _;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events pass the verbosity filter; everything else is off.
const LOG_TARGETS: [&str; 3] = ["create_docforge", "docforge_core", "docforge_adapters"];

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args.verbose, args.quiet);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => crate_filter(level)?,
    };

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(level >= LevelFilter::DEBUG)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("installing the tracing subscriber")
}

/// `-q` wins over any number of `-v`.
fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

fn crate_filter(level: LevelFilter) -> anyhow::Result<EnvFilter> {
    let directives = LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .parse(&directives)
        .with_context(|| format!("parsing log filter `{directives}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_the_level() {
        assert_eq!(level_for(0, false), LevelFilter::WARN);
        assert_eq!(level_for(1, false), LevelFilter::INFO);
        assert_eq!(level_for(2, false), LevelFilter::DEBUG);
        assert_eq!(level_for(3, false), LevelFilter::TRACE);
        assert_eq!(level_for(7, false), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(level_for(0, true), LevelFilter::ERROR);
        assert_eq!(level_for(3, true), LevelFilter::ERROR);
    }

    #[test]
    fn crate_filter_parses_at_every_level() {
        for level in [
            LevelFilter::ERROR,
            LevelFilter::WARN,
            LevelFilter::INFO,
            LevelFilter::DEBUG,
            LevelFilter::TRACE,
        ] {
            assert!(crate_filter(level).is_ok(), "{level}");
        }
    }
}
