//! Command routing for the binary.

use crate::{Command, VersionArgs};
use anyhow::Result;
use colored::Colorize;
use grammar_check::prelude::*;
use grammar_check::report_stdout;
use tracing::instrument;

/// Route a command to its handler.
///
/// The engine handle is built once here and shared with whichever command runs.
pub async fn handle_command(config: &ConfigOptions, command: &Command) -> Result<i32> {
    match command {
        Command::Window(args) => window_root(config.build_engine()?, args).await,
        Command::Check(args) => check_root(config.build_engine()?, args).await,
        Command::Version(args) => print_version(config, args).await,
    }
}

/// Print version information.
#[instrument("grammar-check version", skip_all)]
async fn print_version(config: &ConfigOptions, args: &VersionArgs) -> Result<i32> {
    if args.short {
        report_stdout!("grammar-check {}", env!("CARGO_PKG_VERSION"));
    } else {
        report_stdout!(
            "{}: {:60}",
            "Version".white().bold(),
            env!("CARGO_PKG_VERSION")
        );
        report_stdout!(
            "{}: {:60}",
            "Build Timestamp".white().bold(),
            env!("VERGEN_BUILD_TIMESTAMP")
        );
        report_stdout!(
            "{}: {:60}",
            "Describe".white().bold(),
            env!("VERGEN_GIT_DESCRIBE")
        );
        report_stdout!(
            "{}: {:60}",
            "Commit SHA".white().bold(),
            env!("VERGEN_GIT_SHA")
        );
        report_stdout!(
            "{}: {:60}",
            "Grammar Server".white().bold(),
            config.server().as_str()
        );
        report_stdout!("{}: {:60}", "Locale".white().bold(), DEFAULT_LOCALE);
    }

    Ok(0)
}
