//! grammar-check binary, a thin wrapper around the grammar_check library.

mod cli;

use clap::{Parser, Subcommand};
use grammar_check::prelude::{CheckArgs, WindowArgs};
use grammar_check::{ConfigOptions, LoggingOpts};
use human_panic::setup_panic;
use tracing::{Level, enabled, error, info};

/// grammar-check
///
/// Paste some text, send it to a LanguageTool server, and read back
/// every issue it found along with suggested replacements.
#[derive(Parser)]
#[clap(author, version, about)]
pub(crate) struct Cli {
    #[clap(flatten)]
    pub logging: LoggingOpts,

    #[clap(flatten)]
    pub config: ConfigOptions,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub(crate) struct VersionArgs {
    #[arg(long, action)]
    pub short: bool,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Open the interactive grammar checker window.
    #[clap(alias("w"))]
    Window(WindowArgs),
    /// Check a piece of text once and print the report.
    #[clap(alias("c"))]
    Check(CheckArgs),
    /// Print version info and exit
    #[clap(alias("v"))]
    Version(VersionArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    setup_panic!();

    dotenvy::dotenv().ok();
    let opts = Cli::parse();

    let configured_logger = match opts
        .logging
        .configure_logging(&opts.config.get_run_id(), "root")
        .await
    {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Unable to configure logging: {}", e);
            std::process::exit(2);
        }
    };

    let error_code = run_command(opts).await;

    if error_code != 0 || enabled!(Level::DEBUG) {
        info!(target: "user", "More detailed logs at {}", configured_logger.log_location);
    }

    drop(configured_logger);
    std::process::exit(error_code);
}

async fn run_command(opts: Cli) -> i32 {
    cli::commands::handle_command(&opts.config, &opts.command)
        .await
        .unwrap_or_else(|e| {
            error!(target: "user", "Critical Error. {}", e);
            1
        })
}
