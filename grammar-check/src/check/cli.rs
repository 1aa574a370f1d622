use super::options::CheckInput;
use super::orchestrator::CheckOrchestrator;
use super::status::{CheckStatus, report_result};
use super::store::Status;
use crate::internal::prompts::LogAlerts;
use crate::report_stdout;
use crate::shared::engine::GrammarEngine;
use anyhow::Result;
use clap::Args;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// The text to check, quoted as a single argument
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file, for stdin use '-'
    #[arg(long, short = 'f')]
    file: Option<String>,
}

impl CheckArgs {
    fn to_input(&self) -> CheckInput {
        match (&self.text, &self.file) {
            (Some(text), _) => CheckInput::Text(text.clone()),
            (None, Some(location)) => CheckInput::from_location(location),
            (None, None) => CheckInput::Text(String::new()),
        }
    }
}

/// Runs a single check and prints the report. The exit code is the
/// [`CheckStatus`] of the invocation.
#[instrument("grammar-check check", skip_all)]
pub async fn check_root(engine: Arc<dyn GrammarEngine>, args: &CheckArgs) -> Result<i32> {
    let input = args.to_input();
    debug!("Reading input from {:?}", input);
    let text = input.read().await?;

    let mut orchestrator = CheckOrchestrator::new(engine);
    orchestrator.store_mut().set_input(text);

    let status = orchestrator.check_grammar(&LogAlerts).await;
    print_outcome(&orchestrator, status).await;

    Ok(status.to_exit_code())
}

async fn print_outcome(orchestrator: &CheckOrchestrator, status: CheckStatus) {
    let store = orchestrator.store();
    if status.has_report() {
        report_stdout!("{}", store.report().styled().trim_end());
    }
    if store.status() != Status::Ready {
        report_stdout!("Status: {}", store.status());
    }
    report_result(&status);
}
