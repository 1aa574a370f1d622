use super::render::{INPUT_LABEL, render_window};
use crate::check::{CheckInput, CheckOrchestrator, report_result};
use crate::cli::InquireInteraction;
use crate::internal::prompts::UserInteraction;
use crate::report_stdout;
use crate::shared::engine::GrammarEngine;
use anyhow::{Result, anyhow};
use clap::Args;
use inquire::InquireError;
use std::sync::Arc;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument};

#[derive(Debug, Args)]
pub struct WindowArgs {
    /// Start with the contents of this file in the input pane
    #[arg(long, short = 'f')]
    file: Option<String>,
}

/// The buttons along the bottom of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum WindowAction {
    #[strum(to_string = "Enter Text")]
    EnterText,
    #[strum(to_string = "Check Grammar")]
    CheckGrammar,
    #[strum(to_string = "Clear Text")]
    ClearText,
    #[strum(to_string = "Quit")]
    Quit,
}

/// Interactive grammar checker window.
pub struct GrammarCheckerWindow<U>
where
    U: UserInteraction,
{
    orchestrator: CheckOrchestrator,
    interaction: U,
}

impl<U> GrammarCheckerWindow<U>
where
    U: UserInteraction,
{
    pub fn new(engine: Arc<dyn GrammarEngine>, interaction: U) -> Self {
        Self {
            orchestrator: CheckOrchestrator::new(engine),
            interaction,
        }
    }

    pub fn orchestrator(&self) -> &CheckOrchestrator {
        &self.orchestrator
    }

    /// Replaces the input pane, as if the user typed `text`.
    pub fn submit_text(&mut self, text: impl Into<String>) {
        self.orchestrator.store_mut().set_input(text);
    }

    /// Handles one button press. Returns `false` once the window should close.
    pub async fn handle(&mut self, action: WindowAction) -> Result<bool> {
        debug!("Window action {}", action);
        match action {
            WindowAction::EnterText => {
                if let Some(text) = self.prompt_for_text()? {
                    self.submit_text(text);
                }
            }
            WindowAction::CheckGrammar => {
                let status = self.orchestrator.check_grammar(&self.interaction).await;
                report_result(&status);
            }
            WindowAction::ClearText => self.orchestrator.clear_text(),
            WindowAction::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Fills the input pane from a file, or stdin for `-`. Returns the
    /// number of characters loaded.
    pub async fn load_file(&mut self, location: &str) -> Result<usize> {
        let text = CheckInput::from_location(location).read().await?;
        let loaded = text.chars().count();
        info!(target: "user", "Loaded {} characters from {}", loaded, location);
        self.submit_text(text);
        Ok(loaded)
    }

    fn prompt_for_text(&self) -> Result<Option<String>> {
        let current = self.orchestrator.store().get_input().to_string();
        let result = tracing_indicatif::suspend_tracing_indicatif(|| {
            inquire::Editor::new(INPUT_LABEL)
                .with_predefined_text(&current)
                .with_help_message("Paste or type the text to check, then save and close the editor")
                .prompt()
        });

        match result {
            Ok(text) => Ok(Some(text)),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(None)
            }
            Err(e) => Err(anyhow!("Unable to read text from the editor. {}", e)),
        }
    }

    fn prompt_for_action(&self) -> Result<WindowAction> {
        let actions: Vec<WindowAction> = WindowAction::iter().collect();
        let result = tracing_indicatif::suspend_tracing_indicatif(|| {
            inquire::Select::new("Action", actions).prompt()
        });

        match result {
            Ok(action) => Ok(action),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(WindowAction::Quit)
            }
            Err(InquireError::NotTTY) => Err(anyhow!(
                "The grammar checker window needs an interactive terminal, use `grammar-check check` instead"
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Draws the window and processes button presses until the user quits.
    pub async fn run(&mut self) -> Result<i32> {
        loop {
            report_stdout!("{}", render_window(self.orchestrator.store()));
            let action = self.prompt_for_action()?;
            if !self.handle(action).await? {
                break;
            }
        }
        Ok(0)
    }
}

#[instrument("grammar-check window", skip_all)]
pub async fn window_root(engine: Arc<dyn GrammarEngine>, args: &WindowArgs) -> Result<i32> {
    let mut window = GrammarCheckerWindow::new(engine, InquireInteraction);

    if let Some(location) = &args.file {
        window.load_file(location).await?;
    }

    window.run().await
}
