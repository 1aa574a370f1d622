use super::error::CheckError;
use super::report::Report;
use super::status::CheckStatus;
use super::store::{CheckerStore, Status};
use crate::internal::prompts::UserInteraction;
use crate::shared::engine::{DEFAULT_LOCALE, GrammarEngine};
use crate::shared::logging::spinner_style;
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

/// Fewer whitespace-separated words than this are not sent to the engine.
pub const MIN_WORD_COUNT: usize = 3;

/// Trims `raw` and checks it is worth sending to the engine.
pub fn validate_input(raw: &str) -> Result<&str, CheckError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(CheckError::EmptyInput);
    }

    let word_count = text.split_whitespace().count();
    if word_count < MIN_WORD_COUNT {
        return Err(CheckError::InsufficientContent {
            word_count,
            minimum: MIN_WORD_COUNT,
        });
    }

    Ok(text)
}

/// Sequences validation, the engine call and formatting, and writes the
/// outcome back to the store.
pub struct CheckOrchestrator {
    engine: Arc<dyn GrammarEngine>,
    store: CheckerStore,
}

impl CheckOrchestrator {
    pub fn new(engine: Arc<dyn GrammarEngine>) -> Self {
        Self::with_store(engine, CheckerStore::new())
    }

    pub fn with_store(engine: Arc<dyn GrammarEngine>, store: CheckerStore) -> Self {
        Self { engine, store }
    }

    pub fn store(&self) -> &CheckerStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CheckerStore {
        &mut self.store
    }

    /// Checks the current input.
    ///
    /// Rejected input and engine failures are shown through `interaction`
    /// and never leave this function. On engine failure the previous report
    /// stays in place.
    pub async fn check_grammar<U>(&mut self, interaction: &U) -> CheckStatus
    where
        U: UserInteraction,
    {
        let text = match validate_input(self.store.get_input()) {
            Ok(text) => text.to_string(),
            Err(e) => {
                debug!("Input rejected: {:?}", e);
                interaction.alert(e.dialog_kind(), &e.to_string());
                return e.check_status();
            }
        };

        self.store.set_status(Status::Checking);
        info!(target: "progress", "{}", Status::Checking);

        let span = info_span!("grammar check", "indicatif.pb_show" = true);
        span.pb_set_style(&spinner_style());
        span.pb_set_message(&Status::Checking.to_string());

        let result = self
            .engine
            .analyze(&text, DEFAULT_LOCALE)
            .instrument(span)
            .await;

        match result {
            Ok(matches) => {
                for grammar_match in &matches {
                    debug!(
                        rule = %grammar_match.rule_id,
                        offset = grammar_match.offset,
                        "Matched {:?}",
                        grammar_match.matched_text()
                    );
                }

                let status = if matches.is_empty() {
                    CheckStatus::NoErrorsFound
                } else {
                    CheckStatus::ErrorsFound
                };

                let report = Report::from_matches(&matches);
                self.store.set_report(report.text, report.variant);
                self.store.set_status(Status::Completed);
                status
            }
            Err(e) => {
                warn!("Grammar engine failed: {:?}", e);
                let error = CheckError::from(e);
                interaction.alert(error.dialog_kind(), &error.to_string());
                self.store.set_status(Status::Failed);
                error.check_status()
            }
        }
    }

    pub fn clear_text(&mut self) {
        self.store.clear();
    }
}
