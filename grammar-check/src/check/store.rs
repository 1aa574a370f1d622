use super::report::{Report, ReportVariant};
use strum::{Display, EnumIter};

/// Phase shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Status {
    #[default]
    #[strum(to_string = "Ready")]
    Ready,
    #[strum(to_string = "Checking grammar...")]
    Checking,
    #[strum(to_string = "Grammar check completed")]
    Completed,
    #[strum(to_string = "Error during grammar check")]
    Failed,
}

/// Current input, displayed report and status.
///
/// Only ever touched from the interaction thread.
#[derive(Debug, Clone, Default)]
pub struct CheckerStore {
    input: String,
    report: Report,
    status: Status,
}

impl CheckerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn set_report(&mut self, text: impl Into<String>, variant: ReportVariant) {
        self.report = Report::new(text, variant);
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.report = Report::default();
        self.status = Status::Ready;
    }
}
