use tracing::{error, info, warn};

/// Outcome of one check invocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    NoErrorsFound = 0,
    ErrorsFound = 1,
    EmptyInput = 2,
    InsufficientContent = 3,
    EngineFailed = 4,
}

pub fn report_result(status: &CheckStatus) {
    match status {
        CheckStatus::NoErrorsFound => info!(target: "user", "No grammatical errors found"),
        CheckStatus::ErrorsFound => warn!(target: "user", "Grammatical issues found"),
        CheckStatus::EmptyInput => warn!(target: "user", "Nothing to check"),
        CheckStatus::InsufficientContent => warn!(target: "user", "Not enough text to check"),
        CheckStatus::EngineFailed => error!(target: "user", "Grammar check failed"),
    }
}

impl CheckStatus {
    pub fn to_exit_code(self) -> i32 {
        // discriminants are the exit codes
        self as i32
    }

    /// Whether the engine produced a report for this invocation.
    pub fn has_report(self) -> bool {
        matches!(self, CheckStatus::NoErrorsFound | CheckStatus::ErrorsFound)
    }
}
