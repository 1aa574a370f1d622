use super::status::CheckStatus;
use crate::internal::prompts::DialogKind;
use crate::shared::engine::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Please enter some text to check.")]
    EmptyInput,
    #[error("Please enter at least {minimum} words for meaningful analysis.")]
    InsufficientContent { word_count: usize, minimum: usize },
    #[error("An error occurred: {0}")]
    EngineFailure(#[from] EngineError),
}

impl CheckError {
    /// Which dialog style the error is shown with.
    pub fn dialog_kind(&self) -> DialogKind {
        match self {
            CheckError::EmptyInput => DialogKind::Warning,
            CheckError::InsufficientContent { .. } => DialogKind::Information,
            CheckError::EngineFailure(_) => DialogKind::Error,
        }
    }

    /// The outcome an invocation rejected with this error reports.
    pub fn check_status(&self) -> CheckStatus {
        match self {
            CheckError::EmptyInput => CheckStatus::EmptyInput,
            CheckError::InsufficientContent { .. } => CheckStatus::InsufficientContent,
            CheckError::EngineFailure(_) => CheckStatus::EngineFailed,
        }
    }
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Unable to find/open {file_name}")]
    FileNotFound { file_name: String },
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
