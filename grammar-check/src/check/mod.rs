mod cli;
mod error;
pub mod options;
mod orchestrator;
pub mod report;
mod status;
pub mod store;

pub mod prelude {
    pub use super::cli::{CheckArgs, check_root};
}

pub use error::{CheckError, InputError};
pub use options::CheckInput;
pub use orchestrator::{CheckOrchestrator, MIN_WORD_COUNT, validate_input};
pub use report::{NO_ERRORS_MESSAGE, Report, ReportVariant, SEPARATOR_WIDTH};
pub use status::{CheckStatus, report_result};
pub use store::{CheckerStore, Status};
