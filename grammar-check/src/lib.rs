pub mod check;
pub mod cli;
pub mod internal;
pub mod shared;
pub mod window;

pub mod prelude {
    pub use crate::check::prelude::*;
    pub use crate::shared::prelude::*;
    pub use crate::window::prelude::*;
}

pub use check::{CheckOrchestrator, CheckStatus, CheckerStore, Report, ReportVariant, Status};
pub use cli::InquireInteraction;
pub use internal::{DialogKind, LogAlerts, Silent, UserInteraction};
pub use shared::prelude::{
    ConfigOptions, DEFAULT_LOCALE, EngineError, GrammarEngine, GrammarMatch, LanguageToolClient,
    LoggingOpts,
};

/// Preferred way to output data to users. This macro will write the output to tracing for debugging
/// and to stdout using the global stdout writer. Because we use the stdout writer, the calls
/// will all be async.
#[macro_export]
macro_rules! report_stdout {
    ($($arg:tt)*) => {
        tracing::info!(target="stdout", $($arg)*);
        writeln!($crate::prelude::STDOUT_WRITER.write().await, $($arg)*).ok()
    };
}
