pub mod config;
pub mod engine;
pub mod logging;
pub mod models;

pub mod prelude {
    pub use super::config::{ConfigOptions, DEFAULT_SERVER, RUN_ID_ENV_VAR, SERVER_ENV_VAR};
    pub use super::engine::{
        DEFAULT_LOCALE, EngineError, GrammarEngine, LanguageToolClient, MockGrammarEngine,
    };
    pub use super::logging::{ConfiguredLogger, LoggingOpts, STDERR_WRITER, STDOUT_WRITER};
    pub use super::models::{GrammarMatch, GrammarMatchBuilder};
}
