use crate::shared::models::GrammarMatch;
use async_trait::async_trait;
use mockall::automock;
use reqwest::StatusCode;
use thiserror::Error;

mod language_tool;

pub use language_tool::LanguageToolClient;

/// The engine only ever checks American English.
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unable to reach the grammar server at {url}. {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Grammar server responded with {status}: {body}")]
    ServerError { status: StatusCode, body: String },
    #[error("Unable to parse the grammar server response. {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("Invalid grammar server URL. {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unable to build HTTP client. {0}")]
    Client(#[from] reqwest::Error),
}

/// Black-box grammar analysis.
///
/// Implementations are built once at start-up and shared for the lifetime of
/// the process. Matches come back in the order they appear in `text`.
#[automock]
#[async_trait]
pub trait GrammarEngine: Send + Sync {
    async fn analyze(&self, text: &str, locale: &str) -> Result<Vec<GrammarMatch>, EngineError>;
}
