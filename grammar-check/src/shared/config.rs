use crate::shared::engine::{GrammarEngine, LanguageToolClient};
use clap::{ArgGroup, Parser};
use std::sync::Arc;
use tracing::debug;
use url::Url;

pub const RUN_ID_ENV_VAR: &str = "GRAMMAR_CHECK_RUN_ID";
pub const SERVER_ENV_VAR: &str = "GRAMMAR_CHECK_SERVER";
pub const DEFAULT_SERVER: &str = "http://localhost:8081";

#[derive(Parser, Debug)]
#[clap(group = ArgGroup::new("config"))]
pub struct ConfigOptions {
    /// Base URL of the LanguageTool server that performs the analysis.
    #[arg(long, env = SERVER_ENV_VAR, default_value = DEFAULT_SERVER, global(true))]
    server: Url,

    /// When outputting logs, the run-id is the unique value that will define where they go.
    /// In the case that the run-id is re-used, the old values will be overwritten.
    #[arg(long, global(true), env = RUN_ID_ENV_VAR)]
    run_id: Option<String>,
}

impl ConfigOptions {
    pub fn generate_run_id() -> String {
        let id = nanoid::nanoid!(4, &nanoid::alphabet::SAFE);
        let now = chrono::Local::now();
        let current_time = now.format("%Y%m%d");
        format!("{}-{}", current_time, id)
    }

    pub fn get_run_id(&self) -> String {
        self.run_id.clone().unwrap_or_else(Self::generate_run_id)
    }

    pub fn server(&self) -> &Url {
        &self.server
    }

    /// Builds the engine handle that lives for the rest of the process.
    pub fn build_engine(&self) -> anyhow::Result<Arc<dyn GrammarEngine>> {
        debug!("Using grammar server {}", self.server);
        let client = LanguageToolClient::new(self.server.clone())?;
        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[clap(flatten)]
        config: ConfigOptions,
    }

    #[test]
    fn test_run_id_is_generated_when_missing() {
        let opts = TestCli::parse_from(["test", "--server", DEFAULT_SERVER]).config;
        let run_id = opts.get_run_id();
        let (date, id) = run_id.split_once('-').unwrap();
        assert_eq!(date.len(), 8);
        assert_eq!(id.len(), 4);
    }

    #[test]
    fn test_explicit_run_id_is_kept() {
        let opts = TestCli::parse_from(["test", "--run-id", "abc", "--server", DEFAULT_SERVER])
            .config;
        assert_eq!(opts.get_run_id(), "abc");
    }

    #[test]
    fn test_server_must_be_a_url() {
        let result = TestCli::try_parse_from(["test", "--server", "not a url"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_engine_is_built_from_server() {
        let opts = TestCli::parse_from(["test", "--server", "http://127.0.0.1:8010/"]).config;
        assert_eq!(opts.server().as_str(), "http://127.0.0.1:8010/");
        assert!(opts.build_engine().is_ok());
    }
}
