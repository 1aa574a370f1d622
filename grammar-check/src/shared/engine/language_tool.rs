use super::{EngineError, GrammarEngine};
use crate::shared::models::GrammarMatch;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

const CHECK_PATH: &str = "v2/check";

/// Talks to a LanguageTool server over its HTTP API.
#[derive(Debug, Clone)]
pub struct LanguageToolClient {
    client: reqwest::Client,
    check_url: Url,
}

impl LanguageToolClient {
    pub fn new(server: Url) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("grammar-check/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            check_url: check_url(server)?,
        })
    }

    pub fn check_url(&self) -> &Url {
        &self.check_url
    }
}

fn check_url(mut server: Url) -> Result<Url, EngineError> {
    // Url::join replaces the last path segment unless the base ends with '/'
    if !server.path().ends_with('/') {
        let path = format!("{}/", server.path());
        server.set_path(&path);
    }
    Ok(server.join(CHECK_PATH)?)
}

#[async_trait]
impl GrammarEngine for LanguageToolClient {
    #[instrument(skip_all, fields(server = %self.check_url, locale = locale))]
    async fn analyze(&self, text: &str, locale: &str) -> Result<Vec<GrammarMatch>, EngineError> {
        let res = self
            .client
            .post(self.check_url.clone())
            .form(&[("text", text), ("language", locale)])
            .send()
            .await
            .map_err(|source| EngineError::Unreachable {
                url: self.check_url.to_string(),
                source,
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| EngineError::Unreachable {
            url: self.check_url.to_string(),
            source,
        })?;
        debug!("Server responded with {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(EngineError::ServerError {
                status,
                body: body.trim().to_string(),
            });
        }

        parse_response(&body)
    }
}

#[derive(Deserialize, Debug)]
struct CheckResponse {
    matches: Vec<ApiMatch>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ApiMatch {
    message: String,
    #[serde(default)]
    replacements: Vec<ApiReplacement>,
    offset: usize,
    length: usize,
    context: ApiContext,
    #[serde(default)]
    sentence: String,
    rule: ApiRule,
}

#[derive(Deserialize, Debug)]
struct ApiReplacement {
    value: String,
}

#[derive(Deserialize, Debug)]
struct ApiContext {
    text: String,
    offset: usize,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ApiRule {
    id: String,
    #[serde(default)]
    issue_type: String,
    category: ApiCategory,
}

#[derive(Deserialize, Debug)]
struct ApiCategory {
    id: String,
}

impl From<ApiMatch> for GrammarMatch {
    fn from(value: ApiMatch) -> Self {
        GrammarMatch {
            context: value.context.text,
            rule_id: value.rule.id,
            message: value.message,
            replacements: value.replacements.into_iter().map(|r| r.value).collect(),
            offset_in_context: value.context.offset,
            offset: value.offset,
            error_length: value.length,
            category: value.rule.category.id,
            rule_issue_type: value.rule.issue_type,
            sentence: value.sentence,
        }
    }
}

fn parse_response(body: &str) -> Result<Vec<GrammarMatch>, EngineError> {
    let response: CheckResponse = serde_json::from_str(body)?;
    Ok(response.matches.into_iter().map(GrammarMatch::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
      "software": {"name": "LanguageTool", "version": "6.4"},
      "language": {"name": "English (US)", "code": "en-US"},
      "matches": [
        {
          "message": "Subject-verb agreement error",
          "shortMessage": "",
          "replacements": [{"value": "goes"}, {"value": "went"}],
          "offset": 3,
          "length": 2,
          "context": {"text": "He go to school yesterday.", "offset": 3, "length": 2},
          "sentence": "He go to school yesterday.",
          "type": {"typeName": "Other"},
          "rule": {
            "id": "SUBJECT_VERB_AGREEMENT",
            "description": "Subject-verb agreement",
            "issueType": "grammar",
            "category": {"id": "GRAMMAR", "name": "Grammar"}
          }
        },
        {
          "message": "Possible typo",
          "replacements": [],
          "offset": 6,
          "length": 2,
          "context": {"text": "He go to school yesterday.", "offset": 6, "length": 2},
          "rule": {"id": "MORFOLOGIK_RULE_EN_US", "category": {"id": "TYPOS"}}
        }
      ]
    }"#;

    #[test]
    fn test_parse_response_keeps_order_and_fields() {
        let matches = parse_response(RESPONSE).unwrap();
        assert_eq!(matches.len(), 2);

        let first = &matches[0];
        assert_eq!(first.context, "He go to school yesterday.");
        assert_eq!(first.rule_id, "SUBJECT_VERB_AGREEMENT");
        assert_eq!(first.message, "Subject-verb agreement error");
        assert_eq!(first.replacements, vec!["goes", "went"]);
        assert_eq!(first.category, "GRAMMAR");
        assert_eq!(first.rule_issue_type, "grammar");
        assert_eq!(first.matched_text(), Some("go"));

        let second = &matches[1];
        assert_eq!(second.rule_id, "MORFOLOGIK_RULE_EN_US");
        assert!(second.replacements.is_empty());
        assert_eq!(second.sentence, "");
    }

    #[test]
    fn test_parse_response_without_matches() {
        let matches = parse_response(r#"{"matches": []}"#).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_parse_garbage_is_invalid_response() {
        let err = parse_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, EngineError::InvalidResponse(_)));
    }

    #[test]
    fn test_check_url_handles_trailing_slash() {
        let url = check_url(Url::parse("http://localhost:8081").unwrap()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8081/v2/check");

        let url = check_url(Url::parse("https://example.com/languagetool").unwrap()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/languagetool/v2/check");

        let url = check_url(Url::parse("https://example.com/languagetool/").unwrap()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/languagetool/v2/check");
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // port 9 (discard) is not expected to be listening locally
        let client = LanguageToolClient::new(Url::parse("http://127.0.0.1:9").unwrap()).unwrap();
        let err = client
            .analyze("He go to school yesterday.", "en-US")
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::Unreachable { .. }));
        assert!(err.to_string().contains("http://127.0.0.1:9/v2/check"));
    }
}
