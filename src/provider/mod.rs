//! Outbound client for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{config::RelayConfig, error::RelayError};

#[derive(Debug, Serialize)]
struct GenerateContentBody<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

// Every level is optional, so absent or null fields end up as
// `EmptyGeneration`. A body that is not JSON, or a field of the wrong JSON
// type, fails to decode and surfaces as `Upstream`.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if non-empty.
    pub fn first_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
            .filter(|t| !t.is_empty())
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &RelayConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.provider_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.gemini_base.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// One call, no retries. The key travels as the `key` query parameter.
    pub async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, RelayError> {
        let body = GenerateContentBody {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "calling provider");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(RelayError::Upstream {
                details: format!("provider responded with status {}: {}", status.as_u16(), text.trim()),
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let content = parsed.first_text().ok_or(RelayError::EmptyGeneration)?;

        info!(chars = content.len(), "content generated successfully");
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> GenerateContentResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn extracts_first_candidate_text() {
        let resp = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hello"},{"text":"ignored"}]}},
                {"content":{"parts":[{"text":"second"}]}}]}"#,
        );
        assert_eq!(resp.first_text().as_deref(), Some("Hello"));
    }

    #[test]
    fn missing_levels_yield_none() {
        assert!(parse("{}").first_text().is_none());
        assert!(parse(r#"{"candidates":[]}"#).first_text().is_none());
        assert!(parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#)
            .first_text()
            .is_none());
        assert!(parse(r#"{"candidates":[{"content":{"parts":[{}]}}]}"#)
            .first_text()
            .is_none());
        assert!(parse(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#)
            .first_text()
            .is_none());
    }

    #[test]
    fn request_body_matches_provider_shape() {
        let body = GenerateContentBody {
            contents: [RequestContent {
                parts: [RequestPart { text: "hi" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "contents": [{ "parts": [{ "text": "hi" }] }] })
        );
    }
}
