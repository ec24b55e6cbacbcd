use anyhow::anyhow;
use serde::Deserialize;
use tracing::error;

use crate::model::ContentType;

pub const FALLBACK_REPLY: &str =
    "I'm experiencing technical difficulties. Please try again later.";

#[derive(Debug, Deserialize)]
struct RelayReply {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// HTTP caller for the relay's generation endpoint.
#[derive(Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Always produces text to display: the generated content, a formatted
    /// relay error, or [`FALLBACK_REPLY`] when the relay cannot be reached or
    /// its reply is unusable.
    pub async fn generate(&self, topic: &str, kind: ContentType) -> String {
        match self.try_generate(topic, kind).await {
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "error generating content");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    async fn try_generate(&self, topic: &str, kind: ContentType) -> anyhow::Result<String> {
        let response = self
            .client
            .post(format!("{}/api/generate-content", self.base_url))
            .json(&serde_json::json!({ "topic": topic, "type": kind }))
            .send()
            .await?;

        let ok = response.status().is_success();
        let reply: RelayReply = response.json().await?;

        if ok {
            reply
                .content
                .filter(|c| !c.is_empty())
                .ok_or_else(|| anyhow!("relay reply carried no content"))
        } else {
            Ok(format_error(
                reply.error.as_deref().unwrap_or_default(),
                reply.details.as_deref(),
            ))
        }
    }
}

pub fn format_error(error: &str, details: Option<&str>) -> String {
    format!("Error: {}\n{}", error, details.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_error_with_and_without_details() {
        assert_eq!(
            format_error("Failed to generate content", Some("timeout")),
            "Error: Failed to generate content\ntimeout"
        );
        assert_eq!(
            format_error("API key not configured", None),
            "Error: API key not configured\n"
        );
    }

    #[test]
    fn trims_trailing_slash() {
        assert_eq!(
            RelayClient::new("http://localhost:5000/").base_url(),
            "http://localhost:5000"
        );
    }
}
