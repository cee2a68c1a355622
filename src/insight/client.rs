//! HTTP insight client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{EMPTY_FALLBACK, FAILURE_FALLBACK, InsightProvider, InsightRequest, UNCONFIGURED_FALLBACK};
use crate::config::InsightConfig;
use crate::error::{Error, Result};

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "MIRROR_API_KEY";

/// Insight provider backed by a Gemini-style `generateContent` endpoint.
pub struct InsightClient {
    http: reqwest::Client,
    config: InsightConfig,
    api_key: Option<String>,
}

impl InsightClient {
    /// Create a client from configuration. The API key is taken from the
    /// config, falling back to the `MIRROR_API_KEY` environment variable;
    /// a missing key is not an error — the client then serves the
    /// unconfigured fallback.
    pub fn new(config: InsightConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::insight(e.to_string()))?;

        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|k| !k.is_empty());

        Ok(Self {
            http,
            config,
            api_key,
        })
    }

    /// Whether a completion request can actually be issued.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Issue one completion request. `Ok(None)` means the model returned
    /// no text.
    async fn complete(&self, prompt: &str, api_key: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            api_key,
        );

        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::insight(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::insight(format!(
                "completion endpoint returned {}",
                response.status()
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::insight(e.to_string()))?;

        Ok(parsed.first_text())
    }
}

#[async_trait]
impl InsightProvider for InsightClient {
    async fn signal_insight(&self, request: &InsightRequest) -> String {
        let Some(api_key) = self.api_key.clone() else {
            return UNCONFIGURED_FALLBACK.to_string();
        };

        match self.complete(&request.prompt(), &api_key).await {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_FALLBACK.to_string(),
            Err(e) => {
                tracing::warn!("insight request failed: {e}");
                FAILURE_FALLBACK.to_string()
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    /// First non-empty text part of the first candidate.
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn unconfigured_client() -> InsightClient {
        let config = InsightConfig {
            api_key: None,
            ..InsightConfig::default()
        };
        let mut client = InsightClient::new(config).unwrap();
        // Ignore any ambient key so the test is hermetic.
        client.api_key = None;
        client
    }

    #[tokio::test]
    async fn test_unconfigured_client_serves_fallback() {
        let client = unconfigured_client();
        assert!(!client.is_configured());

        let request = InsightRequest {
            signal_kind: "Cross-Venue Divergence".into(),
            explanation: "gap".into(),
            market_context: "ctx".into(),
        };
        assert_eq!(client.signal_insight(&request).await, UNCONFIGURED_FALLBACK);
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "  Deeper insight.  "}]}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.first_text().as_deref(), Some("Deeper insight."));
    }

    #[test]
    fn test_empty_response_yields_none() {
        for raw in [
            r#"{}"#,
            r#"{"candidates": []}"#,
            r#"{"candidates": [{"content": {"parts": []}}]}"#,
            r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#,
        ] {
            let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed.first_text(), None, "raw: {raw}");
        }
    }
}
