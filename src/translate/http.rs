//! HTTP translation backend speaking the LibreTranslate wire protocol.

use crate::config::AnalyzerConfig;
use crate::error::{PolicyLensError, Result};
use crate::translate::TranslationBackend;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Translation client for one configured endpoint.
///
/// Each call is one `POST /translate` with its own hard deadline; the client
/// holds no per-request state and is safe to share across concurrent runs.
pub struct HttpTranslator {
    base_url: String,
    api_key: Option<SecretString>,
    http_client: reqwest::Client,
    timeout: Duration,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl HttpTranslator {
    /// Build a translator from the analyzer configuration
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.translate_timeout)
            .build()
            .map_err(|e| PolicyLensError::HttpError(e.to_string()))?;
        Ok(Self {
            base_url: config.translate_base_url.trim_end_matches('/').to_string(),
            api_key: config.translate_api_key.clone(),
            http_client,
            timeout: config.translate_timeout,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/translate", self.base_url)
    }

    async fn request(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let body = TranslateRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: self.api_key.as_ref().map(|k| k.expose_secret()),
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(PolicyLensError::api_error(code, message));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| PolicyLensError::ParseError(e.to_string()))?;
        Ok(parsed.translated_text)
    }
}

#[async_trait]
impl TranslationBackend for HttpTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        debug!(target, chars = text.len(), "requesting translation");
        // Hard per-call deadline on top of the client timeout; a hung call
        // must not hold up the other languages.
        tokio::time::timeout(self.timeout, self.request(text, source, target))
            .await
            .map_err(|_| {
                PolicyLensError::TimeoutError(format!(
                    "translation to {target} timed out after {:?}",
                    self.timeout
                ))
            })?
    }
}

impl std::fmt::Debug for HttpTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTranslator")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url_without_double_slash() {
        let config = AnalyzerConfig::builder()
            .translate_base_url("https://translate.example.com/")
            .build()
            .unwrap();
        let translator = HttpTranslator::new(&config).unwrap();
        assert_eq!(
            translator.endpoint(),
            "https://translate.example.com/translate"
        );
    }

    #[test]
    fn api_key_is_not_exposed_by_debug() {
        let config = AnalyzerConfig::builder()
            .translate_api_key("super-secret")
            .build()
            .unwrap();
        let translator = HttpTranslator::new(&config).unwrap();
        let rendered = format!("{translator:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("has_api_key: true"));
    }
}
