//! Analyzer configuration: taxonomy, target languages, timeouts and the
//! translation endpoint.
//!
//! Everything has a default matching the reference deployment, so a bare
//! `AnalyzerConfig::default()` is a working configuration. A JSON file can
//! override any subset of fields.

use crate::error::{PolicyLensError, Result};
use crate::taxonomy::RiskTaxonomy;
use secrecy::SecretString;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default HTTP timeout for the document fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
/// Default per-call timeout for one translation request
pub const DEFAULT_TRANSLATE_TIMEOUT: Duration = Duration::from_secs(10);
/// Default translation endpoint (LibreTranslate wire protocol)
pub const DEFAULT_TRANSLATE_BASE_URL: &str = "https://libretranslate.com";

fn default_translate_base_url() -> String {
    DEFAULT_TRANSLATE_BASE_URL.to_string()
}

fn default_target_languages() -> Vec<String> {
    vec!["hi".into(), "ta".into(), "te".into()]
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_user_agent() -> String {
    format!("policylens/{}", env!("CARGO_PKG_VERSION"))
}

/// Configuration for one analyzer instance
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Risk catalog; the built-in catalog unless overridden
    pub taxonomy: RiskTaxonomy,
    /// Language codes to translate each simplified sentence into
    pub target_languages: Vec<String>,
    /// Source language of the analyzed document
    pub source_language: String,
    /// Document fetch timeout
    #[serde(rename = "fetch_timeout_secs", with = "duration_secs_serde")]
    pub fetch_timeout: Duration,
    /// Per-language translation call timeout
    #[serde(rename = "translate_timeout_secs", with = "duration_secs_serde")]
    pub translate_timeout: Duration,
    /// Base URL of the translation service
    pub translate_base_url: String,
    /// API key for the translation service, if the deployment requires one
    pub translate_api_key: Option<SecretString>,
    /// User agent sent with outgoing HTTP requests
    pub user_agent: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            taxonomy: RiskTaxonomy::builtin(),
            target_languages: default_target_languages(),
            source_language: default_source_language(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            translate_timeout: DEFAULT_TRANSLATE_TIMEOUT,
            translate_base_url: default_translate_base_url(),
            translate_api_key: None,
            user_agent: default_user_agent(),
        }
    }
}

impl AnalyzerConfig {
    /// Returns a builder for constructing `AnalyzerConfig`
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Load configuration from a JSON file; absent fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| PolicyLensError::ConfigError(e.to_string()))?;
        config.normalized()
    }

    /// Validate and normalize: taxonomy phrases lowercased, language codes
    /// trimmed/lowercased/deduplicated.
    pub fn normalized(mut self) -> Result<Self> {
        if self.source_language.trim().is_empty() {
            return Err(PolicyLensError::ConfigError(
                "source_language must not be empty".into(),
            ));
        }
        if self.translate_base_url.trim().is_empty() {
            return Err(PolicyLensError::ConfigError(
                "translate_base_url must not be empty".into(),
            ));
        }
        self.taxonomy = RiskTaxonomy::new(self.taxonomy.categories().to_vec());
        self.source_language = self.source_language.trim().to_lowercase();

        let mut languages: Vec<String> = Vec::with_capacity(self.target_languages.len());
        for code in &self.target_languages {
            let code = code.trim().to_lowercase();
            if !code.is_empty() && !languages.contains(&code) {
                languages.push(code);
            }
        }
        self.target_languages = languages;
        Ok(self)
    }
}

/// Builder for `AnalyzerConfig`
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    taxonomy: Option<RiskTaxonomy>,
    target_languages: Option<Vec<String>>,
    source_language: Option<String>,
    fetch_timeout: Option<Duration>,
    translate_timeout: Option<Duration>,
    translate_base_url: Option<String>,
    translate_api_key: Option<SecretString>,
    user_agent: Option<String>,
}

impl AnalyzerConfigBuilder {
    pub fn taxonomy(mut self, taxonomy: RiskTaxonomy) -> Self {
        self.taxonomy = Some(taxonomy);
        self
    }

    pub fn target_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_languages = Some(languages.into_iter().map(Into::into).collect());
        self
    }

    pub fn source_language(mut self, code: impl Into<String>) -> Self {
        self.source_language = Some(code.into());
        self
    }

    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    pub fn translate_timeout(mut self, timeout: Duration) -> Self {
        self.translate_timeout = Some(timeout);
        self
    }

    pub fn translate_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.translate_base_url = Some(base_url.into());
        self
    }

    pub fn translate_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.translate_api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the configuration, normalizing languages and taxonomy
    pub fn build(self) -> Result<AnalyzerConfig> {
        let defaults = AnalyzerConfig::default();
        AnalyzerConfig {
            taxonomy: self.taxonomy.unwrap_or(defaults.taxonomy),
            target_languages: self.target_languages.unwrap_or(defaults.target_languages),
            source_language: self.source_language.unwrap_or(defaults.source_language),
            fetch_timeout: self.fetch_timeout.unwrap_or(defaults.fetch_timeout),
            translate_timeout: self.translate_timeout.unwrap_or(defaults.translate_timeout),
            translate_base_url: self
                .translate_base_url
                .unwrap_or(defaults.translate_base_url),
            translate_api_key: self.translate_api_key,
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
        }
        .normalized()
    }
}

// Timeouts appear in JSON as whole seconds
mod duration_secs_serde {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
