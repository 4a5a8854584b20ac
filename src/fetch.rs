//! Document fetching and visible-text extraction.
//!
//! One bounded-timeout GET per run, no retries; the caller decides whether to
//! abort. The response body is parsed as HTML and the text content of all
//! paragraph elements is concatenated in document order.

use crate::config::AnalyzerConfig;
use crate::error::{PolicyLensError, Result};
use regex::Regex;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches a policy page and extracts its paragraph text
#[derive(Debug, Clone)]
pub struct DocumentFetcher {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl DocumentFetcher {
    /// Build a fetcher from the analyzer configuration
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.fetch_timeout)
            .connect_timeout(config.fetch_timeout)
            .build()
            .map_err(|e| PolicyLensError::HttpError(e.to_string()))?;
        Ok(Self {
            http_client,
            timeout: config.fetch_timeout,
        })
    }

    /// Fetch the page and return its paragraph text.
    ///
    /// Any failure here (transport, timeout, no extractable text) is fatal to
    /// the run. A non-success status is not: error pages still carry markup,
    /// and their paragraph text is analyzed like any other document.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, timeout = ?self.timeout, "fetching document");
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "non-success status, extracting anyway");
        }
        let html = response.text().await?;
        let text = extract_paragraph_text(&html)?;
        if text.is_empty() {
            return Err(PolicyLensError::EmptyDocument);
        }
        debug!(chars = text.len(), "extracted paragraph text");
        Ok(text)
    }
}

/// Concatenate the text of all `<p>` elements, space-joined and
/// whitespace-normalized.
pub fn extract_paragraph_text(html: &str) -> Result<String> {
    let selector = Selector::parse("p")
        .map_err(|e| PolicyLensError::HtmlParseError(e.to_string()))?;
    let whitespace = Regex::new(r"\s+").map_err(|e| PolicyLensError::HtmlParseError(e.to_string()))?;

    let document = Html::parse_document(html);
    let paragraphs: Vec<String> = document
        .select(&selector)
        .map(|element| {
            let text: String = element.text().collect::<Vec<_>>().join(" ");
            whitespace.replace_all(text.trim(), " ").into_owned()
        })
        .filter(|text| !text.is_empty())
        .collect();
    Ok(paragraphs.join(" "))
}
