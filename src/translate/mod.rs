//! Translation: per-language fan-out with independent failure capture.
//!
//! The backend is a trait so deployments can swap the wire protocol; the
//! fan-out joins one future per target language into a map keyed by language
//! code, so the result is deterministic regardless of completion order. A
//! failed language never aborts the others.

mod http;

pub use http::HttpTranslator;

use crate::error::Result;
use crate::types::TranslationOutcome;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::debug;

/// One translation request from a source language to a target language
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// Translate `text` into every target language concurrently.
///
/// Returns exactly one outcome per target language: the translated text on
/// success, a `Failed` marker carrying the reason otherwise. Empty input is
/// legal; whatever the backend does with it lands in the per-language
/// outcome.
pub async fn translate_all(
    backend: &dyn TranslationBackend,
    text: &str,
    source: &str,
    targets: &[String],
) -> BTreeMap<String, TranslationOutcome> {
    let requests = targets.iter().map(|target| async move {
        let outcome = match backend.translate(text, source, target).await {
            Ok(translated) => TranslationOutcome::Translated(translated),
            Err(error) => {
                debug!(target, %error, "translation failed");
                TranslationOutcome::Failed(error.to_string())
            }
        };
        (target.clone(), outcome)
    });
    futures::future::join_all(requests).await.into_iter().collect()
}
