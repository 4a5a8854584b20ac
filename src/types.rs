//! Core data types produced and consumed by the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One sentence of the extracted document, in document order.
///
/// Lives only for the duration of a single run; flagged sentences carry the
/// text forward into the report, everything else is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Surface text, trimmed of surrounding whitespace
    pub text: String,
    /// Zero-based position within the document
    pub ordinal: usize,
}

/// A single taxonomy hit inside one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseMatch {
    /// Name of the risk category the phrase belongs to
    pub category: String,
    /// The trigger phrase that matched (lowercase)
    pub phrase: String,
}

/// Outcome of translating one text into one target language.
///
/// A failure is data, not an error: it stays in the map next to the
/// successful languages and is rendered inline as a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum TranslationOutcome {
    /// The service returned a translation
    Translated(String),
    /// The request failed; carries the failure reason
    Failed(String),
}

impl TranslationOutcome {
    pub const fn is_translated(&self) -> bool {
        matches!(self, Self::Translated(_))
    }

    /// Text to show inline in a rendered report
    pub fn display_text(&self) -> String {
        match self {
            Self::Translated(text) => text.clone(),
            Self::Failed(reason) => format!("[translation failed: {reason}]"),
        }
    }
}

impl std::fmt::Display for TranslationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// A sentence that matched at least one trigger phrase, with its simplified
/// form and the per-language translations of that form.
///
/// Immutable once built. `translations` holds exactly one entry per
/// configured target language, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedSentence {
    pub original: String,
    pub simplified: String,
    pub matches: Vec<PhraseMatch>,
    pub translations: BTreeMap<String, TranslationOutcome>,
}

/// Terminal output of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// The URL that was analyzed
    pub url: String,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Flagged sentences in document order
    pub flagged: Vec<FlaggedSentence>,
    /// True iff `flagged` is non-empty
    pub risk_detected: bool,
}

impl Report {
    /// Build a report; the overall risk flag is derived from the flagged set
    pub fn new(url: impl Into<String>, flagged: Vec<FlaggedSentence>) -> Self {
        let risk_detected = !flagged.is_empty();
        Self {
            url: url.into(),
            generated_at: Utc::now(),
            flagged,
            risk_detected,
        }
    }

    /// Whether the document came back without a single flagged sentence
    pub fn is_clean(&self) -> bool {
        !self.risk_detected
    }
}
