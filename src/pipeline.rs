//! Pipeline orchestration.
//!
//! One `run` call drives a single document through
//! fetch → segment → scan → (simplify → translate per flagged sentence) →
//! aggregate, producing a [`Report`]. Only the fetch stage can abort the run;
//! every later stage degrades within its own unit of work.

use crate::config::AnalyzerConfig;
use crate::detect::RiskDetector;
use crate::error::Result;
use crate::fetch::DocumentFetcher;
use crate::segment::segment;
use crate::simplify::SentenceSimplifier;
use crate::syntax::SyntaxParser;
use crate::translate::{translate_all, HttpTranslator, TranslationBackend};
use crate::types::{FlaggedSentence, Report};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// States of one pipeline run. `Aborted` is terminal and reachable only from
/// `Fetching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Fetching,
    Segmenting,
    Scanning,
    Simplifying,
    Translating,
    Aggregated,
    Done,
    Aborted,
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Segmenting => "segmenting",
            Self::Scanning => "scanning",
            Self::Simplifying => "simplifying",
            Self::Translating => "translating",
            Self::Aggregated => "aggregated",
            Self::Done => "done",
            Self::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Drives the full analysis for one URL at a time.
///
/// Holds only immutable configuration and shared collaborators; concurrent
/// runs may share one instance.
pub struct Pipeline {
    config: AnalyzerConfig,
    fetcher: DocumentFetcher,
    simplifier: SentenceSimplifier,
    translator: Arc<dyn TranslationBackend>,
}

impl Pipeline {
    /// Pipeline with the default HTTP translator and rule-based parser
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let translator = Arc::new(HttpTranslator::new(&config)?);
        Self::with_translator(config, translator)
    }

    /// Pipeline with a caller-supplied translation backend
    pub fn with_translator(
        config: AnalyzerConfig,
        translator: Arc<dyn TranslationBackend>,
    ) -> Result<Self> {
        let fetcher = DocumentFetcher::new(&config)?;
        Ok(Self {
            config,
            fetcher,
            simplifier: SentenceSimplifier::new(),
            translator,
        })
    }

    /// Replace the syntax parser behind the simplifier
    pub fn with_parser(mut self, parser: Arc<dyn SyntaxParser>) -> Self {
        self.simplifier = SentenceSimplifier::with_parser(parser);
        self
    }

    /// Analyze one document. Returns the report, or an error when the fetch
    /// stage fails: an aborted run, distinguishable from a clean report
    /// with no flagged sentences.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn run(&self, url: &str) -> Result<Report> {
        let mut state = RunState::Idle;

        self.transition(&mut state, RunState::Fetching);
        let text = match self.fetcher.fetch(url).await {
            Ok(text) => text,
            Err(error) => {
                self.transition(&mut state, RunState::Aborted);
                warn!(%error, "fetch failed, run aborted");
                return Err(error);
            }
        };

        let report = self.analyze_text(url, &text, &mut state).await;
        self.transition(&mut state, RunState::Done);
        Ok(report)
    }

    /// Run the post-fetch stages on already-extracted text. Empty text is
    /// not an error here: it segments into nothing and yields a clean
    /// report.
    pub async fn analyze(&self, url: &str, text: &str) -> Report {
        let mut state = RunState::Fetching;
        let report = self.analyze_text(url, text, &mut state).await;
        self.transition(&mut state, RunState::Done);
        report
    }

    async fn analyze_text(&self, url: &str, text: &str, state: &mut RunState) -> Report {
        self.transition(state, RunState::Segmenting);
        let sentences = segment(text);
        debug!(sentences = sentences.len(), "segmented document");

        self.transition(state, RunState::Scanning);
        let detector = RiskDetector::new(&self.config.taxonomy);
        let mut flagged: Vec<FlaggedSentence> = Vec::new();

        for sentence in &sentences {
            let matches = detector.detect(&sentence.text);
            if matches.is_empty() {
                continue;
            }
            debug!(ordinal = sentence.ordinal, hits = matches.len(), "sentence flagged");

            self.transition(state, RunState::Simplifying);
            let simplified = self.simplifier.simplify(&sentence.text);

            self.transition(state, RunState::Translating);
            let translations = translate_all(
                self.translator.as_ref(),
                &simplified,
                &self.config.source_language,
                &self.config.target_languages,
            )
            .await;

            // Appended only after all of this sentence's translations resolve
            flagged.push(FlaggedSentence {
                original: sentence.text.clone(),
                simplified,
                matches,
                translations,
            });
            self.transition(state, RunState::Scanning);
        }

        self.transition(state, RunState::Aggregated);
        let report = Report::new(url, flagged);
        info!(
            flagged = report.flagged.len(),
            risk_detected = report.risk_detected,
            "analysis complete"
        );
        report
    }

    fn transition(&self, state: &mut RunState, next: RunState) {
        debug!(from = %state, to = %next, "pipeline state");
        *state = next;
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("target_languages", &self.config.target_languages)
            .field("categories", &self.config.taxonomy.categories().len())
            .finish_non_exhaustive()
    }
}
