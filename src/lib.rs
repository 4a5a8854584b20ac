//! # Policylens - Privacy-Policy Risk Analysis
//!
//! Policylens fetches a legal or privacy-policy document from a URL, flags
//! sentences containing known risky clauses, reduces each flagged sentence to
//! its core semantic constituents, and translates that simplified form into a
//! configured set of target languages, aggregating everything into one
//! report.
//!
//! ## Pipeline
//!
//! fetch → extract → segment → detect → simplify → translate → aggregate
//!
//! Each stage isolates failures to its own unit of work: a fetch failure
//! aborts the run, a sentence with nothing to retain simplifies to the empty
//! string, and a translation failure for one language is recorded as a
//! marker next to the successful ones.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use policylens::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let config = AnalyzerConfig::default();
//!     let pipeline = Pipeline::new(config)?;
//!
//!     let report = pipeline.run("https://example.com/privacy").await?;
//!     if report.risk_detected {
//!         println!("{}", policylens::report::render_text(&report));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Extension seams
//!
//! The syntax parser behind the simplifier and the translation backend are
//! both traits ([`syntax::SyntaxParser`], [`translate::TranslationBackend`]);
//! the built-in implementations are a deterministic rule-based tagger and a
//! LibreTranslate-protocol HTTP client.

#![deny(unsafe_code)]

pub mod config;
pub mod detect;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod report;
pub mod segment;
pub mod simplify;
pub mod syntax;
pub mod taxonomy;
pub mod translate;
pub mod types;

pub use config::AnalyzerConfig;
pub use error::{PolicyLensError, Result};
pub use pipeline::Pipeline;
pub use types::Report;

/// Convenience re-exports for common usage
pub mod prelude {
    pub use crate::config::{AnalyzerConfig, AnalyzerConfigBuilder};
    pub use crate::error::{PolicyLensError, Result};
    pub use crate::pipeline::{Pipeline, RunState};
    pub use crate::taxonomy::{RiskCategory, RiskTaxonomy};
    pub use crate::translate::TranslationBackend;
    pub use crate::types::{FlaggedSentence, PhraseMatch, Report, TranslationOutcome};
}
