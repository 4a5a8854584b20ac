//! Sentence simplification: keep the core semantic constituents, drop the
//! rest.
//!
//! A lossy structural compression, not a rewrite. Retained tokens stay in
//! their original left-to-right order; nothing is ever reordered.

use crate::syntax::{RuleBasedParser, SyntacticRole, SyntaxParser};
use std::sync::Arc;

/// Roles whose tokens survive simplification
const RETAINED_ROLES: &[SyntacticRole] = &[
    SyntacticRole::Subject,
    SyntacticRole::DirectObject,
    SyntacticRole::Root,
    SyntacticRole::PrepositionObject,
    SyntacticRole::PredicateAttribute,
    SyntacticRole::NounModifier,
];

/// Reduces a sentence to the tokens carrying its core meaning
#[derive(Clone)]
pub struct SentenceSimplifier {
    parser: Arc<dyn SyntaxParser>,
}

impl SentenceSimplifier {
    /// Simplifier backed by the default rule-based parser
    pub fn new() -> Self {
        Self::with_parser(Arc::new(RuleBasedParser::new()))
    }

    /// Simplifier backed by a caller-supplied parser
    pub fn with_parser(parser: Arc<dyn SyntaxParser>) -> Self {
        Self { parser }
    }

    /// Retained tokens joined with single spaces; empty string when nothing
    /// qualifies (callers must tolerate that, it is not an error).
    pub fn simplify(&self, sentence: &str) -> String {
        self.parser
            .tokens(sentence)
            .into_iter()
            .filter(|token| RETAINED_ROLES.contains(&token.role))
            .map(|token| token.text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for SentenceSimplifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SentenceSimplifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceSimplifier").finish_non_exhaustive()
    }
}
