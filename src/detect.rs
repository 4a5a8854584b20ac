//! Risk detection: scan one sentence against the taxonomy.

use crate::taxonomy::RiskTaxonomy;
use crate::types::PhraseMatch;

/// Scans sentences for trigger phrases. Borrows the taxonomy; safe to share
/// across concurrent runs.
#[derive(Debug, Clone, Copy)]
pub struct RiskDetector<'a> {
    taxonomy: &'a RiskTaxonomy,
}

impl<'a> RiskDetector<'a> {
    pub fn new(taxonomy: &'a RiskTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// All taxonomy hits in the sentence, in taxonomy enumeration order:
    /// categories in declaration order, phrases in declaration order within
    /// each category. At most one match per (category, phrase) pair.
    ///
    /// Containment is plain substring matching on the lowercased sentence; a
    /// phrase can match inside a longer word. Known precision tradeoff,
    /// inherited behavior.
    pub fn detect(&self, sentence_text: &str) -> Vec<PhraseMatch> {
        let lowered = sentence_text.to_lowercase();
        let mut matches = Vec::new();
        for category in self.taxonomy.categories() {
            for phrase in &category.trigger_phrases {
                if lowered.contains(phrase.as_str()) {
                    matches.push(PhraseMatch {
                        category: category.name.clone(),
                        phrase: phrase.clone(),
                    });
                }
            }
        }
        matches
    }
}
