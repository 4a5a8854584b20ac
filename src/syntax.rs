//! Syntactic role tagging.
//!
//! The simplifier does not parse sentences itself; it consumes a
//! [`SyntaxParser`], an object-safe seam over `tokens(sentence) -> Vec<Token>`
//! where every token carries one tag from the closed [`SyntacticRole`]
//! enumeration. [`RuleBasedParser`] is the default implementation: a
//! deterministic lexicon-and-position tagger, not a full dependency parse.
//! Any smarter parser can replace it behind the trait.

use serde::{Deserialize, Serialize};

/// Closed set of syntactic roles a token can carry.
///
/// The first six are the roles the simplifier retains; the rest exist so the
/// parser can tag every token it sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntacticRole {
    Subject,
    DirectObject,
    Root,
    PrepositionObject,
    PredicateAttribute,
    NounModifier,
    Determiner,
    Auxiliary,
    Preposition,
    Conjunction,
    Adverb,
    Punctuation,
    Other,
}

/// One token of a parsed sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub role: SyntacticRole,
}

impl Token {
    fn new(text: impl Into<String>, role: SyntacticRole) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

/// Seam for per-token syntactic role analysis
pub trait SyntaxParser: Send + Sync {
    /// Tokens of the sentence in surface order, each with its role
    fn tokens(&self, sentence: &str) -> Vec<Token>;
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "any", "some", "no",
    "all", "both", "either", "neither", "my", "your", "our", "its", "his", "her", "their",
    "such",
];

// Modals and non-linking auxiliaries
const AUXILIARIES: &[&str] = &[
    "do", "does", "did", "have", "has", "had", "will", "would", "shall", "should", "may",
    "might", "must", "can", "could",
];

// Linking verbs; when one heads the clause it is tagged Root and its
// complement PredicateAttribute
const COPULAS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "seem", "seems", "seemed",
    "appear", "appears", "remain", "remains", "remained", "become", "becomes", "became",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "to", "about", "into", "onto",
    "over", "under", "between", "through", "during", "without", "within", "across",
    "against", "regarding", "concerning", "per", "upon", "outside", "inside", "via",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "while", "because", "although", "unless",
    "until", "when", "where", "whereas", "whether",
];

const ADVERBS: &[&str] = &[
    "not", "never", "also", "only", "just", "often", "always", "sometimes", "already",
    "still", "here", "there", "then", "now", "very", "too",
];

/// Word classes assigned before role resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordClass {
    Determiner,
    Auxiliary,
    Copula,
    Preposition,
    Conjunction,
    Adverb,
    // Open-class word: candidate for subject/root/object/modifier
    Candidate,
}

/// Deterministic lexicon-and-position role tagger
#[derive(Debug, Clone, Default)]
pub struct RuleBasedParser;

impl RuleBasedParser {
    pub fn new() -> Self {
        Self
    }

    fn classify(word: &str) -> WordClass {
        let lower = word.to_lowercase();
        if DETERMINERS.contains(&lower.as_str()) {
            WordClass::Determiner
        } else if COPULAS.contains(&lower.as_str()) {
            WordClass::Copula
        } else if AUXILIARIES.contains(&lower.as_str()) {
            WordClass::Auxiliary
        } else if PREPOSITIONS.contains(&lower.as_str()) {
            WordClass::Preposition
        } else if CONJUNCTIONS.contains(&lower.as_str()) {
            WordClass::Conjunction
        } else if ADVERBS.contains(&lower.as_str()) || (lower.len() > 3 && lower.ends_with("ly"))
        {
            WordClass::Adverb
        } else {
            WordClass::Candidate
        }
    }

    // Participle forms stay verbal after a copula ("may be stored"), so the
    // copula keeps its auxiliary reading there.
    fn looks_like_participle(word: &str) -> bool {
        let lower = word.to_lowercase();
        lower.len() > 4
            && (lower.ends_with("ed") || lower.ends_with("en") || lower.ends_with("ing"))
    }

    /// Split into word tokens, stripping edge punctuation
    fn words(sentence: &str) -> Vec<String> {
        sentence
            .split_whitespace()
            .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '-' && c != '\''))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Index of the clause head among `classes`, plus whether the head is a
    /// copula whose complement should be tagged PredicateAttribute.
    fn find_root(words: &[String], classes: &[WordClass]) -> (Option<usize>, bool) {
        let candidate_indices: Vec<usize> = classes
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == WordClass::Candidate)
            .map(|(i, _)| i)
            .collect();

        // Rule 1: a candidate right after an auxiliary or copula is the verb
        // of the clause (skipping adverbs: "may not share").
        for &i in &candidate_indices {
            if let Some(prev) = Self::previous_significant(classes, i) {
                match classes[prev] {
                    WordClass::Auxiliary => return (Some(i), false),
                    WordClass::Copula => {
                        if Self::looks_like_participle(&words[i]) {
                            return (Some(i), false);
                        }
                        // Copula heads the clause; its complement keeps the
                        // candidate slot.
                        return (Some(prev), true);
                    }
                    _ => {}
                }
            }
        }

        // Rule 2: a bare copula with no candidate after it still heads the
        // clause ("Nothing is.").
        if let Some(i) = classes.iter().position(|c| *c == WordClass::Copula) {
            return (Some(i), true);
        }

        // Rule 3: no auxiliary. The first candidate that directly follows
        // another candidate is the verb ("We share your data").
        for &i in &candidate_indices {
            if i == candidate_indices[0] {
                continue;
            }
            if let Some(prev) = Self::previous_significant(classes, i) {
                if classes[prev] == WordClass::Candidate {
                    return (Some(i), false);
                }
            }
        }

        // Rule 4: a lone candidate is its own clause ("Stop.").
        if candidate_indices.len() == 1 {
            return (Some(candidate_indices[0]), false);
        }

        (None, false)
    }

    /// Nearest earlier index that is not an adverb
    fn previous_significant(classes: &[WordClass], index: usize) -> Option<usize> {
        classes[..index]
            .iter()
            .rposition(|c| *c != WordClass::Adverb)
    }

    /// Group candidate indices into noun runs. Determiners and adverbs are
    /// transparent inside a run ("our marketing partners"); any other class
    /// breaks it, as does the root index.
    fn candidate_runs(classes: &[WordClass], root: Option<usize>) -> Vec<Vec<usize>> {
        let mut runs: Vec<Vec<usize>> = Vec::new();
        let mut current: Vec<usize> = Vec::new();
        for (i, class) in classes.iter().enumerate() {
            if Some(i) == root {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
                continue;
            }
            match class {
                WordClass::Candidate => current.push(i),
                WordClass::Determiner | WordClass::Adverb => {}
                _ => {
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }

    /// Whether the token before the run's first member (skipping determiners
    /// and adverbs) is a preposition.
    fn run_is_prepositional(classes: &[WordClass], run: &[usize]) -> bool {
        let first = run[0];
        classes[..first]
            .iter()
            .rposition(|c| !matches!(c, WordClass::Determiner | WordClass::Adverb))
            .is_some_and(|prev| classes[prev] == WordClass::Preposition)
    }
}

impl SyntaxParser for RuleBasedParser {
    fn tokens(&self, sentence: &str) -> Vec<Token> {
        let words = Self::words(sentence);
        if words.is_empty() {
            return Vec::new();
        }
        let classes: Vec<WordClass> = words.iter().map(|w| Self::classify(w)).collect();
        let (root, root_is_copula) = Self::find_root(&words, &classes);
        let runs = Self::candidate_runs(&classes, root);

        let mut roles: Vec<SyntacticRole> = classes
            .iter()
            .map(|class| match class {
                WordClass::Determiner => SyntacticRole::Determiner,
                WordClass::Auxiliary | WordClass::Copula => SyntacticRole::Auxiliary,
                WordClass::Preposition => SyntacticRole::Preposition,
                WordClass::Conjunction => SyntacticRole::Conjunction,
                WordClass::Adverb => SyntacticRole::Adverb,
                WordClass::Candidate => SyntacticRole::Other,
            })
            .collect();

        if let Some(root_index) = root {
            roles[root_index] = SyntacticRole::Root;
        }

        let mut subject_assigned = false;
        let mut attribute_assigned = false;
        // Walk runs right to left on the subject side so the nominal nearest
        // the root becomes the subject.
        let pre_root: Vec<&Vec<usize>> = runs
            .iter()
            .filter(|run| root.is_none_or(|r| run[0] < r))
            .collect();
        for run in pre_root.into_iter().rev() {
            let prepositional = Self::run_is_prepositional(&classes, run);
            for (pos, &i) in run.iter().enumerate() {
                let last = pos == run.len() - 1;
                roles[i] = if prepositional {
                    if last {
                        SyntacticRole::PrepositionObject
                    } else {
                        SyntacticRole::NounModifier
                    }
                } else if last && !subject_assigned {
                    subject_assigned = true;
                    SyntacticRole::Subject
                } else {
                    SyntacticRole::NounModifier
                };
            }
        }

        for run in runs.iter().filter(|run| root.is_some_and(|r| run[0] > r)) {
            let prepositional = Self::run_is_prepositional(&classes, run);
            for (pos, &i) in run.iter().enumerate() {
                let last = pos == run.len() - 1;
                roles[i] = if prepositional {
                    if last {
                        SyntacticRole::PrepositionObject
                    } else {
                        SyntacticRole::NounModifier
                    }
                } else if last {
                    if root_is_copula && !attribute_assigned {
                        attribute_assigned = true;
                        SyntacticRole::PredicateAttribute
                    } else {
                        SyntacticRole::DirectObject
                    }
                } else {
                    SyntacticRole::NounModifier
                };
            }
        }

        words
            .into_iter()
            .zip(roles)
            .map(|(text, role)| Token::new(text, role))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles_of(sentence: &str) -> Vec<(String, SyntacticRole)> {
        RuleBasedParser::new()
            .tokens(sentence)
            .into_iter()
            .map(|t| (t.text, t.role))
            .collect()
    }

    fn role_of<'a>(tagged: &'a [(String, SyntacticRole)], word: &str) -> SyntacticRole {
        tagged
            .iter()
            .find(|(text, _)| text == word)
            .map(|(_, role)| *role)
            .unwrap_or_else(|| panic!("token {word:?} not found in {tagged:?}"))
    }

    #[test]
    fn empty_sentence_has_no_tokens() {
        assert!(RuleBasedParser::new().tokens("").is_empty());
        assert!(RuleBasedParser::new().tokens("   ").is_empty());
    }

    #[test]
    fn modal_clause_roles() {
        let tagged = roles_of("We may share your data with affiliates.");
        assert_eq!(role_of(&tagged, "We"), SyntacticRole::Subject);
        assert_eq!(role_of(&tagged, "may"), SyntacticRole::Auxiliary);
        assert_eq!(role_of(&tagged, "share"), SyntacticRole::Root);
        assert_eq!(role_of(&tagged, "your"), SyntacticRole::Determiner);
        assert_eq!(role_of(&tagged, "data"), SyntacticRole::DirectObject);
        assert_eq!(role_of(&tagged, "with"), SyntacticRole::Preposition);
        assert_eq!(role_of(&tagged, "affiliates"), SyntacticRole::PrepositionObject);
    }

    #[test]
    fn bare_verb_clause_finds_root_without_auxiliary() {
        let tagged = roles_of("The company shares your information.");
        assert_eq!(role_of(&tagged, "company"), SyntacticRole::Subject);
        assert_eq!(role_of(&tagged, "shares"), SyntacticRole::Root);
        assert_eq!(role_of(&tagged, "information"), SyntacticRole::DirectObject);
    }

    #[test]
    fn copula_heads_clause_with_predicate_attribute() {
        let tagged = roles_of("You are responsible for safeguarding.");
        assert_eq!(role_of(&tagged, "You"), SyntacticRole::Subject);
        assert_eq!(role_of(&tagged, "are"), SyntacticRole::Root);
        assert_eq!(
            role_of(&tagged, "responsible"),
            SyntacticRole::PredicateAttribute
        );
        assert_eq!(
            role_of(&tagged, "safeguarding"),
            SyntacticRole::PrepositionObject
        );
    }

    #[test]
    fn copula_before_participle_stays_auxiliary() {
        let tagged = roles_of("Your data may be stored indefinitely.");
        assert_eq!(role_of(&tagged, "data"), SyntacticRole::Subject);
        assert_eq!(role_of(&tagged, "be"), SyntacticRole::Auxiliary);
        assert_eq!(role_of(&tagged, "stored"), SyntacticRole::Root);
        assert_eq!(role_of(&tagged, "indefinitely"), SyntacticRole::Adverb);
    }

    #[test]
    fn noun_run_after_preposition_keeps_head_as_object() {
        let tagged = roles_of("We work with our marketing partners.");
        assert_eq!(role_of(&tagged, "marketing"), SyntacticRole::NounModifier);
        assert_eq!(role_of(&tagged, "partners"), SyntacticRole::PrepositionObject);
    }

    #[test]
    fn tagging_is_deterministic() {
        let first = roles_of("We may update this policy at any time without notice.");
        let second = roles_of("We may update this policy at any time without notice.");
        assert_eq!(first, second);
    }
}
