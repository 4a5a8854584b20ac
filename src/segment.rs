//! Sentence segmentation.
//!
//! UAX #29 sentence boundaries, followed by a merge pass so abbreviations
//! common in legal text ("e.g.", "Inc.", "No. 5") do not produce false
//! splits. Surface text is preserved per sentence, trimmed at the edges.

use crate::types::Sentence;
use unicode_segmentation::UnicodeSegmentation;

// Lowercase, including the trailing period
const ABBREVIATIONS: &[&str] = &[
    "e.g.", "i.e.", "etc.", "cf.", "vs.", "viz.", "inc.", "ltd.", "llc.", "co.", "corp.",
    "no.", "nos.", "sec.", "art.", "para.", "mr.", "mrs.", "ms.", "dr.", "prof.", "st.",
    "u.s.", "u.k.", "e.u.",
];

/// Split extracted text into ordered sentences. Empty input yields an empty
/// vector.
pub fn segment(text: &str) -> Vec<Sentence> {
    let mut merged: Vec<String> = Vec::new();
    for piece in text.split_sentence_bounds() {
        match merged.last_mut() {
            Some(previous) if ends_with_abbreviation(previous) => previous.push_str(piece),
            _ => merged.push(piece.to_string()),
        }
    }

    merged
        .into_iter()
        .map(|raw| raw.trim().to_string())
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(ordinal, text)| Sentence { text, ordinal })
        .collect()
}

/// True when the fragment ends in a known abbreviation or a single-letter
/// initial ("J. Smith"), meaning the boundary after it was a false split.
fn ends_with_abbreviation(fragment: &str) -> bool {
    let trimmed = fragment.trim_end();
    if !trimmed.ends_with('.') {
        return false;
    }
    let lower = trimmed.to_lowercase();
    if ABBREVIATIONS.iter().any(|abbr| lower.ends_with(abbr)) {
        return true;
    }
    // Single capital initial followed by a period
    match trimmed.split_whitespace().last() {
        Some(word) => {
            let mut chars = word.chars();
            matches!((chars.next(), chars.next(), chars.next()), (Some(c), Some('.'), None) if c.is_uppercase())
        }
        None => false,
    }
}
