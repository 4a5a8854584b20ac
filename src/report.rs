//! Report rendering: a human-readable text form and a machine-readable JSON
//! form of the same data.

use crate::error::Result;
use crate::types::Report;
use std::fmt::Write;

/// Render the report as human-readable text
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Policy analysis for {}", report.url);

    if report.is_clean() {
        out.push_str("\nNo risky or dark-pattern content detected. Document appears user-friendly.\n");
        return out;
    }

    for (index, flagged) in report.flagged.iter().enumerate() {
        let _ = writeln!(out, "\nFlagged sentence #{}:", index + 1);
        let _ = writeln!(out, "  Original:   {}", flagged.original);
        if flagged.simplified.is_empty() {
            out.push_str("  Simplified: (no core constituents retained)\n");
        } else {
            let _ = writeln!(out, "  Simplified: {}", flagged.simplified);
        }
        out.push_str("  Issues:\n");
        for hit in &flagged.matches {
            let _ = writeln!(out, "    - \"{}\" ({})", hit.phrase, hit.category);
        }
        if !flagged.translations.is_empty() {
            out.push_str("  Translations:\n");
            for (language, outcome) in &flagged.translations {
                let _ = writeln!(out, "    {}: {}", language.to_uppercase(), outcome);
            }
        }
    }

    out.push_str("\nWARNING: risky clauses detected in this document.\n");
    out
}

/// Render the report as pretty-printed JSON for programmatic consumers
pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FlaggedSentence, PhraseMatch, TranslationOutcome};
    use std::collections::BTreeMap;

    fn report_with_one_flag() -> Report {
        let mut translations = BTreeMap::new();
        translations.insert(
            "hi".to_string(),
            TranslationOutcome::Failed("timed out".into()),
        );
        translations.insert(
            "ta".to_string(),
            TranslationOutcome::Translated("தரவு".into()),
        );
        Report::new(
            "https://example.com/privacy",
            vec![FlaggedSentence {
                original: "We may share your data with affiliates.".into(),
                simplified: "We share data affiliates".into(),
                matches: vec![PhraseMatch {
                    category: "Data Sharing & Selling".into(),
                    phrase: "share your data".into(),
                }],
                translations,
            }],
        )
    }

    #[test]
    fn clean_report_renders_all_clear() {
        let text = render_text(&Report::new("https://example.com", vec![]));
        assert!(text.contains("No risky or dark-pattern content detected"));
        assert!(!text.contains("WARNING"));
    }

    #[test]
    fn flagged_report_renders_sentence_block_and_warning() {
        let text = render_text(&report_with_one_flag());
        assert!(text.contains("Flagged sentence #1"));
        assert!(text.contains("We may share your data with affiliates."));
        assert!(text.contains("\"share your data\" (Data Sharing & Selling)"));
        assert!(text.contains("TA: தரவு"));
        assert!(text.contains("HI: [translation failed: timed out]"));
        assert!(text.contains("WARNING: risky clauses detected"));
    }

    #[test]
    fn empty_simplification_is_called_out() {
        let mut report = report_with_one_flag();
        report.flagged[0].simplified.clear();
        let text = render_text(&report);
        assert!(text.contains("(no core constituents retained)"));
    }

    #[test]
    fn json_rendering_round_trips() {
        let report = report_with_one_flag();
        let json = render_json(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.flagged.len(), 1);
        assert!(parsed.risk_detected);
        assert_eq!(
            parsed.flagged[0].translations["hi"],
            TranslationOutcome::Failed("timed out".into())
        );
    }
}
