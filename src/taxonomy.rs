//! The risk taxonomy: an ordered, immutable catalog of category names and
//! their trigger phrases.
//!
//! Enumeration order is part of the detection contract (categories in
//! declaration order, phrases in declaration order within a category), so the
//! catalog is a `Vec`, never a hash map. Loaded once at startup and borrowed
//! by the detector; never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One risk category and the lowercase phrases that trigger it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCategory {
    pub name: String,
    pub trigger_phrases: Vec<String>,
}

/// Ordered catalog of risk categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskTaxonomy {
    categories: Vec<RiskCategory>,
}

impl RiskTaxonomy {
    /// Build a taxonomy from categories, normalizing phrases: trimmed,
    /// lowercased, empties dropped, duplicates removed (first wins).
    pub fn new(categories: Vec<RiskCategory>) -> Self {
        let categories = categories
            .into_iter()
            .map(|category| {
                let mut seen: Vec<String> = Vec::with_capacity(category.trigger_phrases.len());
                for phrase in category.trigger_phrases {
                    let normalized = phrase.trim().to_lowercase();
                    if !normalized.is_empty() && !seen.contains(&normalized) {
                        seen.push(normalized);
                    }
                }
                RiskCategory {
                    name: category.name,
                    trigger_phrases: seen,
                }
            })
            .filter(|category| !category.trigger_phrases.is_empty())
            .collect();
        Self { categories }
    }

    /// The built-in catalog used when no external taxonomy is configured
    pub fn builtin() -> Self {
        let entries: &[(&str, &[&str])] = &[
            (
                "Data Sharing & Selling",
                &[
                    "share your data",
                    "sell your data",
                    "third-party partners",
                    "affiliates may access",
                    "data brokers",
                    "marketing partners",
                ],
            ),
            (
                "Weak User Control",
                &[
                    "consent automatically",
                    "opt-out required",
                    "mandatory consent",
                    "you agree by default",
                    "without your knowledge",
                ],
            ),
            (
                "Policy Changes",
                &[
                    "subject to change",
                    "may update at any time",
                    "without prior notice",
                ],
            ),
            (
                "Liability Disclaimers",
                &[
                    "we are not responsible",
                    "we disclaim all liability",
                    "use at your own risk",
                ],
            ),
            (
                "Surveillance & Tracking",
                &[
                    "track your behavior",
                    "collect location data",
                    "monitor your activity",
                    "session recording",
                    "key logging",
                ],
            ),
            (
                "Account & Access Risks",
                &[
                    "you are responsible for safeguarding",
                    "we may disable your account without notice",
                ],
            ),
            (
                "Retention & Deletion",
                &[
                    "retain your information",
                    "data may be stored indefinitely",
                    "we may keep your data",
                ],
            ),
            (
                "International Data Transfer",
                &[
                    "transfer your data internationally",
                    "outside your jurisdiction",
                ],
            ),
        ];

        Self::new(
            entries
                .iter()
                .map(|(name, phrases)| RiskCategory {
                    name: (*name).to_string(),
                    trigger_phrases: phrases.iter().map(|p| (*p).to_string()).collect(),
                })
                .collect(),
        )
    }

    /// Categories in declaration order
    pub fn categories(&self) -> &[RiskCategory] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total trigger phrase count across all categories
    pub fn phrase_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.trigger_phrases.len())
            .sum()
    }
}

impl Default for RiskTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}
