//! Additive scoring over the category tables.
//!
//! Three signal strengths, strongest first:
//! - stated use: +2 per keyword found in the `Traditional Use` column
//! - rating flag: +3 for `ayur:e`, else +1 for `ayur:g`, per owned rating column
//! - incidental mention: +0.5 per keyword found in any other column
//!
//! A keyword sitting in a rating column contributes to both the rating-flag
//! and the incidental score of the owning category; the reinforcing
//! double-count is intentional.

use serde::Serialize;

use compendium_model::Row;

use crate::categories::{CATEGORIES, FALLBACK_CATEGORY, TRADITIONAL_USE_COLUMN};

/// Score of one category for one record, broken down by signal.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub category: &'static str,
    /// Keyword hits in the stated-use column, at 2.0 each.
    pub stated_use: f64,
    /// Rating flags in the category's own columns, at 3.0 / 1.0.
    pub rating_flags: f64,
    /// Keyword hits anywhere else, at 0.5 each.
    pub incidental: f64,
}

impl CategoryScore {
    pub fn total(&self) -> f64 {
        self.stated_use + self.rating_flags + self.incidental
    }
}

/// Assign a record to the strictly best-scoring category.
///
/// Ties keep the first category in declaration order; a record with no
/// signal anywhere falls back to `Medicinal Herbs`.
pub fn classify(row: &Row) -> String {
    let breakdown = score_breakdown(row);
    let mut best: Option<&CategoryScore> = None;
    for score in &breakdown {
        let beats = best.is_none_or(|current| score.total() > current.total());
        if beats && score.total() > 0.0 {
            best = Some(score);
        }
    }
    best.map_or_else(|| FALLBACK_CATEGORY.to_string(), |s| s.category.to_string())
}

/// Score every category for one record. Deterministic: identical rows always
/// produce identical breakdowns.
pub fn score_breakdown(row: &Row) -> Vec<CategoryScore> {
    let stated_use = row.value(TRADITIONAL_USE_COLUMN).to_lowercase();

    CATEGORIES
        .iter()
        .map(|profile| {
            let mut score = CategoryScore {
                category: profile.name,
                stated_use: 0.0,
                rating_flags: 0.0,
                incidental: 0.0,
            };

            for keyword in profile.keywords {
                if stated_use.contains(keyword) {
                    score.stated_use += 2.0;
                }
            }

            for column in profile.rating_columns {
                let cell = row.value(column).to_lowercase();
                if cell.contains("ayur:e") {
                    score.rating_flags += 3.0;
                } else if cell.contains("ayur:g") {
                    score.rating_flags += 1.0;
                }
            }

            for keyword in profile.keywords {
                for (column, value) in row.iter() {
                    if column == TRADITIONAL_USE_COLUMN
                        || profile.rating_columns.contains(&column)
                    {
                        continue;
                    }
                    if value.to_lowercase().contains(keyword) {
                        score.incidental += 0.5;
                    }
                }
            }

            score
        })
        .collect()
}

/// Human-readable score summary, best category first.
pub fn explain(row: &Row) -> String {
    let mut breakdown = score_breakdown(row);
    breakdown.sort_by(|a, b| {
        b.total()
            .partial_cmp(&a.total())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    breakdown
        .iter()
        .filter(|score| score.total() > 0.0)
        .map(|score| format!("{}: {:.1}", score.category, score.total()))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn herb_row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().copied().collect()
    }

    #[test]
    fn stated_use_outranks_incidental_mentions() {
        let row = herb_row(&[
            ("Herb Name", "Fennel"),
            ("Traditional Use", "relieves gas and bloating after meals"),
            ("Notes", "popular for skin rinses"),
        ]);
        assert_eq!(classify(&row), "Digestive");
    }

    #[test]
    fn rating_flags_score_their_owning_category() {
        let row = herb_row(&[
            ("Herb Name", "Tulsi"),
            ("Traditional Use", "daily tonic"),
            ("Common Cold", "Ayur:E strong traditional record"),
            ("Sore Throat", "Ayur:G"),
        ]);
        assert_eq!(classify(&row), "Immunity");
        let breakdown = score_breakdown(&row);
        let immunity = breakdown.iter().find(|s| s.category == "Immunity").unwrap();
        assert_eq!(immunity.rating_flags, 4.0);
    }

    #[test]
    fn excellent_flag_suppresses_good_flag_in_same_cell() {
        let row = herb_row(&[("Hormonal impact", "Ayur:E formerly Ayur:G")]);
        let breakdown = score_breakdown(&row);
        let hormonal = breakdown.iter().find(|s| s.category == "Hormonal").unwrap();
        assert_eq!(hormonal.rating_flags, 3.0);
    }

    #[test]
    fn no_signal_falls_back() {
        let row = herb_row(&[("Herb Name", "Mystery"), ("Notes", "unremarkable")]);
        assert_eq!(classify(&row), FALLBACK_CATEGORY);
    }

    #[test]
    fn ties_keep_declaration_order() {
        // One stated-use keyword each for Digestive and Hormonal: equal
        // scores, Digestive is declared first.
        let row = herb_row(&[("Traditional Use", "supports digestion and menstrual comfort")]);
        assert_eq!(classify(&row), "Digestive");
    }

    #[test]
    fn classification_is_deterministic() {
        let row = herb_row(&[
            ("Traditional Use", "calming nervine for sleep"),
            ("Notes", "bedtime tea"),
        ]);
        let first = classify(&row);
        for _ in 0..10 {
            assert_eq!(classify(&row), first);
        }
    }

    #[test]
    fn explain_lists_scoring_categories_only() {
        let row = herb_row(&[("Traditional Use", "bitter tonic for liver health")]);
        let summary = explain(&row);
        assert!(summary.contains("Detox & Liver"));
        assert!(!summary.contains("Hormonal"));
    }
}
