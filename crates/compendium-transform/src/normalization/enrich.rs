//! The detailed-view pipeline.
//!
//! Rewrites the shorthand used in medicinal cells into readable prose: book
//! citations become full references, icon-wrapped paper identifiers become
//! `Paper:` entries, rating codes become labeled phrases, PMCID/PMID tokens
//! become links to their public records. The emitted inline markup is the
//! contract with the rendering layer.

use std::sync::LazyLock;

use regex::Regex;

use super::{run_pipeline, Step};

static LAD_CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Lad,\s*p\.\s*(\d+)").unwrap());

static CCRAS_CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)CCRAS,\s*p\.\s*(\d+)").unwrap());

/// A bracketed span wrapping an icon glyph and a paper identifier.
static PAPER_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\[(?:📌|🔬)\s*"?(?:[^"]*?)?((?:PMCID:\s*PMC\d+)|(?:PMID:\s*\d+))"?.?\]"#)
        .unwrap()
});

/// Leftover icon-plus-bracket openers once the identifier is collapsed.
static ICON_WRAPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(?:📌|🔬)\s*").unwrap());

static PMCID_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(PMCID:\s*)(PMC\d+)").unwrap());

static PMID_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(PMID:\s*)(\d+)").unwrap());

/// The fixed rating codes: shorthand, label, spelled-out value.
const RATING_CODES: [(&str, &str, &str); 7] = [
    ("Ayur:E", "Ayurvedic", "Excellent"),
    ("Ayur:G", "Ayurvedic", "Good"),
    ("Ayur:N", "Ayurvedic", "Nominal"),
    ("Sci:S", "Scientific studies", "Strong Clinical Support"),
    ("Sci:M", "Scientific studies", "Moderate Clinical Support"),
    ("Sci:L", "Scientific studies", "Limited"),
    ("Sci:N", "Scientific studies", "None or Contraindicated"),
];

/// Compiled rating patterns, tolerant of an optional space after the colon.
static RATING_PATTERNS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    RATING_CODES
        .iter()
        .map(|(code, label, value)| {
            let pattern = format!(r"(?i)\b{}\b", code.replace(':', r":\s*"));
            let replacement =
                format!("<strong>{label}:</strong> <span class=\"font-bold italic\">{value}</span>");
            (Regex::new(&pattern).unwrap(), replacement)
        })
        .collect()
});

const ENRICH_STEPS: [Step; 4] = [
    Step::new("collapse-paper-refs", collapse_paper_refs),
    Step::new("format-ratings", format_ratings),
    Step::new("linkify-record-ids", linkify_record_ids),
    Step::new("break-newlines", break_newlines),
];

/// Produce the detailed rendering of `text`.
///
/// `expand_citations` controls the book-citation rewrite; the rest of the
/// pipeline always runs, in order.
pub fn enrich(text: &str, expand_citations: bool) -> String {
    let content = if expand_citations {
        expand_citation_shorthand(text)
    } else {
        text.to_string()
    };
    run_pipeline(&ENRICH_STEPS, &content)
}

fn expand_citation_shorthand(text: &str) -> String {
    let content = LAD_CITATION.replace_all(
        text,
        "The Complete Book of Ayurvedic Home Remedies, Vasant Lad (Page ${1})",
    );
    CCRAS_CITATION
        .replace_all(&content, "CCRA, Ministry of Health (Page ${1})")
        .into_owned()
}

fn collapse_paper_refs(text: &str) -> String {
    let content = PAPER_REF.replace_all(text, "Paper: ${1}");
    ICON_WRAPPER
        .replace_all(&content, "")
        .replace(']', "")
}

fn format_ratings(text: &str) -> String {
    let mut content = text.to_string();
    for (pattern, replacement) in RATING_PATTERNS.iter() {
        content = pattern.replace_all(&content, replacement.as_str()).into_owned();
    }
    content
}

fn linkify_record_ids(text: &str) -> String {
    let content = PMCID_TOKEN.replace_all(
        text,
        "<a href=\"https://www.ncbi.nlm.nih.gov/pmc/articles/${2}/\" target=\"_blank\" \
         class=\"text-indigo-600 hover:underline\">${1}${2}</a>",
    );
    PMID_TOKEN
        .replace_all(
            &content,
            "<a href=\"https://pubmed.ncbi.nlm.nih.gov/${2}/\" target=\"_blank\" \
             class=\"text-indigo-600 hover:underline\">${1}${2}</a>",
        )
        .into_owned()
}

fn break_newlines(text: &str) -> String {
    text.replace('\n', "<br />")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_book_citations_when_enabled() {
        let out = enrich("See Lad, p. 112 for the remedy.", true);
        assert!(out.contains(
            "The Complete Book of Ayurvedic Home Remedies, Vasant Lad (Page 112)"
        ));

        let out = enrich("Per CCRAS, p.44.", true);
        assert!(out.contains("CCRA, Ministry of Health (Page 44)"));
    }

    #[test]
    fn keeps_citation_shorthand_when_disabled() {
        let out = enrich("See Lad, p. 112 for the remedy.", false);
        assert!(out.contains("Lad, p. 112"));
    }

    #[test]
    fn collapses_icon_wrapped_paper_refs() {
        let out = enrich("[📌 \"PMCID: PMC123456\"]", false);
        assert!(out.starts_with("Paper: "));
        assert!(!out.contains('['));
        assert!(!out.contains(']'));
        assert!(out.contains("PMC123456"));

        let out = enrich("[🔬 PMID: 31014016]", false);
        assert!(out.starts_with("Paper: "));
        assert!(out.contains("31014016"));
    }

    #[test]
    fn strips_leftover_icon_wrappers() {
        assert_eq!(collapse_paper_refs("[🔬 loose note]"), "loose note");
    }

    #[test]
    fn formats_rating_codes_with_labels() {
        let out = enrich("Common cold: Ayur:E", false);
        assert!(out.contains(
            "<strong>Ayurvedic:</strong> <span class=\"font-bold italic\">Excellent</span>"
        ));

        let out = enrich("sci: m overall", false);
        assert!(out.contains(
            "<strong>Scientific studies:</strong> \
             <span class=\"font-bold italic\">Moderate Clinical Support</span>"
        ));
    }

    #[test]
    fn linkifies_record_ids_preserving_visible_text() {
        let out = enrich("PMID: 31014016", false);
        assert!(out.contains("https://pubmed.ncbi.nlm.nih.gov/31014016/"));
        assert!(out.contains(">PMID: 31014016</a>"));

        let out = enrich("PMCID: PMC6414512", false);
        assert!(out.contains("https://www.ncbi.nlm.nih.gov/pmc/articles/PMC6414512/"));
        assert!(out.contains(">PMCID: PMC6414512</a>"));
    }

    #[test]
    fn converts_newlines_to_breaks_last() {
        assert_eq!(enrich("a\nb", false), "a<br />b");
    }
}
